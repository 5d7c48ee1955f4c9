//! Record button component
//!
//! The main record button that toggles audio capture on/off.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{Color32, Key, Rect, RichText, Sense, Vec2};

/// Record button component for voice capture
pub struct RecordButton<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> RecordButton<'a> {
    /// Create a new record button component
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Show the button centered with a status label below it
    pub fn show(mut self, ui: &mut egui::Ui) -> egui::Response {
        ui.vertical_centered(|ui| {
            let size = Vec2::new(88.0, 88.0);
            let (rect, response) = ui.allocate_exact_size(size, Sense::click());

            if ui.is_rect_visible(rect) {
                self.paint_button(ui, rect, &response);
            }

            let label = if self.state.is_recording {
                "Stop recording"
            } else {
                "Start recording"
            };
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label)
            });

            self.handle_interactions(&response);
            self.handle_keyboard_shortcut(ui);

            ui.add_space(8.0);

            let (status_text, status_color) = if self.state.is_recording {
                ("Recording...", self.theme.recording)
            } else {
                ("Press to record", self.theme.text_muted)
            };
            ui.label(RichText::new(status_text).size(12.0).color(status_color));

            self.show_tooltip(&response);

            response
        })
        .inner
    }

    /// Paint the button appearance
    fn paint_button(&self, ui: &mut egui::Ui, rect: Rect, response: &egui::Response) {
        let painter = ui.painter();
        let is_recording = self.state.is_recording;

        let bg_color = if is_recording {
            self.theme.recording
        } else if response.hovered() {
            self.theme.primary.gamma_multiply(1.2)
        } else {
            self.theme.primary
        };

        // Pressed-scale effect
        let radius = if response.is_pointer_button_down_on() {
            38.0
        } else {
            40.0
        };

        painter.circle_filled(rect.center(), radius, bg_color);

        // Outer ring for hover effect
        if response.hovered() && !is_recording {
            painter.circle_stroke(
                rect.center(),
                radius + 2.0,
                egui::Stroke::new(2.0, self.theme.primary.gamma_multiply(0.6)),
            );
        }

        if is_recording {
            self.draw_stop_icon(painter, rect.center());
            self.draw_pulsing_rings(ui, rect.center());
            self.draw_orbiting_accent(ui, rect.center());
        } else {
            self.draw_mic_icon(painter, rect.center());
        }
    }

    /// Draw the stop square icon (when recording)
    fn draw_stop_icon(&self, painter: &egui::Painter, center: egui::Pos2) {
        let stop_size = 22.0;
        painter.rect_filled(
            Rect::from_center_size(center, Vec2::splat(stop_size)),
            3.0,
            Color32::WHITE,
        );
    }

    /// Draw the microphone glyph (when idle)
    fn draw_mic_icon(&self, painter: &egui::Painter, center: egui::Pos2) {
        let color = Color32::WHITE;

        // Mic body (rounded rectangle)
        let mic_rect = Rect::from_center_size(
            egui::pos2(center.x, center.y - 4.0),
            Vec2::new(11.0, 20.0),
        );
        painter.rect_filled(mic_rect, 5.5, color);

        // Mic stand arc (bottom half circle, approximated with segments)
        let arc_center = egui::pos2(center.x, center.y + 3.0);
        let arc_radius = 13.0;
        let num_segments = 8;
        for i in 0..num_segments {
            let start_angle = std::f32::consts::PI * (i as f32 / num_segments as f32);
            let end_angle = std::f32::consts::PI * ((i + 1) as f32 / num_segments as f32);

            let start = egui::pos2(
                arc_center.x - arc_radius * start_angle.cos(),
                arc_center.y + arc_radius * start_angle.sin(),
            );
            let end = egui::pos2(
                arc_center.x - arc_radius * end_angle.cos(),
                arc_center.y + arc_radius * end_angle.sin(),
            );

            painter.line_segment([start, end], egui::Stroke::new(2.5, color));
        }

        // Stem and base
        let stem_top = egui::pos2(center.x, arc_center.y + arc_radius);
        let stem_bottom = egui::pos2(center.x, arc_center.y + arc_radius + 6.0);
        painter.line_segment([stem_top, stem_bottom], egui::Stroke::new(2.5, color));

        let base_half = 7.0;
        painter.line_segment(
            [
                egui::pos2(center.x - base_half, stem_bottom.y),
                egui::pos2(center.x + base_half, stem_bottom.y),
            ],
            egui::Stroke::new(2.5, color),
        );
    }

    /// Draw two phase-offset pulsing rings around the button while recording
    fn draw_pulsing_rings(&self, ui: &egui::Ui, center: egui::Pos2) {
        let painter = ui.painter();
        let t = ui.ctx().input(|i| i.time);

        let pulse = ((t * 3.0).sin() * 0.5 + 0.5) as f32;
        let radius = 44.0 + pulse * 10.0;
        let alpha = (1.0 - pulse) * 0.6;
        painter.circle_stroke(
            center,
            radius,
            egui::Stroke::new(2.0 + pulse * 2.0, self.theme.recording.gamma_multiply(alpha)),
        );

        // Second ring, offset phase
        let pulse2 = (((t * 3.0) + std::f64::consts::PI).sin() * 0.5 + 0.5) as f32;
        let radius2 = 44.0 + pulse2 * 10.0;
        let alpha2 = (1.0 - pulse2) * 0.4;
        painter.circle_stroke(
            center,
            radius2,
            egui::Stroke::new(1.5 + pulse2 * 1.5, self.theme.recording.gamma_multiply(alpha2)),
        );

        ui.ctx().request_repaint();
    }

    /// Draw a slow accent dot circling the button while recording
    fn draw_orbiting_accent(&self, ui: &egui::Ui, center: egui::Pos2) {
        let painter = ui.painter();
        let t = ui.ctx().input(|i| i.time);
        let angle = t * std::f64::consts::TAU / 2.0;

        let orbit_radius = 52.0;
        let pos = egui::pos2(
            center.x + (angle.cos() as f32 * orbit_radius),
            center.y + (angle.sin() as f32 * orbit_radius),
        );
        painter.circle_filled(pos, 3.0, Color32::WHITE.gamma_multiply(0.8));

        ui.ctx().request_repaint();
    }

    /// Handle click to toggle capture
    fn handle_interactions(&mut self, response: &egui::Response) {
        if response.clicked() {
            if self.state.is_recording {
                self.state.stop_capture();
            } else {
                self.state.start_capture();
            }
        }
    }

    /// Space toggles recording when no widget has focus
    fn handle_keyboard_shortcut(&mut self, ui: &egui::Ui) {
        let space_pressed = ui.input(|i| i.key_pressed(Key::Space));
        let any_widget_focused = ui.memory(|m| m.focused().is_some());

        if space_pressed && !any_widget_focused {
            if self.state.is_recording {
                self.state.stop_capture();
            } else {
                self.state.start_capture();
            }
        }
    }

    fn show_tooltip(&self, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let tooltip_text = if self.state.is_recording {
            "Click to stop (Space)"
        } else {
            "Click to record (Space)"
        };

        response.clone().on_hover_text(tooltip_text);
    }
}
