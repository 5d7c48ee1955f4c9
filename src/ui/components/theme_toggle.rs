//! Theme toggle component
//!
//! A small sun/moon button that flips the theme flag and plays a short
//! press-scale plus rotation transition.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Pos2, Sense, Vec2};

const TRANSITION_SECS: f64 = 0.4;

/// Animated theme toggle button
pub struct ThemeToggle<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> ThemeToggle<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let size = Vec2::splat(36.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        let now = ui.ctx().input(|i| i.time);

        if response.clicked() {
            self.state.theme_toggled_at = Some(now);
            self.state.toggle_theme();
        }

        // Transition progress; None once settled
        let progress = match self.state.theme_toggled_at {
            Some(started) => {
                let t = ((now - started) / TRANSITION_SECS).clamp(0.0, 1.0) as f32;
                if t >= 1.0 {
                    self.state.theme_toggled_at = None;
                } else {
                    ui.ctx().request_repaint();
                }
                t
            }
            None => 1.0,
        };

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, &response, progress);
        }

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Toggle theme")
        });

        response.clone().on_hover_text(if self.state.dark {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        });

        response
    }

    fn paint(&self, ui: &egui::Ui, rect: egui::Rect, response: &egui::Response, progress: f32) {
        let painter = ui.painter();
        let center = rect.center();

        // Quick dip-and-recover scale, full turn over the transition
        let scale = 1.0 - 0.1 * (progress * std::f32::consts::PI).sin();
        let angle = progress * std::f32::consts::TAU;

        let outer = 16.0 * scale;
        let bg = if response.hovered() {
            self.theme.bg_tertiary
        } else {
            self.theme.bg_secondary
        };
        painter.circle_filled(center, outer, bg);
        painter.circle_stroke(center, outer, egui::Stroke::new(2.0, self.theme.bg_tertiary));

        // Amber moon in dark mode, blue sun disc in light mode
        let disc_color = if self.state.dark {
            egui::Color32::from_rgb(251, 191, 36)
        } else {
            self.theme.primary
        };
        let disc_radius = 9.0 * scale;
        painter.circle_filled(center, disc_radius, disc_color);

        if self.state.dark {
            // Crescent cutout, swung around by the transition angle
            let offset = Vec2::angled(angle) * disc_radius * 0.55;
            painter.circle_filled(
                Pos2::new(center.x + offset.x, center.y + offset.y),
                disc_radius * 0.75,
                bg,
            );
        }
    }
}
