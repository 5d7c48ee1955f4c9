//! Recording list component
//!
//! Shows the completed memos as cards with a staggered entrance animation,
//! or an animated empty state when nothing has been recorded yet.

use crate::recordings::Recording;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};
use std::path::{Path, PathBuf};

/// Per-card entrance animation timing
const ENTRANCE_STAGGER_SECS: f32 = 0.1;
const ENTRANCE_DURATION_SECS: f32 = 0.6;
const ENTRANCE_SLIDE_PX: f32 = 40.0;
const ENTRANCE_SCALE_FROM: f32 = 0.8;

/// Recording list component
pub struct RecordingGallery<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> RecordingGallery<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let recordings = self.state.recordings.get_all();

        if recordings.is_empty() {
            self.show_empty_state(ui);
            return;
        }

        let current = self
            .state
            .playback()
            .current_location()
            .map(Path::to_path_buf);

        let mut to_play: Option<PathBuf> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(self.theme.spacing_sm);
                for (index, recording) in recordings.iter().enumerate() {
                    if let Some(location) =
                        self.show_card(ui, recording, index, current.as_deref())
                    {
                        to_play = Some(location);
                    }
                    ui.add_space(self.theme.spacing_sm);
                }
                ui.add_space(self.theme.spacing);
            });

        if let Some(location) = to_play {
            self.state.play(&location);
        }
    }

    /// Entrance progress for the card at `index`, eased cubic-out. The delay
    /// grows with list position for the cascade effect.
    fn entrance_progress(recording: &Recording, index: usize) -> f32 {
        let delay = index as f32 * ENTRANCE_STAGGER_SECS;
        let t = ((recording.age_seconds() - delay) / ENTRANCE_DURATION_SECS).clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }

    /// Card scale for the entrance: grows from 0.8 to full size
    fn entrance_scale(progress: f32) -> f32 {
        ENTRANCE_SCALE_FROM + (1.0 - ENTRANCE_SCALE_FROM) * progress
    }

    /// Render one card; returns the location when its play button was clicked
    fn show_card(
        &self,
        ui: &mut egui::Ui,
        recording: &Recording,
        index: usize,
        current: Option<&Path>,
    ) -> Option<PathBuf> {
        let eased = Self::entrance_progress(recording, index);
        let scale = Self::entrance_scale(eased);
        if eased < 1.0 {
            ui.ctx().request_repaint();
        }

        let mut clicked = None;

        ui.scope(|ui| {
            ui.set_opacity(eased);

            ui.horizontal(|ui| {
                // Slide in as the animation settles
                ui.add_space((1.0 - eased) * ENTRANCE_SLIDE_PX);

                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .rounding(self.theme.card_rounding)
                    .stroke(egui::Stroke::new(1.0, self.theme.bg_tertiary))
                    .inner_margin(self.theme.spacing * scale)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());

                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(&recording.name)
                                        .size(16.0 * scale)
                                        .strong()
                                        .color(self.theme.text_primary),
                                );
                                ui.label(
                                    RichText::new(&recording.date)
                                        .size(12.0 * scale)
                                        .color(self.theme.text_muted),
                                );
                            });

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if self.show_play_button(ui, recording, current, scale) {
                                        clicked = Some(recording.location.clone());
                                    }
                                },
                            );
                        });
                    });
            });
        });

        clicked
    }

    /// Render the play affordance; returns true when clicked
    fn show_play_button(
        &self,
        ui: &mut egui::Ui,
        recording: &Recording,
        current: Option<&Path>,
        scale: f32,
    ) -> bool {
        let is_current = current == Some(recording.location.as_path());

        let fill = if is_current {
            self.theme.secondary
        } else {
            self.theme.primary
        };

        let button =
            egui::Button::new(RichText::new("▶").size(16.0 * scale).color(egui::Color32::WHITE))
                .fill(fill)
                .rounding(self.theme.button_rounding)
                .min_size(Vec2::new(48.0, 36.0) * scale);

        let response = ui.add(button);
        let label = format!("Play {}", recording.name);
        response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, &label));

        let clicked = response.clicked();
        response.on_hover_text(format!("Play {}", recording.name));
        clicked
    }

    fn show_empty_state(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);

            // Gently pulsing stand-in for the looping mic clip
            let t = ui.ctx().input(|i| i.time);
            let pulse = ((t * 1.2).sin() * 0.5 + 0.5) as f32;

            let (rect, _) = ui.allocate_exact_size(Vec2::splat(100.0), egui::Sense::hover());
            let painter = ui.painter();
            painter.circle_filled(
                rect.center(),
                30.0 + pulse * 6.0,
                self.theme.primary.gamma_multiply(0.15 + pulse * 0.1),
            );
            painter.circle_filled(rect.center(), 22.0, self.theme.primary.gamma_multiply(0.5));
            painter.rect_filled(
                egui::Rect::from_center_size(
                    egui::pos2(rect.center().x, rect.center().y - 2.0),
                    Vec2::new(8.0, 14.0),
                ),
                4.0,
                egui::Color32::WHITE,
            );

            ui.add_space(self.theme.spacing);

            ui.label(
                RichText::new("No recordings yet")
                    .size(16.0)
                    .color(self.theme.text_secondary),
            );
            ui.label(
                RichText::new("Press the button above to record your first memo.")
                    .size(13.0)
                    .color(self.theme.text_muted),
            );

            ui.ctx().request_repaint();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_progress_respects_stagger() {
        let recording = Recording::new(PathBuf::from("/tmp/a.wav"), 1);
        // A freshly created recording has barely aged; a deep list position
        // means its delay has not elapsed yet.
        assert_eq!(RecordingGallery::entrance_progress(&recording, 50), 0.0);
    }

    #[test]
    fn test_entrance_progress_settles_at_one() {
        let mut recording = Recording::new(PathBuf::from("/tmp/a.wav"), 1);
        recording.created_at = recording.created_at - chrono::Duration::seconds(10);
        assert_eq!(RecordingGallery::entrance_progress(&recording, 0), 1.0);
    }

    #[test]
    fn test_entrance_scale_grows_to_full_size() {
        assert_eq!(RecordingGallery::entrance_scale(0.0), 0.8);
        assert_eq!(RecordingGallery::entrance_scale(1.0), 1.0);
        assert!(RecordingGallery::entrance_scale(0.5) > 0.8);
        assert!(RecordingGallery::entrance_scale(0.5) < 1.0);
    }
}
