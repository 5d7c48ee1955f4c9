//! Main application struct and eframe integration
//!
//! This module contains the MemovoxApp that implements eframe::App.

use crate::ui::components::{FloatingElements, RecordButton, RecordingGallery, ThemeToggle};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};

const TITLE_FADE_SECS: f64 = 1.0;

/// Main Memovox application
pub struct MemovoxApp {
    /// Application state
    state: AppState,
    /// Palette for the current theme flag
    theme: Theme,
    /// Frame time of the first frame, for the title fade-in
    start_time: Option<f64>,
}

impl MemovoxApp {
    /// Create a new Memovox application
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();
        let theme = Theme::for_mode(state.dark);
        theme.apply(&cc.egui_ctx);

        Self {
            state,
            theme,
            start_time: None,
        }
    }

    /// Rebuild and re-apply the palette after the flag was toggled
    fn sync_theme(&mut self, ctx: &egui::Context) {
        if self.theme.dark != self.state.dark {
            self.theme = Theme::for_mode(self.state.dark);
            self.theme.apply(ctx);
        }
    }

    fn title_alpha(&self, ctx: &egui::Context) -> f32 {
        match self.start_time {
            Some(start) => {
                let now = ctx.input(|i| i.time);
                (((now - start) / TITLE_FADE_SECS).clamp(0.0, 1.0)) as f32
            }
            None => 0.0,
        }
    }

    /// Show the top header bar: fading title and the theme toggle
    fn show_header(&mut self, ctx: &egui::Context) {
        let alpha = self.title_alpha(ctx);
        if alpha < 1.0 {
            ctx.request_repaint();
        }

        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Memovox")
                            .size(28.0)
                            .strong()
                            .color(self.theme.text_primary.gamma_multiply(alpha)),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ThemeToggle::new(&mut self.state, &self.theme).show(ui);
                    });
                });
            });
    }

    /// Show the main content: floating background, record button, memo list
    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                // Decorations first so the content paints over them
                let full_rect = ui.max_rect();
                FloatingElements::new(&self.theme).show(ui, full_rect);

                ui.add_space(self.theme.spacing);

                RecordButton::new(&mut self.state, &self.theme).show(ui);

                ui.add_space(self.theme.spacing_lg);

                ui.horizontal(|ui| {
                    ui.add_space(self.theme.spacing);
                    ui.label(
                        RichText::new("Your memos ✨")
                            .size(18.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                });

                ui.add_space(self.theme.spacing_sm);

                RecordingGallery::new(&mut self.state, &self.theme).show(ui);
            });
    }
}

impl eframe::App for MemovoxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.start_time.is_none() {
            self.start_time = Some(ctx.input(|i| i.time));
        }

        self.sync_theme(ctx);

        self.show_header(ctx);
        self.show_content(ctx);

        // Keep animating while recording or playing back
        if self.state.is_recording || self.state.playback().is_playing() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.shutdown();
        tracing::info!("Memovox shutting down");
    }
}
