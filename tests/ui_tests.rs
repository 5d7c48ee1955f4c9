//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests drive the real components through the accessibility tree:
//! the record button, the theme toggle, and the recording list cards.

use chrono::Duration;
use memovox::recordings::Recording;
use memovox::ui::{AppState, RecordButton, RecordingGallery, Theme, ThemeToggle};
use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use std::path::PathBuf;

/// Application state wrapper for testing
struct TestApp {
    state: AppState,
    theme: Theme,
}

impl TestApp {
    fn new() -> Self {
        let state = AppState::new();
        let theme = Theme::for_mode(state.dark);
        Self { state, theme }
    }

    /// Seed a recording old enough for its entrance animation to be settled
    fn with_recording(self, name_counter: usize, location: &str) -> Self {
        let mut recording = Recording::new(PathBuf::from(location), name_counter);
        recording.created_at = recording.created_at - Duration::seconds(10);
        self.state.recordings.prepend(recording);
        self
    }
}

fn render_screen(app: &mut TestApp, ctx: &egui::Context) {
    // Theme may have been toggled through the UI during the test
    if app.theme.dark != app.state.dark {
        app.theme = Theme::for_mode(app.state.dark);
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        RecordButton::new(&mut app.state, &app.theme).show(ui);
        ui.separator();
        ui.horizontal(|ui| {
            ThemeToggle::new(&mut app.state, &app.theme).show(ui);
        });
        ui.separator();
        RecordingGallery::new(&mut app.state, &app.theme).show(ui);
    });
}

fn build_harness(app: TestApp) -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(420.0, 640.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                render_screen(app, ctx);
            },
            app,
        )
}

/// The record button is reachable through the accessibility tree
#[test]
fn test_record_button_exists() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    let _button = harness.get_by_label("Start recording");
}

/// The theme toggle is reachable through the accessibility tree
#[test]
fn test_theme_toggle_exists() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    let _toggle = harness.get_by_label("Toggle theme");
}

/// Clicking the theme toggle flips the flag
#[test]
fn test_theme_toggle_click_flips_flag() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    let original = harness.state().state.dark;

    harness.get_by_label("Toggle theme").click();
    harness.run();

    assert_ne!(harness.state().state.dark, original);
}

/// Toggling twice through the UI restores the original flag
#[test]
fn test_theme_toggle_twice_restores_flag() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    let original = harness.state().state.dark;

    harness.get_by_label("Toggle theme").click();
    harness.run();
    harness.get_by_label("Toggle theme").click();
    harness.run();

    assert_eq!(harness.state().state.dark, original);
}

/// An empty list shows the empty state
#[test]
fn test_empty_state_visible() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    let _hint = harness.get_by_label("No recordings yet");
}

/// Seeded recordings appear as cards with play buttons
#[test]
fn test_cards_and_play_buttons_visible() {
    let app = TestApp::new()
        .with_recording(1, "/tmp/memo-1.wav")
        .with_recording(2, "/tmp/memo-2.wav");

    let mut harness = build_harness(app);
    harness.run();

    let _first = harness.get_by_label("Play Memo 1");
    let _second = harness.get_by_label("Play Memo 2");
    let _name = harness.get_by_label("Memo 2");
}

/// Clicking play on a missing file is best-effort: nothing stays loaded
#[test]
fn test_play_click_on_missing_file_loads_nothing() {
    let app = TestApp::new().with_recording(1, "/nonexistent/memo.wav");

    let mut harness = build_harness(app);
    harness.run();

    harness.get_by_label("Play Memo 1").click();
    harness.run();

    assert!(!harness.state().state.playback().is_loaded());
}

/// Clicking the record button never leaves a half-open state: either a
/// capture is active and the flag is set, or neither.
#[test]
fn test_record_click_keeps_flag_and_handle_consistent() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    harness.get_by_label("Start recording").click();
    harness.run();

    let state = &harness.state().state;
    assert_eq!(state.is_recording, state.has_active_capture());
}
