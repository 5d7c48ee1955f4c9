//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for Memovox.

mod app;
pub mod components;
mod state;
mod theme;

pub use app::MemovoxApp;
pub use components::{FloatingElements, RecordButton, RecordingGallery, ThemeToggle};
pub use state::AppState;
pub use theme::Theme;
