pub mod floating_elements;
pub mod record_button;
pub mod recording_list;
pub mod theme_toggle;

pub use floating_elements::FloatingElements;
pub use record_button::RecordButton;
pub use recording_list::RecordingGallery;
pub use theme_toggle::ThemeToggle;
