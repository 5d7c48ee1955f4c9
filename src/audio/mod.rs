pub mod capture;
pub mod playback;
pub mod wav;

pub use capture::{AudioCapture, CaptureProfile};
pub use playback::AudioPlayback;
