pub mod audio;
pub mod recordings;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemovoxError {
    #[error("Audio device error: {0}")]
    AudioDeviceError(String),

    #[error("Capture error: {0}")]
    CaptureError(String),

    #[error("Playback error: {0}")]
    PlaybackError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for MemovoxError {
    fn from(e: std::io::Error) -> Self {
        MemovoxError::IoError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MemovoxError>;
