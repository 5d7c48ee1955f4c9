//! Application state management
//!
//! Central state for the Memovox UI: the recording flag, the in-memory
//! recording list, and exclusive ownership of the capture and playback
//! handles.

use crate::audio::{AudioCapture, AudioPlayback, CaptureProfile};
use crate::recordings::{Recording, RecordingList};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub struct AppState {
    /// Completed recordings, most recent first
    pub recordings: RecordingList,

    /// Whether a capture is in progress (drives the record-button animation)
    pub is_recording: bool,

    /// Theme flag; true for the dark palette
    pub dark: bool,

    /// Frame time of the last theme toggle, while its transition plays
    pub theme_toggled_at: Option<f64>,

    /// Active capture handle; at most one at a time
    capture: Option<AudioCapture>,

    /// Playback handle owner; at most one loaded sink at a time
    playback: AudioPlayback,

    /// Where finished captures are written; dropped with the process
    scratch_dir: PathBuf,

    profile: CaptureProfile,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            recordings: RecordingList::new(),
            is_recording: false,
            dark: true,
            theme_toggled_at: None,
            capture: None,
            playback: AudioPlayback::new(),
            scratch_dir: std::env::temp_dir().join(format!("memovox-{}", std::process::id())),
            profile: CaptureProfile::default(),
        }
    }

    /// Begin a capture. No-op when one is already active; on failure the
    /// error is logged and no handle is retained.
    pub fn start_capture(&mut self) {
        if self.capture.is_some() {
            return;
        }

        match AudioCapture::start(self.profile) {
            Ok(capture) => {
                self.capture = Some(capture);
                self.is_recording = true;
                info!("Recording started");
            }
            Err(e) => {
                error!("Failed to start capture: {}", e);
            }
        }
    }

    /// Finalize the active capture and prepend the new recording. No-op when
    /// no capture is active; on failure nothing is added to the list.
    pub fn stop_capture(&mut self) {
        let Some(capture) = self.capture.take() else {
            return;
        };
        self.is_recording = false;

        if let Err(e) = fs::create_dir_all(&self.scratch_dir) {
            error!("Failed to create scratch directory: {}", e);
            return;
        }

        let path = self
            .scratch_dir
            .join(format!("memo-{}.wav", Local::now().timestamp_millis()));

        match capture.finish(&path) {
            Ok(location) => {
                self.register_recording(location);
                info!("Recording stopped");
            }
            Err(e) => {
                error!("Failed to finalize capture: {}", e);
            }
        }
    }

    /// Derive a `Recording` for a finalized capture location and prepend it
    pub fn register_recording(&mut self, location: PathBuf) {
        let counter = self.recordings.len() + 1;
        self.recordings.prepend(Recording::new(location, counter));
    }

    /// Load and play the sound at `location`, replacing any current one.
    /// Errors are logged, not surfaced.
    pub fn play(&mut self, location: &Path) {
        if let Err(e) = self.playback.play(location) {
            error!("Failed to play {:?}: {}", location, e);
        }
    }

    /// Flip the theme flag
    pub fn toggle_theme(&mut self) {
        self.dark = !self.dark;
    }

    pub fn has_active_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub fn playback(&self) -> &AudioPlayback {
        &self.playback
    }

    /// Release the capture and playback handles. Also runs on drop through
    /// the owning types.
    pub fn shutdown(&mut self) {
        if let Some(capture) = self.capture.take() {
            drop(capture);
            info!("Discarded in-progress capture on shutdown");
        }
        self.playback.stop();
        self.is_recording = false;
    }
}
