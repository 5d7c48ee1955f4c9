use crate::{MemovoxError, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

/// Audio playback with at most one loaded sink at a time. Playing a new
/// location releases the current sink before the new one is created.
pub struct AudioPlayback {
    // The stream must stay alive for the sink to produce sound; it is
    // opened lazily on the first play request.
    stream: Option<(OutputStream, OutputStreamHandle)>,
    sink: Option<Sink>,
    current: Option<PathBuf>,
}

impl AudioPlayback {
    pub fn new() -> Self {
        Self {
            stream: None,
            sink: None,
            current: None,
        }
    }

    /// Load and play the WAV file at `location`, replacing any sink that is
    /// currently loaded.
    pub fn play(&mut self, location: &Path) -> Result<()> {
        // Release the current sink first so a failed load leaves nothing behind
        self.stop();

        let file = File::open(location)
            .map_err(|e| MemovoxError::PlaybackError(format!("Failed to open {:?}: {}", location, e)))?;

        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| MemovoxError::PlaybackError(format!("Failed to decode {:?}: {}", location, e)))?;

        let handle = self.ensure_stream()?;
        let sink = Sink::try_new(handle)
            .map_err(|e| MemovoxError::PlaybackError(format!("Failed to create sink: {}", e)))?;

        sink.append(source);
        sink.play();

        self.sink = Some(sink);
        self.current = Some(location.to_path_buf());

        info!("Playing {:?}", location);
        Ok(())
    }

    /// Release the loaded sink, if any
    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
            info!("Released playback sink");
        }
        self.current = None;
    }

    /// Whether a sink is currently loaded
    pub fn is_loaded(&self) -> bool {
        self.sink.is_some()
    }

    /// Location of the currently loaded sound. A sink that has drained
    /// counts as unloaded, so a finished memo stops reporting here.
    pub fn current_location(&self) -> Option<&Path> {
        match &self.sink {
            Some(sink) if !sink.empty() => self.current.as_deref(),
            _ => None,
        }
    }

    /// Whether the loaded sink is actively producing sound
    pub fn is_playing(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.empty() && !s.is_paused())
            .unwrap_or(false)
    }

    fn ensure_stream(&mut self) -> Result<&OutputStreamHandle> {
        if self.stream.is_none() {
            let (stream, handle) = OutputStream::try_default().map_err(|e| {
                MemovoxError::AudioDeviceError(format!("No output device available: {}", e))
            })?;
            self.stream = Some((stream, handle));
        }

        match &self.stream {
            Some((_, handle)) => Ok(handle),
            None => Err(MemovoxError::AudioDeviceError(
                "Output stream unavailable".into(),
            )),
        }
    }
}

impl Default for AudioPlayback {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AudioPlayback {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::wav;

    fn write_test_wav(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        let samples: Vec<f32> = (0..2205).map(|i| (i as f32 * 0.02).sin() * 0.3).collect();
        wav::write_wav(&path, &samples, 44_100, 1).expect("write wav");
        path
    }

    #[test]
    fn test_initially_unloaded() {
        let playback = AudioPlayback::new();
        assert!(!playback.is_loaded());
        assert!(playback.current_location().is_none());
    }

    #[test]
    fn test_play_missing_file_leaves_nothing_loaded() {
        let mut playback = AudioPlayback::new();
        assert!(playback.play(Path::new("/nonexistent/memo.wav")).is_err());
        assert!(!playback.is_loaded());
        assert!(playback.current_location().is_none());
    }

    #[test]
    fn test_finished_playback_stops_reporting_location() {
        // This test might fail in CI environments without audio devices
        let dir = tempfile::tempdir().expect("temp dir");
        let short = write_test_wav(&dir, "short.wav");

        let mut playback = AudioPlayback::new();
        if playback.play(&short).is_ok() {
            // 2205 mono samples at 44.1kHz last 50ms
            std::thread::sleep(std::time::Duration::from_millis(500));
            assert!(
                playback.current_location().is_none(),
                "A drained sink must not keep the location highlighted"
            );
        }
    }

    #[test]
    fn test_play_replaces_current_sink() {
        // This test might fail in CI environments without audio devices
        let dir = tempfile::tempdir().expect("temp dir");
        let first = write_test_wav(&dir, "first.wav");
        let second = write_test_wav(&dir, "second.wav");

        let mut playback = AudioPlayback::new();
        if playback.play(&first).is_ok() {
            assert!(playback.is_loaded());
            assert_eq!(playback.current_location(), Some(first.as_path()));

            playback.play(&second).expect("play second");
            assert!(playback.is_loaded());
            assert_eq!(playback.current_location(), Some(second.as_path()));

            playback.stop();
            assert!(!playback.is_loaded());
        }
    }
}
