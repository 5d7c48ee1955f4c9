use crate::{audio::wav, MemovoxError, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleRate, Stream, StreamConfig};
use crossbeam_channel::{unbounded, Receiver};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Requested capture quality. The device default is used when the
/// preferred rate/channel layout is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureProfile {
    pub sample_rate: u32,
    pub channels: u16,
}

impl Default for CaptureProfile {
    fn default() -> Self {
        // Uncompressed 44.1kHz stereo, written as 16-bit WAV
        Self {
            sample_rate: 44_100,
            channels: 2,
        }
    }
}

/// A live microphone capture. Exists only between record-start and
/// record-stop; finishing it writes the WAV file and returns its location.
pub struct AudioCapture {
    stream: Option<Stream>,
    sample_rx: Receiver<Vec<f32>>,
    config: StreamConfig,
}

impl AudioCapture {
    /// Open the default input device and start capturing.
    pub fn start(profile: CaptureProfile) -> Result<Self> {
        let host = cpal::default_host();

        let device = host
            .default_input_device()
            .ok_or_else(|| MemovoxError::AudioDeviceError("No input device available".into()))?;

        info!(
            "Using input device: {}",
            device.name().unwrap_or_else(|_| "Unknown".to_string())
        );

        let config = Self::pick_config(&device, profile)?;

        // The channel is drained only when the capture is finalized, so it
        // must hold a whole memo; a bounded channel would drop the tail.
        let (sample_tx, sample_rx) = unbounded::<Vec<f32>>();

        let err_fn = |err| {
            error!("Audio input stream error: {}", err);
        };

        let stream = device
            .build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if sample_tx.send(data.to_vec()).is_err() {
                        debug!("Capture channel closed, dropping {} samples", data.len());
                    }
                },
                err_fn,
                None,
            )
            .map_err(|e| MemovoxError::CaptureError(format!("Failed to build input stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| MemovoxError::CaptureError(format!("Failed to start input stream: {}", e)))?;

        info!(
            "Started audio capture: {} Hz, {} channels",
            config.sample_rate.0, config.channels
        );

        Ok(Self {
            stream: Some(stream),
            sample_rx,
            config,
        })
    }

    /// Prefer the profile's rate and channel layout, falling back to the
    /// device default when unsupported.
    fn pick_config(device: &Device, profile: CaptureProfile) -> Result<StreamConfig> {
        let wanted = SampleRate(profile.sample_rate);

        if let Ok(mut ranges) = device.supported_input_configs() {
            if let Some(range) = ranges.find(|r| {
                r.channels() == profile.channels
                    && r.sample_format() == cpal::SampleFormat::F32
                    && r.min_sample_rate() <= wanted
                    && wanted <= r.max_sample_rate()
            }) {
                return Ok(range.with_sample_rate(wanted).into());
            }
        }

        let config: StreamConfig = device
            .default_input_config()
            .map_err(|e| {
                MemovoxError::AudioDeviceError(format!("Failed to get input config: {}", e))
            })?
            .into();

        warn!(
            "Input device does not support {} Hz / {} ch, using {} Hz / {} ch",
            profile.sample_rate, profile.channels, config.sample_rate.0, config.channels
        );

        Ok(config)
    }

    /// Sample rate of the running capture
    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate.0
    }

    /// Channel count of the running capture
    pub fn channels(&self) -> u16 {
        self.config.channels
    }

    /// Stop the stream, drain the captured samples, and write them to `path`.
    pub fn finish(mut self, path: &Path) -> Result<PathBuf> {
        if let Some(stream) = self.stream.take() {
            drop(stream);
        }

        let samples = drain_samples(&self.sample_rx);

        if samples.is_empty() {
            warn!("Capture produced no samples");
        }

        wav::write_wav(path, &samples, self.config.sample_rate.0, self.config.channels)?;

        let seconds =
            samples.len() as f32 / (self.config.sample_rate.0 as f32 * self.config.channels as f32);
        info!("Captured {:.1}s of audio to {:?}", seconds, path);

        Ok(path.to_path_buf())
    }
}

/// Collect every queued sample chunk into one buffer
fn drain_samples(rx: &Receiver<Vec<f32>>) -> Vec<f32> {
    let mut samples = Vec::new();
    while let Ok(chunk) = rx.try_recv() {
        samples.extend_from_slice(&chunk);
    }
    samples
}

impl Drop for AudioCapture {
    fn drop(&mut self) {
        if let Some(stream) = self.stream.take() {
            drop(stream);
            info!("Discarded active capture");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = CaptureProfile::default();
        assert_eq!(profile.sample_rate, 44_100);
        assert_eq!(profile.channels, 2);
    }

    #[test]
    fn test_long_capture_drains_every_chunk() {
        // ~30s at 44.1kHz stereo with 512-frame callbacks: far more chunks
        // than any fixed channel capacity may hold
        let (tx, rx) = unbounded::<Vec<f32>>();
        let chunks = 2_500usize;
        let chunk_len = 1_024usize;
        for i in 0..chunks {
            tx.send(vec![(i % 100) as f32 / 100.0; chunk_len])
                .expect("send chunk");
        }

        let samples = drain_samples(&rx);
        assert_eq!(samples.len(), chunks * chunk_len, "No chunk may be lost");
    }

    #[test]
    fn test_long_capture_reaches_the_wav_intact() {
        let (tx, rx) = unbounded::<Vec<f32>>();
        let chunks = 300usize;
        let chunk_len = 1_024usize;
        for _ in 0..chunks {
            tx.send(vec![0.25; chunk_len]).expect("send chunk");
        }

        let samples = drain_samples(&rx);

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("long-memo.wav");
        wav::write_wav(&path, &samples, 44_100, 2).expect("write wav");

        let (read, _, _) = wav::read_wav(&path).expect("read wav");
        assert_eq!(read.len(), chunks * chunk_len);
    }

    #[test]
    fn test_capture_lifecycle() {
        // This test might fail in CI environments without audio devices
        if let Ok(capture) = AudioCapture::start(CaptureProfile::default()) {
            assert!(capture.sample_rate() > 0);
            assert!(capture.channels() > 0);

            let dir = tempfile::tempdir().expect("temp dir");
            let path = dir.path().join("memo.wav");
            let location = capture.finish(&path).expect("finish capture");
            assert!(location.exists());
        }
    }
}
