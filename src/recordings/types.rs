use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One completed capture. Immutable after creation; lives in memory for the
/// lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    /// Opaque identifier derived from the creation timestamp
    pub id: String,
    /// Path of the WAV file on disk
    pub location: PathBuf,
    /// Display name carrying the sequential memo counter
    pub name: String,
    /// Creation time, used for the ordering invariant
    pub created_at: DateTime<Local>,
    /// Localized display timestamp
    pub date: String,
}

impl Recording {
    /// Create a recording for a finished capture. `counter` is the list
    /// length at creation time plus one.
    pub fn new(location: PathBuf, counter: usize) -> Self {
        let created_at = Local::now();
        Self {
            id: created_at.timestamp_millis().to_string(),
            location,
            name: format!("Memo {}", counter),
            created_at,
            date: created_at.format("%d/%m/%Y %H:%M:%S").to_string(),
        }
    }

    /// Seconds elapsed since this recording was created. Drives the
    /// staggered entrance animation of the list card.
    pub fn age_seconds(&self) -> f32 {
        (Local::now() - self.created_at).num_milliseconds().max(0) as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_carries_counter() {
        let recording = Recording::new(PathBuf::from("/tmp/memo-1.wav"), 3);
        assert_eq!(recording.name, "Memo 3");
    }

    #[test]
    fn test_id_is_timestamp_derived() {
        let recording = Recording::new(PathBuf::from("/tmp/memo-1.wav"), 1);
        assert_eq!(recording.id, recording.created_at.timestamp_millis().to_string());
    }

    #[test]
    fn test_age_is_non_negative() {
        let recording = Recording::new(PathBuf::from("/tmp/memo-1.wav"), 1);
        assert!(recording.age_seconds() >= 0.0);
    }
}
