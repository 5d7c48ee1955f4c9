use super::types::Recording;
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory recording list, ordered most-recent-first. Never persisted.
#[derive(Debug, Clone)]
pub struct RecordingList {
    items: Arc<RwLock<Vec<Recording>>>,
}

impl RecordingList {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Insert a recording at the front. Identifiers are kept unique: a
    /// candidate colliding with an existing entry is bumped until free.
    pub fn prepend(&self, mut recording: Recording) {
        let mut items = self.items.write();
        while items.iter().any(|r| r.id == recording.id) {
            recording.id = (recording.id.parse::<i64>().unwrap_or(0) + 1).to_string();
        }
        items.insert(0, recording);
    }

    pub fn get_all(&self) -> Vec<Recording> {
        self.items.read().clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl Default for RecordingList {
    fn default() -> Self {
        Self::new()
    }
}
