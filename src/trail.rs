use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Serialize)]
pub struct TrailEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

#[derive(Clone, Default)]
pub struct EventTrail {
    entries: Arc<Mutex<Vec<TrailEntry>>>,
}

impl EventTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let mut at = Utc::now();
        // timestamps must be non-decreasing even if the wall clock steps back
        if let Some(last) = entries.last() {
            if last.at > at {
                at = last.at;
            }
        }
        entries.push(TrailEntry { at, message });
    }

    pub fn snapshot(&self) -> Vec<TrailEntry> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|entry| entry.message.contains(needle))
    }
}
