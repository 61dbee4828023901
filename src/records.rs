//! Session-best score records
//!
//! Lives only in process memory for the running session; carried across
//! match restarts, never persisted.

use serde::{Deserialize, Serialize};

/// Best-ever score per rider slot for this session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecords {
    best: [u64; 2],
}

impl SessionRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record for a rider slot (0 if none set yet)
    pub fn best(&self, slot: usize) -> u64 {
        self.best[slot]
    }

    /// Whether a score would beat the slot's record
    pub fn would_beat(&self, slot: usize, score: u64) -> bool {
        score > self.best[slot]
    }

    /// Submit a final score; returns true if it set a new record
    pub fn submit(&mut self, slot: usize, score: u64) -> bool {
        if self.would_beat(slot, score) {
            self.best[slot] = score;
            true
        } else {
            false
        }
    }
}
