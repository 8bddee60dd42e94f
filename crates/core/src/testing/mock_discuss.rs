//! Discuss handler that remembers what it was asked.

use std::sync::{Mutex, PoisonError};

use crate::discuss::{DiscussHandler, DiscussIntent};

/// Records every intent for later assertions.
#[derive(Debug, Default)]
pub struct RecordingDiscussHandler {
    intents: Mutex<Vec<DiscussIntent>>,
}

impl RecordingDiscussHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// All intents received so far, oldest first.
    pub fn intents(&self) -> Vec<DiscussIntent> {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiscussHandler for RecordingDiscussHandler {
    fn discuss(&self, intent: &DiscussIntent) {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(intent.clone());
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
