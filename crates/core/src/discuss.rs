//! "Discuss this wine" hook.
//!
//! A card only signals intent; what happens next belongs to whoever is
//! plugged in here. The default handler records the intent in the log.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::metrics::DISCUSS_REQUESTS_TOTAL;
use crate::wine::Wine;

/// A user asked to talk about a specific wine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussIntent {
    pub wine_id: i64,
    pub name: String,
}

impl From<&Wine> for DiscussIntent {
    fn from(wine: &Wine) -> Self {
        Self {
            wine_id: wine.id,
            name: wine.name.clone(),
        }
    }
}

/// Receiver of discuss intents.
pub trait DiscussHandler: Send + Sync {
    fn discuss(&self, intent: &DiscussIntent);

    /// Name of this handler, for logs.
    fn name(&self) -> &'static str;
}

/// Logs the intent and counts it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingDiscussHandler;

impl LoggingDiscussHandler {
    pub fn new() -> Self {
        Self
    }
}

impl DiscussHandler for LoggingDiscussHandler {
    fn discuss(&self, intent: &DiscussIntent) {
        DISCUSS_REQUESTS_TOTAL.inc();
        info!(wine_id = intent.wine_id, name = %intent.name, "Chat about wine requested");
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
