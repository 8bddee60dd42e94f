//! Remote catalog service integration.
//!
//! The catalog service is an opaque HTTP collaborator returning the full
//! wine list as a JSON array. Everything that can go wrong on the way is
//! reported as a [`FetchError`].

mod http;

pub use http::HttpCatalogSource;

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::wine::Wine;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not complete.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The service answered with a non-success status.
    #[error("HTTP error! status: {status}{}", fmt_message(.message))]
    BadStatus { status: u16, message: String },

    /// The body is not a valid wine array.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

fn fmt_message(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(" ({})", message)
    }
}

impl FetchError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NetworkFailure(_) => "network_failure",
            FetchError::Timeout(_) => "timeout",
            FetchError::BadStatus { .. } => "bad_status",
            FetchError::MalformedPayload(_) => "malformed_payload",
        }
    }
}

/// Source of the full wine list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every record the service knows about, in service order.
    async fn fetch_wines(&self) -> Result<Vec<Wine>, FetchError>;

    /// Name of this source, for logs.
    fn name(&self) -> &'static str;
}

/// Check the invariants a fetched set must hold before it is shown.
///
/// Prices must be finite and non-negative, ids unique.
pub fn validate_wines(wines: &[Wine]) -> Result<(), FetchError> {
    let mut seen = HashSet::with_capacity(wines.len());
    for wine in wines {
        if !wine.price.is_finite() || wine.price < 0.0 {
            return Err(FetchError::MalformedPayload(format!(
                "wine {} has invalid price {}",
                wine.id, wine.price
            )));
        }
        if !seen.insert(wine.id) {
            return Err(FetchError::MalformedPayload(format!(
                "duplicate wine id {}",
                wine.id
            )));
        }
    }
    Ok(())
}
