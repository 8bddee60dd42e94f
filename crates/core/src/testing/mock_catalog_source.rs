//! Mock catalog source for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::catalog_source::{CatalogSource, FetchError};
use crate::wine::Wine;

/// Mock implementation of the CatalogSource trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable wine list
/// - Delay responses to observe the loading phase
/// - Simulate failures
/// - Count fetches for assertions
#[derive(Debug, Default)]
pub struct MockCatalogSource {
    wines: Arc<RwLock<Vec<Wine>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<FetchError>>>,
    fail_always: Arc<RwLock<Option<String>>>,
    fetches: AtomicUsize,
}

impl MockCatalogSource {
    /// Create a mock serving an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock serving `wines`.
    pub fn with_wines(wines: Vec<Wine>) -> Self {
        Self {
            wines: Arc::new(RwLock::new(wines)),
            ..Self::default()
        }
    }

    /// Replace the served catalog.
    pub async fn set_wines(&self, wines: Vec<Wine>) {
        *self.wines.write().await = wines;
    }

    /// Delay every fetch by `delay`.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_error(&self, error: FetchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make every fetch fail with a network failure until cleared.
    pub async fn set_unreachable(&self, reason: &str) {
        *self.fail_always.write().await = Some(reason.to_string());
    }

    /// Clear any configured failure.
    pub async fn clear_errors(&self) {
        *self.next_error.write().await = None;
        *self.fail_always.write().await = None;
    }

    /// Number of fetches performed.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_wines(&self) -> Result<Vec<Wine>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let error = self.next_error.write().await.take();

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = error {
            return Err(error);
        }
        if let Some(reason) = self.fail_always.read().await.clone() {
            return Err(FetchError::NetworkFailure(reason));
        }
        Ok(self.wines.read().await.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
