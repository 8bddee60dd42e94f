//! HTTP catalog service client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::CatalogServiceConfig;
use crate::wine::Wine;

use super::{CatalogSource, FetchError};

/// Fetches the wine list with a single `GET` to the configured endpoint.
pub struct HttpCatalogSource {
    client: Client,
    url: String,
    timeout_secs: u64,
}

impl HttpCatalogSource {
    /// Create a new client for the configured endpoint.
    pub fn new(config: &CatalogServiceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(format!("Sentio/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::NetworkFailure(format!("failed to build client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout_secs)
        } else {
            FetchError::NetworkFailure(e.to_string())
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_wines(&self) -> Result<Vec<Wine>, FetchError> {
        debug!(url = %self.url, "Fetching wine catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                reason = status.canonical_reason().unwrap_or(""),
                "Catalog service returned an error status"
            );
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
                message: body.trim().chars().take(200).collect(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let wines: Vec<Wine> = serde_json::from_slice(&body)
            .map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

        debug!(count = wines.len(), "Catalog fetched");
        Ok(wines)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
