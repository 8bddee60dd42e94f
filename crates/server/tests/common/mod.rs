//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that builds the in-process router
//! with a mock catalog source and a recording discuss handler, so pages can
//! be exercised without a running catalog service.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use sentio_core::testing::{MockCatalogSource, RecordingDiscussHandler};
use sentio_core::{CatalogServiceConfig, Config, Wine};
use sentio_server::state::AppState;

/// Re-export fixtures for test convenience
pub use sentio_core::testing::fixtures;

/// Test fixture for E2E testing with mock dependencies.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_browse() {
///     let fixture = TestFixture::with_wines(fixtures::scenario_a());
///     let page = fixture.open_catalog("").await;
///     assert!(page.body.contains("Malbec"));
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Shared application state
    pub state: Arc<AppState>,
    /// Mock catalog source - configure wines, delays and failures
    pub source: Arc<MockCatalogSource>,
    /// Records every discuss intent
    pub discuss: Arc<RecordingDiscussHandler>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }

    /// Value of the `data-state` attribute of the rendered catalog view.
    pub fn view_state(&self) -> Option<&str> {
        let start = self.body.find("data-state=\"")? + "data-state=\"".len();
        let len = self.body[start..].find('"')?;
        Some(&self.body[start..start + len])
    }
}

pub fn test_config() -> Config {
    let mut config = Config::new(CatalogServiceConfig {
        url: "http://127.0.0.1:9/wines/".to_string(),
        timeout_secs: 2,
    });
    config.server.host = std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST);
    config
}

impl TestFixture {
    /// Create a fixture whose source serves no wines.
    pub fn new() -> Self {
        Self::with_source(MockCatalogSource::new(), test_config())
    }

    pub fn with_wines(wines: Vec<Wine>) -> Self {
        Self::with_source(MockCatalogSource::with_wines(wines), test_config())
    }

    pub fn with_source(source: MockCatalogSource, config: Config) -> Self {
        let source = Arc::new(source);
        let discuss = Arc::new(RecordingDiscussHandler::new());

        let state = Arc::new(AppState::new(
            config,
            Arc::clone(&source) as Arc<dyn sentio_core::CatalogSource>,
            Arc::clone(&discuss) as Arc<dyn sentio_core::DiscussHandler>,
        ));
        let router = sentio_server::api::create_router(Arc::clone(&state));

        Self {
            router,
            state,
            source,
            discuss,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with a form-encoded body.
    pub async fn post_form(&self, path: &str, form: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8_lossy(&bytes).into_owned();

        TestResponse {
            status,
            location,
            body,
        }
    }

    /// Mount a catalog view via `/browse-wines{query}` and return the view
    /// URL it redirects to.
    pub async fn mount(&self, query: &str) -> String {
        let response = self.get(&format!("/browse-wines{}", query)).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        response.location.expect("mount should redirect to the view")
    }

    /// Mount a view and poll it until its load has settled.
    pub async fn open_catalog(&self, query: &str) -> TestResponse {
        let url = self.mount(query).await;
        self.wait_settled(&url).await
    }

    /// Poll a view URL until it no longer renders the loading state.
    pub async fn wait_settled(&self, url: &str) -> TestResponse {
        for _ in 0..100 {
            let response = self.get(url).await;
            if response.view_state() != Some("loading") {
                return response;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("view at {} never left the loading state", url);
    }
}

/// Extract the view id from a view URL.
pub fn view_id(url: &str) -> String {
    let start = url.find("view=").expect("url carries a view id") + "view=".len();
    url[start..]
        .split('&')
        .next()
        .unwrap_or_default()
        .to_string()
}
