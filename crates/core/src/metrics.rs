//! Prometheus metrics for core components.
//!
//! These are registered into the server's registry at startup.

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

/// Catalog fetches by result ("ok", or a `FetchError` kind).
pub static CATALOG_FETCHES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("sentio_catalog_fetches_total", "Total catalog fetches"),
        &["result"],
    )
    .unwrap()
});

/// Catalog fetch duration in seconds.
pub static CATALOG_FETCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "sentio_catalog_fetch_duration_seconds",
            "Duration of catalog fetches",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["result"],
    )
    .unwrap()
});

/// Wines returned by the last successful fetches.
pub static CATALOG_WINES_FETCHED: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "sentio_catalog_wines_fetched",
            "Number of wines returned per successful fetch",
        )
        .buckets(vec![0.0, 1.0, 10.0, 50.0, 100.0, 500.0, 1000.0]),
        &[],
    )
    .unwrap()
});

/// "Discuss this wine" requests.
pub static DISCUSS_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "sentio_discuss_requests_total",
        "Total discuss-this-wine requests",
    )
    .unwrap()
});

/// Register all core metrics with the given registry.
pub fn register_core_metrics(registry: &prometheus::Registry) {
    registry
        .register(Box::new(CATALOG_FETCHES_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(CATALOG_FETCH_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(CATALOG_WINES_FETCHED.clone()))
        .unwrap();
    registry
        .register(Box::new(DISCUSS_REQUESTS_TOTAL.clone()))
        .unwrap();
}
