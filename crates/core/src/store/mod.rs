//! Catalog store: fetch lifecycle, full set, active filter and the derived
//! visible set for one mounted catalog view.
//!
//! Phase and data are always written together under one write lock, so a
//! reader never observes `Ready` with a stale set or `Error` with data.
//! When two loads overlap, whichever resolves last is what remains.

mod types;

pub use types::*;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::catalog_source::{validate_wines, CatalogSource, FetchError};
use crate::metrics::{CATALOG_FETCHES_TOTAL, CATALOG_FETCH_DURATION, CATALOG_WINES_FETCHED};
use crate::wine::Wine;

#[derive(Debug)]
struct CatalogState {
    phase: LoadPhase,
    full: Vec<Wine>,
    visible: Vec<Wine>,
    filter: TypeFilter,
}

/// Owns the catalog data for a single view.
pub struct CatalogStore {
    source: Arc<dyn CatalogSource>,
    fetch_timeout: Duration,
    state: RwLock<CatalogState>,
}

impl CatalogStore {
    /// Create an empty store in the `Loading` phase.
    pub fn new(source: Arc<dyn CatalogSource>, fetch_timeout: Duration) -> Self {
        Self {
            source,
            fetch_timeout,
            state: RwLock::new(CatalogState {
                phase: LoadPhase::Loading,
                full: Vec::new(),
                visible: Vec::new(),
                filter: TypeFilter::All,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the full catalog and settle into `Ready` or `Error`.
    ///
    /// Safe to call again, e.g. for a retry. A failure clears both sets.
    pub async fn load(&self) -> LoadPhase {
        self.begin_load();
        self.complete_load().await
    }

    /// Enter the `Loading` phase. Readers see it as soon as this returns.
    pub fn begin_load(&self) {
        self.write().phase = LoadPhase::Loading;
    }

    /// Fetch and settle a load started with [`begin_load`](Self::begin_load).
    pub async fn complete_load(&self) -> LoadPhase {
        let started = Instant::now();
        let outcome = match tokio::time::timeout(self.fetch_timeout, self.source.fetch_wines())
            .await
        {
            Ok(Ok(wines)) => validate_wines(&wines).map(|_| wines),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(FetchError::Timeout(self.fetch_timeout.as_secs())),
        };
        let elapsed = started.elapsed().as_secs_f64();

        let mut state = self.write();
        match outcome {
            Ok(wines) => {
                CATALOG_FETCHES_TOTAL.with_label_values(&["ok"]).inc();
                CATALOG_FETCH_DURATION
                    .with_label_values(&["ok"])
                    .observe(elapsed);
                CATALOG_WINES_FETCHED
                    .with_label_values(&[])
                    .observe(wines.len() as f64);

                state.visible = filter_wines(&wines, &state.filter);
                state.full = wines;
                state.phase = LoadPhase::Ready;
                info!(
                    source = self.source.name(),
                    wines = state.full.len(),
                    visible = state.visible.len(),
                    "Catalog loaded"
                );
            }
            Err(e) => {
                CATALOG_FETCHES_TOTAL.with_label_values(&[e.kind()]).inc();
                CATALOG_FETCH_DURATION
                    .with_label_values(&[e.kind()])
                    .observe(elapsed);

                warn!(source = self.source.name(), error = %e, "Catalog load failed");
                state.full = Vec::new();
                state.visible = Vec::new();
                state.phase = LoadPhase::Error(format!("Failed to fetch wines: {}", e));
            }
        }
        state.phase.clone()
    }

    /// Change the active filter and recompute the visible set.
    ///
    /// Never refetches and never touches the load phase.
    pub fn set_filter(&self, filter: TypeFilter) {
        let mut state = self.write();
        if state.filter == filter {
            return;
        }
        debug!(filter = %filter, "Catalog filter changed");
        state.visible = filter_wines(&state.full, &filter);
        state.filter = filter;
    }

    /// Distinct types of the current full set, first-seen order.
    pub fn available_types(&self) -> Vec<String> {
        distinct_types(&self.read().full)
    }

    pub fn phase(&self) -> LoadPhase {
        self.read().phase.clone()
    }

    pub fn active_filter(&self) -> TypeFilter {
        self.read().filter.clone()
    }

    pub fn full_set(&self) -> Vec<Wine> {
        self.read().full.clone()
    }

    pub fn visible_set(&self) -> Vec<Wine> {
        self.read().visible.clone()
    }

    /// Consistent copy of everything a view needs to render.
    pub fn snapshot(&self) -> CatalogSnapshot {
        let state = self.read();
        CatalogSnapshot {
            phase: state.phase.clone(),
            full: state.full.clone(),
            visible: state.visible.clone(),
            filter: state.filter.clone(),
            available_types: distinct_types(&state.full),
        }
    }
}
