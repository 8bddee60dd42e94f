//! Registry of mounted catalog views.
//!
//! Each visit to the browse page mounts one [`CatalogStore`] under a fresh
//! view id. The store lives as long as its registry entry; idle entries are
//! dropped when new views mount.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use sentio_core::{CatalogSource, CatalogStore, ViewsConfig};
use tracing::debug;
use uuid::Uuid;

use crate::metrics::VIEWS_MOUNTED;

struct MountedView {
    store: Arc<CatalogStore>,
    last_seen: Instant,
}

pub struct ViewRegistry {
    source: Arc<dyn CatalogSource>,
    fetch_timeout: Duration,
    idle_ttl: Duration,
    max_views: usize,
    views: Mutex<HashMap<Uuid, MountedView>>,
}

impl ViewRegistry {
    pub fn new(source: Arc<dyn CatalogSource>, fetch_timeout: Duration, config: &ViewsConfig) -> Self {
        Self {
            source,
            fetch_timeout,
            idle_ttl: Duration::from_secs(config.idle_ttl_secs),
            max_views: config.max_views.max(1),
            views: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, MountedView>> {
        self.views.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mount a fresh, empty store. The caller starts its load.
    pub fn mount(&self) -> (Uuid, Arc<CatalogStore>) {
        let id = Uuid::new_v4();
        let store = Arc::new(CatalogStore::new(
            Arc::clone(&self.source),
            self.fetch_timeout,
        ));

        let mut views = self.lock();
        let now = Instant::now();
        views.retain(|_, view| now.duration_since(view.last_seen) < self.idle_ttl);
        while views.len() >= self.max_views {
            let oldest = views
                .iter()
                .min_by_key(|(_, view)| view.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(oldest) => {
                    views.remove(&oldest);
                }
                None => break,
            }
        }

        views.insert(
            id,
            MountedView {
                store: Arc::clone(&store),
                last_seen: now,
            },
        );
        VIEWS_MOUNTED.set(views.len() as i64);
        debug!(view = %id, mounted = views.len(), "Catalog view mounted");

        (id, store)
    }

    /// Look up a mounted view, marking it as seen.
    pub fn get(&self, id: &Uuid) -> Option<Arc<CatalogStore>> {
        let mut views = self.lock();
        let now = Instant::now();
        let view = views.get_mut(id)?;
        if now.duration_since(view.last_seen) >= self.idle_ttl {
            views.remove(id);
            VIEWS_MOUNTED.set(views.len() as i64);
            return None;
        }
        view.last_seen = now;
        Some(Arc::clone(&view.store))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
