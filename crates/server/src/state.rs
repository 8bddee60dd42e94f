use std::sync::Arc;
use std::time::Duration;

use sentio_core::{
    CatalogSource, CatalogStore, Config, DiscussHandler, PageLayout, SanitizedConfig, TypeFilter,
};
use tracing::info;
use uuid::Uuid;

use crate::views::ViewRegistry;

/// Shared application state
pub struct AppState {
    config: Config,
    layout: PageLayout,
    views: ViewRegistry,
    discuss: Arc<dyn DiscussHandler>,
}

impl AppState {
    pub fn new(
        config: Config,
        source: Arc<dyn CatalogSource>,
        discuss: Arc<dyn DiscussHandler>,
    ) -> Self {
        let layout = PageLayout::from_config(&config);
        let views = ViewRegistry::new(
            source,
            Duration::from_secs(config.catalog.timeout_secs),
            &config.views,
        );
        Self {
            config,
            layout,
            views,
            discuss,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    pub fn discuss(&self) -> &dyn DiscussHandler {
        self.discuss.as_ref()
    }

    /// Mount a new catalog view and start its initial load in the background.
    pub fn mount_view(&self, filter: TypeFilter) -> (Uuid, Arc<CatalogStore>) {
        let (id, store) = self.views.mount();
        store.set_filter(filter);
        spawn_load(id, Arc::clone(&store));
        (id, store)
    }

    /// Re-run the load of an existing view. Returns `false` if it is not mounted.
    pub fn reload_view(&self, id: &Uuid) -> bool {
        match self.views.get(id) {
            Some(store) => {
                spawn_load(*id, store);
                true
            }
            None => false,
        }
    }
}

/// Enter `Loading` before returning so the next render already shows it,
/// then fetch in the background.
fn spawn_load(id: Uuid, store: Arc<CatalogStore>) {
    store.begin_load();
    tokio::spawn(async move {
        let phase = store.complete_load().await;
        info!(view = %id, phase = phase.as_str(), "Catalog view load settled");
    });
}
