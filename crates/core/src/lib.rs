pub mod catalog_source;
pub mod config;
pub mod discuss;
pub mod metrics;
pub mod render;
pub mod store;
pub mod testing;
pub mod wine;

pub use catalog_source::{validate_wines, CatalogSource, FetchError, HttpCatalogSource};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogServiceConfig, Config,
    ConfigError, NavigationConfig, SanitizedConfig, ServerConfig, ThemeConfig, ViewsConfig,
};
pub use discuss::{DiscussHandler, DiscussIntent, LoggingDiscussHandler};
pub use render::{CatalogViewState, PageContent, PageLayout};
pub use store::{CatalogSnapshot, CatalogStore, LoadPhase, TypeFilter};
pub use wine::{Vintage, Wine};
