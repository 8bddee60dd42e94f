use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub catalog: CatalogServiceConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub views: ViewsConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Configuration with every optional section at its default.
    pub fn new(catalog: CatalogServiceConfig) -> Self {
        Self {
            catalog,
            server: ServerConfig::default(),
            views: ViewsConfig::default(),
            navigation: NavigationConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    3000
}

/// Remote catalog service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogServiceConfig {
    /// Endpoint returning the full wine list as a JSON array
    /// (e.g., "http://localhost:8000/wines/")
    pub url: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    10
}

/// Mounted catalog view bookkeeping
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewsConfig {
    /// Views not rendered for this long are discarded (default: 900)
    #[serde(default = "default_idle_ttl")]
    pub idle_ttl_secs: u64,
    /// Upper bound on simultaneously mounted views (default: 1024)
    #[serde(default = "default_max_views")]
    pub max_views: usize,
    /// Refresh interval of the loading page in seconds (default: 1)
    #[serde(default = "default_refresh")]
    pub refresh_secs: u32,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: default_idle_ttl(),
            max_views: default_max_views(),
            refresh_secs: default_refresh(),
        }
    }
}

fn default_idle_ttl() -> u64 {
    900
}

fn default_max_views() -> usize {
    1024
}

fn default_refresh() -> u32 {
    1
}

/// Navigation bar configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// Show an icon next to each navigation label
    #[serde(default)]
    pub show_icons: bool,
}

/// Color and font tokens handed to the render layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: String,
    pub foreground: String,
    pub primary: String,
    pub primary_foreground: String,
    pub secondary: String,
    pub accent: String,
    pub card_background: String,
    pub border_color: String,
    pub font_sans: String,
    pub font_serif: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#faf7f2".to_string(),
            foreground: "#2b2024".to_string(),
            primary: "#6d1a36".to_string(),
            primary_foreground: "#ffffff".to_string(),
            secondary: "#8c7b75".to_string(),
            accent: "#b08d57".to_string(),
            card_background: "#ffffff".to_string(),
            border_color: "#e6ded6".to_string(),
            font_sans: "Inter, system-ui, sans-serif".to_string(),
            font_serif: "\"Playfair Display\", Georgia, serif".to_string(),
        }
    }
}

/// Sanitized config for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub catalog: SanitizedCatalogConfig,
    pub views: ViewsConfig,
    pub navigation: NavigationConfig,
}

/// Catalog endpoint with any userinfo stripped
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            catalog: SanitizedCatalogConfig {
                url: strip_userinfo(&config.catalog.url),
                timeout_secs: config.catalog.timeout_secs,
            },
            views: config.views.clone(),
            navigation: config.navigation.clone(),
        }
    }
}

/// Drop `user:password@` from a URL so credentials never reach API output.
fn strip_userinfo(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let authority_end = rest.find('/').unwrap_or(rest.len());
    let (authority, path) = rest.split_at(authority_end);
    match authority.rsplit_once('@') {
        Some((_, host)) => format!("{}://{}{}", scheme, host, path),
        None => url.to_string(),
    }
}
