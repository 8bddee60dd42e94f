use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog URL is http(s) and the timeout is positive
/// - At least one view can be mounted
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let url = config.catalog.url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "catalog.url must be an http(s) URL, got '{}'",
            config.catalog.url
        )));
    }

    if config.catalog.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.timeout_secs must be greater than 0".to_string(),
        ));
    }

    if config.views.max_views == 0 {
        return Err(ConfigError::ValidationError(
            "views.max_views must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        CatalogServiceConfig, NavigationConfig, ServerConfig, ThemeConfig, ViewsConfig,
    };
    use std::net::IpAddr;

    fn valid_config() -> Config {
        Config {
            catalog: CatalogServiceConfig {
                url: "http://localhost:8000/wines/".to_string(),
                timeout_secs: 10,
            },
            server: ServerConfig::default(),
            views: ViewsConfig::default(),
            navigation: NavigationConfig::default(),
            theme: ThemeConfig::default(),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let mut config = valid_config();
        config.server = ServerConfig {
            host: "0.0.0.0".parse::<IpAddr>().unwrap(),
            port: 0,
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_non_http_url_fails() {
        let mut config = valid_config();
        config.catalog.url = "ftp://localhost/wines".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("catalog.url"));
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let mut config = valid_config();
        config.catalog.timeout_secs = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_validate_zero_max_views_fails() {
        let mut config = valid_config();
        config.views.max_views = 0;
        assert!(validate_config(&config).is_err());
    }
}
