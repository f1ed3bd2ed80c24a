//! Configuration validation logic

use super::RunConfig;
use crate::constants::MAX_CONNECTIONS_LIMIT;
use crate::errors::{Result, StatsError};
use url::Url;

/// Validate the configuration
pub fn validate(config: &RunConfig) -> Result<()> {
    validate_url(config)?;
    validate_concurrency(config)?;
    Ok(())
}

/// Validate the target URL
fn validate_url(config: &RunConfig) -> Result<()> {
    let url = Url::parse(&config.url)?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(StatsError::config(format!(
            "Invalid URL scheme '{}'. Only 'http' and 'https' are supported",
            scheme
        ))),
    }
}

/// Validate connection and thread counts
fn validate_concurrency(config: &RunConfig) -> Result<()> {
    if config.connections == 0 {
        return Err(StatsError::config(
            "Number of connections must be greater than 0",
        ));
    }

    if config.connections > MAX_CONNECTIONS_LIMIT {
        return Err(StatsError::config(format!(
            "Number of connections cannot exceed {}",
            MAX_CONNECTIONS_LIMIT
        )));
    }

    if config.threads == 0 {
        return Err(StatsError::config("Number of threads must be greater than 0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> RunConfig {
        RunConfig::new("http://localhost:8080/", 10, 2)
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate(&create_test_config()).is_ok());
    }

    #[test]
    fn test_validate_invalid_url() {
        let mut config = create_test_config();
        config.url = "invalid-url".to_string();
        assert!(matches!(validate(&config), Err(StatsError::UrlParse(_))));
    }

    #[test]
    fn test_validate_rejects_websocket_scheme() {
        let mut config = create_test_config();
        config.url = "ws://localhost:8080".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_zero_connections() {
        let mut config = create_test_config();
        config.connections = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_too_many_connections() {
        let mut config = create_test_config();
        config.connections = MAX_CONNECTIONS_LIMIT + 1;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_zero_threads() {
        let mut config = create_test_config();
        config.threads = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_checked_constructor() {
        assert!(RunConfig::checked("https://example.com", 4, 4).is_ok());
        assert!(matches!(
            RunConfig::checked("https://example.com", 0, 4),
            Err(StatsError::Config(_))
        ));
    }
}
