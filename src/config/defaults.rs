//! Default values and configuration presets

use super::RunConfig;

/// Default configuration values
pub struct Defaults;

impl Defaults {
    pub const CONNECTIONS: u32 = 100;
    pub const THREADS: u32 = 1;
    pub const MERGED_URL: &'static str = "http://localhost/";
}

impl RunConfig {
    /// Create a configuration for `url` with default concurrency
    pub fn default_for(url: impl Into<String>) -> Self {
        Self::new(url, Defaults::CONNECTIONS, Defaults::THREADS)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::default_for(Defaults::MERGED_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_keeps_url() {
        let config = RunConfig::default_for("http://example.com/");
        assert_eq!(config.url, "http://example.com/");
        assert_eq!(config.connections, Defaults::CONNECTIONS);
        assert_eq!(config.threads, Defaults::THREADS);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(super::super::validation::validate(&RunConfig::default()).is_ok());
    }
}
