//! Client configuration: host selection and HTTP transport tuning.
//!
//! Host selection is a static table: each client maps an [`ApiHostType`] to
//! its service's base URL at construction time, and the mapping never changes
//! afterwards. Transport tuning lives in [`HttpConfig`], which is
//! TOML-deserializable for callers that keep their settings in a config file.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Target environment for a client.
///
/// Fixed at construction and immutable afterwards. Each service maps the
/// host type to its own base URL; see the client constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiHostType {
    /// Sandbox environment.
    Test,
    /// Live environment.
    Production,
}

/// HTTP transport configuration.
///
/// Applies to the underlying connection pool and per-request timeouts.
/// All fields have defaults, so a partial TOML table is accepted.
///
/// # Examples
///
/// ```
/// use gmo_clients::config::HttpConfig;
///
/// let config = HttpConfig::from_toml("timeout_secs = 60").unwrap();
/// assert_eq!(config.timeout_secs, 60);
/// assert_eq!(config.connect_timeout_secs, 10);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Maximum idle connections per host.
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle_per_host: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: default_pool_max_idle(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl HttpConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the TOML is malformed.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| ClientError::Config(format!("invalid TOML config: {e}")))
    }

    /// Validates configuration values are within acceptable bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if timeout values are outside valid
    /// ranges:
    /// - `timeout_secs`: must be 1-300 seconds
    /// - `connect_timeout_secs`: must be 1-60 seconds
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ClientError::Config("timeout_secs must be between 1 and 300".to_owned()));
        }
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 60 {
            return Err(ClientError::Config(
                "connect_timeout_secs must be between 1 and 60".to_owned(),
            ));
        }
        Ok(())
    }

    /// Returns the request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_pool_max_idle() -> usize {
    100
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_default() {
        let config = HttpConfig::default();
        assert_eq!(config.pool_max_idle_per_host, 100);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_http_config_durations() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_http_config_from_toml() {
        let toml = "
            pool_max_idle_per_host = 20
            timeout_secs = 45
            connect_timeout_secs = 15
        ";

        let config = HttpConfig::from_toml(toml).unwrap();
        assert_eq!(config.pool_max_idle_per_host, 20);
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.connect_timeout_secs, 15);
    }

    #[test]
    fn test_http_config_from_toml_partial() {
        let config = HttpConfig::from_toml("timeout_secs = 60").unwrap();
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.pool_max_idle_per_host, 100); // default
        assert_eq!(config.connect_timeout_secs, 10); // default
    }

    #[test]
    fn test_http_config_from_toml_empty() {
        let config = HttpConfig::from_toml("").unwrap();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_http_config_from_toml_invalid() {
        let result = HttpConfig::from_toml("timeout_secs = not a number");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClientError::Config(_)));
    }

    #[test]
    fn test_http_config_validate_default() {
        assert!(HttpConfig::default().validate().is_ok());
    }

    #[test]
    fn test_http_config_validate_bounds() {
        let config =
            HttpConfig { pool_max_idle_per_host: 100, timeout_secs: 300, connect_timeout_secs: 60 };
        assert!(config.validate().is_ok());

        let config =
            HttpConfig { pool_max_idle_per_host: 100, timeout_secs: 1, connect_timeout_secs: 1 };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_http_config_validate_timeout_zero() {
        let config =
            HttpConfig { pool_max_idle_per_host: 100, timeout_secs: 0, connect_timeout_secs: 10 };
        let result = config.validate();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClientError::Config(_)));
    }

    #[test]
    fn test_http_config_validate_timeout_too_large() {
        let config =
            HttpConfig { pool_max_idle_per_host: 100, timeout_secs: 301, connect_timeout_secs: 10 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_http_config_validate_connect_timeout_too_large() {
        let config =
            HttpConfig { pool_max_idle_per_host: 100, timeout_secs: 30, connect_timeout_secs: 61 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_host_type_copy_eq() {
        let host = ApiHostType::Test;
        let copied = host;
        assert_eq!(host, copied);
        assert_ne!(ApiHostType::Test, ApiHostType::Production);
    }
}
