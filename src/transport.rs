//! Shared HTTP plumbing for the API clients.
//!
//! Both service clients ride on the same reqwest stack: a pooled singleton
//! client for the default configuration, a builder for custom settings, and a
//! single response-decoding path that separates protocol errors from
//! transport errors.

use std::sync::LazyLock;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::HttpConfig,
    error::{ClientError, Result},
};

/// Default HTTP client with connection pooling enabled.
///
/// Using a singleton avoids recreating the client per service client
/// instance, preserving connection pooling benefits across all default
/// constructions.
static DEFAULT_HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    let config = HttpConfig::default();
    Client::builder()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .build()
        .expect("failed to create default HTTP client")
});

/// Returns a handle to the shared default client.
pub(crate) fn default_client() -> Client {
    DEFAULT_HTTP_CLIENT.clone()
}

/// Builds a dedicated client from custom transport settings.
pub(crate) fn build_client(config: &HttpConfig) -> Result<Client> {
    config.validate()?;
    let client = Client::builder()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .build()
        .map_err(ClientError::Transport)?;
    Ok(client)
}

/// Joins a base URL with an endpoint path, tolerating a trailing slash on
/// the base.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Decodes an HTTP response into a wire model value.
///
/// A non-2xx status is a protocol error carrying the raw body; a 2xx body
/// that fails JSON decoding is a decode error. Reading the body itself can
/// still fail at the transport level.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await.map_err(ClientError::Transport)?;

    if !status.is_success() {
        return Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_is_singleton() {
        // Clones share the same pooled connector.
        let _first = default_client();
        let _second = default_client();
    }

    #[test]
    fn test_build_client_with_valid_config() {
        let config = HttpConfig {
            pool_max_idle_per_host: 20,
            timeout_secs: 60,
            connect_timeout_secs: 15,
        };
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn test_build_client_rejects_invalid_config() {
        let config = HttpConfig {
            pool_max_idle_per_host: 20,
            timeout_secs: 0,
            connect_timeout_secs: 15,
        };
        let result = build_client(&config);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClientError::Config(_)));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://api.example.com", "/transfer/status"), "https://api.example.com/transfer/status");
        assert_eq!(join_url("https://api.example.com/", "/transfer/status"), "https://api.example.com/transfer/status");
    }
}
