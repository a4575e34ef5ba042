//! HTTP transport client for the bank API.

use tracing::instrument;
use url::Url;

use super::{
    model::{
        GetRequestResultRequest, GetRequestResultResponse, GetTransferStatusRequest,
        GetTransferStatusResponse, TransferRequestRequest, TransferRequestResponse,
    },
    wire,
};
use crate::{
    config::{ApiHostType, HttpConfig},
    error::{ClientError, Result},
    transport,
};

const TEST_BASE_URL: &str = "https://api.sunabar.gmo-aozora.com/ganb/corporation/v1";
const PRODUCTION_BASE_URL: &str = "https://api.gmo-aozora.com/ganb/corporation/v1";

const ACCESS_TOKEN_HEADER: &str = "x-access-token";
const IDEMPOTENCY_KEY_HEADER: &str = "x-idempotency-key";

/// Client for the GMO Aozora Net Bank corporate API.
///
/// The host selection is fixed at construction. The client holds no mutable
/// state and is safe for concurrent use; each operation is exactly one HTTP
/// round trip with no retries.
///
/// # Examples
///
/// ```rust,no_run
/// use gmo_clients::{
///     aozora::{AozoraClient, GetTransferStatusRequest, QueryKeyClass},
///     config::ApiHostType,
/// };
///
/// # async fn example() -> gmo_clients::error::Result<()> {
/// let client = AozoraClient::new(ApiHostType::Test);
///
/// let request = GetTransferStatusRequest {
///     access_token: "access_token".to_owned(),
///     account_id: "111111111111".to_owned(),
///     query_key_class: QueryKeyClass::TransferApplies,
///     ..Default::default()
/// };
///
/// let response = client.get_transfer_status(&request).await?;
/// println!("count: {}", response.count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AozoraClient {
    http: reqwest::Client,
    base_url: String,
}

impl AozoraClient {
    /// Creates a client for the given host with default transport settings.
    ///
    /// Uses a shared pooled HTTP client.
    #[must_use]
    pub fn new(host: ApiHostType) -> Self {
        Self { http: transport::default_client(), base_url: base_url_for(host).to_owned() }
    }

    /// Creates a client for the given host with custom transport settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the settings are out of bounds, or
    /// [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn with_config(host: ApiHostType, config: &HttpConfig) -> Result<Self> {
        Ok(Self { http: transport::build_client(config)?, base_url: base_url_for(host).to_owned() })
    }

    /// Creates a client against an explicit base URL.
    ///
    /// Intended for tests and local stubs; production callers should prefer
    /// [`AozoraClient::new`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the URL does not parse.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        Ok(Self { http: transport::default_client(), base_url: parsed.to_string() })
    }

    /// Queries the status of transfer applications.
    ///
    /// A service-side failure embedded in a 2xx payload is part of the
    /// returned response, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the request never completes,
    /// [`ClientError::UnexpectedStatus`] on a non-2xx reply, or
    /// [`ClientError::Decode`] if the body is not the expected shape.
    #[instrument(skip(self, request), fields(account_id = %request.account_id))]
    pub async fn get_transfer_status(
        &self,
        request: &GetTransferStatusRequest,
    ) -> Result<GetTransferStatusResponse> {
        let url = self.endpoint_url("/transfer/status", Some(&request.query_string()))?;
        let response = self
            .http
            .get(url)
            .header(ACCESS_TOKEN_HEADER, &request.access_token)
            .send()
            .await?;
        let param: wire::GetTransferStatusResponseParam = transport::decode_json(response).await?;
        Ok(param.into())
    }

    /// Submits a transfer application.
    ///
    /// The caller-supplied idempotency key is forwarded as a header; the
    /// client neither derives nor caches it.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AozoraClient::get_transfer_status`].
    #[instrument(skip(self, request), fields(account_id = %request.account_id))]
    pub async fn transfer_request(
        &self,
        request: &TransferRequestRequest,
    ) -> Result<TransferRequestResponse> {
        let url = self.endpoint_url("/transfer/request", None)?;
        let response = self
            .http
            .post(url)
            .header(ACCESS_TOKEN_HEADER, &request.access_token)
            .header(IDEMPOTENCY_KEY_HEADER, &request.idempotency_key)
            .json(&request.to_param())
            .send()
            .await?;
        let param: wire::TransferRequestResponseParam = transport::decode_json(response).await?;
        Ok(param.into())
    }

    /// Queries the result of an accepted transfer application.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AozoraClient::get_transfer_status`].
    #[instrument(skip(self, request), fields(apply_no = %request.apply_no))]
    pub async fn get_request_result(
        &self,
        request: &GetRequestResultRequest,
    ) -> Result<GetRequestResultResponse> {
        let url = self.endpoint_url("/transfer/request-result", Some(&request.query_string()))?;
        let response = self
            .http
            .get(url)
            .header(ACCESS_TOKEN_HEADER, &request.access_token)
            .send()
            .await?;
        let param: wire::GetRequestResultResponseParam = transport::decode_json(response).await?;
        Ok(param.into())
    }

    fn endpoint_url(&self, path: &str, query: Option<&str>) -> Result<Url> {
        let joined = transport::join_url(&self.base_url, path);
        let mut url = Url::parse(&joined)
            .map_err(|e| ClientError::Config(format!("invalid endpoint URL '{joined}': {e}")))?;
        url.set_query(query);
        Ok(url)
    }
}

fn base_url_for(host: ApiHostType) -> &'static str {
    match host {
        ApiHostType::Test => TEST_BASE_URL,
        ApiHostType::Production => PRODUCTION_BASE_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selects_host() {
        let test_client = AozoraClient::new(ApiHostType::Test);
        assert!(test_client.base_url.contains("sunabar"));

        let production_client = AozoraClient::new(ApiHostType::Production);
        assert_eq!(production_client.base_url, PRODUCTION_BASE_URL);
    }

    #[test]
    fn test_with_base_url_accepts_valid_url() {
        let client = AozoraClient::with_base_url("http://127.0.0.1:8080").unwrap();
        let url = client
            .endpoint_url("/transfer/status", Some("accountId=1&queryKeyClass=1"))
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/transfer/status?accountId=1&queryKeyClass=1");
    }

    #[test]
    fn test_with_base_url_rejects_invalid_url() {
        let result = AozoraClient::with_base_url("not-a-url");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClientError::Config(_)));
    }

    #[test]
    fn test_with_config_rejects_invalid_settings() {
        let config = HttpConfig { timeout_secs: 0, ..Default::default() };
        assert!(AozoraClient::with_config(ApiHostType::Test, &config).is_err());
    }

    #[test]
    fn test_endpoint_url_without_query() {
        let client = AozoraClient::with_base_url("http://127.0.0.1:8080/").unwrap();
        let url = client.endpoint_url("/transfer/request", None).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/transfer/request");
    }
}
