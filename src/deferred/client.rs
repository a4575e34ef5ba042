//! HTTP transport client for the deferred-payment gateway.

use tracing::instrument;
use url::Url;

use super::{
    model::{RegisterRequest, RegisterResponse},
    wire,
};
use crate::{
    config::{ApiHostType, HttpConfig},
    error::{ClientError, Result},
    transport,
};

const TEST_BASE_URL: &str = "https://test-api.deferred.gmo-pg.jp/api/v1";
const PRODUCTION_BASE_URL: &str = "https://api.deferred.gmo-pg.jp/api/v1";

/// Client for the GMO deferred-payment gateway.
///
/// The host selection is fixed at construction. The client holds no mutable
/// state and is safe for concurrent use; each operation is exactly one HTTP
/// round trip with no retries.
///
/// # Examples
///
/// ```rust,no_run
/// use gmo_clients::{
///     config::ApiHostType,
///     deferred::{Buyer, DeferredClient, RegisterRequest, ShopInfo},
/// };
///
/// # async fn example() -> gmo_clients::error::Result<()> {
/// let client = DeferredClient::new(ApiHostType::Test);
///
/// let request = RegisterRequest {
///     shop_info: ShopInfo {
///         shop_id: "shop-123".to_owned(),
///         connect_password: "secret".to_owned(),
///     },
///     buyer: Buyer {
///         shop_transaction_id: "tx-0001".to_owned(),
///         billed_amount: "10000".to_owned(),
///         ..Default::default()
///     },
///     deliveries: vec![],
/// };
///
/// let response = client.register(&request).await?;
/// if !response.errors.is_empty() {
///     eprintln!("registration rejected: {:?}", response.errors);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DeferredClient {
    http: reqwest::Client,
    base_url: String,
}

impl DeferredClient {
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
    /// [`DeferredClient::new`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the URL does not parse.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        Ok(Self { http: transport::default_client(), base_url: parsed.to_string() })
    }

    /// Registers an order for deferred billing.
    ///
    /// The gateway reports screening failures in-band: a non-empty
    /// [`RegisterResponse::errors`] list inside a 2xx response. The call
    /// succeeds in that case; callers must inspect the list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the request never completes,
    /// [`ClientError::UnexpectedStatus`] on a non-2xx reply, or
    /// [`ClientError::Decode`] if the body is not the expected shape.
    #[instrument(skip(self, request), fields(shop_transaction_id = %request.buyer.shop_transaction_id))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        let url = self.endpoint_url("/order/register")?;
        let response = self.http.post(url).json(&request.to_param()).send().await?;
        let param: wire::RegisterResponseParam = transport::decode_json(response).await?;
        Ok(param.into())
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let joined = transport::join_url(&self.base_url, path);
        Url::parse(&joined)
            .map_err(|e| ClientError::Config(format!("invalid endpoint URL '{joined}': {e}")))
    }
}

fn base_url_for(host: ApiHostType) -> &'static str {
    match host {
        ApiHostType::Test => TEST_BASE_URL,
        ApiHostType::Production => PRODUCTION_BASE_URL,
    }
}
