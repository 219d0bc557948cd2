//! Bitso REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::auth::{CredentialsProvider, IncreasingNonce, NonceProvider, authorization_header};
use crate::error::{ApiError, BitsoError};
use crate::rest::endpoints::BITSO_BASE_URL;

/// Default request deadline. Calls that exceed it fail with
/// [`BitsoError::Timeout`] and are never retried.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The Bitso REST API client.
///
/// Every endpoint in scope is authenticated, so the client always carries
/// credentials. Each call is a fresh, one-shot signed request: a nonce is
/// drawn, the canonical message is signed, and the response (or failure) is
/// relayed to the caller without retries.
///
/// # Example
///
/// ```rust,no_run
/// use bitso_api_client::auth::StaticCredentials;
/// use bitso_api_client::rest::BitsoRestClient;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = BitsoRestClient::builder().credentials(credentials).build()?;
///
///     let withdrawals = client.get_withdrawals(None).await?;
///     println!("Withdrawals: {:?}", withdrawals);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitsoRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl BitsoRestClient {
    /// Create a new client builder.
    pub fn builder() -> BitsoRestClientBuilder {
        BitsoRestClientBuilder::new()
    }

    /// Make an authenticated GET request.
    pub(crate) async fn signed_get<T>(&self, path: &str) -> Result<T, BitsoError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.signed_request(reqwest::Method::GET, path, None).await
    }

    /// Make an authenticated GET request with query parameters.
    ///
    /// The serialized query string becomes part of the signed path.
    pub(crate) async fn signed_get_with_params<T, Q>(
        &self,
        path: &str,
        params: &Q,
    ) -> Result<T, BitsoError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| BitsoError::InvalidRequest(e.to_string()))?;
        if query_string.is_empty() {
            self.signed_request(reqwest::Method::GET, path, None).await
        } else {
            let path_and_query = format!("{path}?{query_string}");
            self.signed_request(reqwest::Method::GET, &path_and_query, None)
                .await
        }
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn signed_post<T, P>(&self, path: &str, payload: &P) -> Result<T, BitsoError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        // Serialize exactly once: the signed bytes and the transmitted bytes
        // must be identical.
        let body = serde_json::to_string(payload)?;
        self.signed_request(reqwest::Method::POST, path, Some(body))
            .await
    }

    /// Sign and dispatch one request, then parse the response.
    async fn signed_request<T>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, BitsoError>
    where
        T: serde::de::DeserializeOwned,
    {
        if !path.starts_with('/') {
            return Err(BitsoError::InvalidRequest(format!(
                "request path must start with '/': {path}"
            )));
        }

        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BitsoError::MissingCredentials)?;

        let nonce = self.nonce_provider.next_nonce();
        let creds = credentials.get_credentials();
        let auth_header =
            authorization_header(creds, method.as_str(), path, nonce, body.as_deref())?;

        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http_client
            .request(method, &url)
            .header(reqwest::header::AUTHORIZATION, auth_header);

        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Parse a response from the Bitso API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, BitsoError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let retry_after_ms = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body = response.text().await?;

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(BitsoError::RateLimitExceeded { retry_after_ms });
        }

        // A non-2xx response is relayed verbatim: status plus whatever body
        // the service sent, parsed as JSON when possible.
        if !status.is_success() {
            let body = serde_json::from_str(&body)
                .unwrap_or_else(|_| serde_json::Value::String(body));
            return Err(BitsoError::Api(ApiError::new(status.as_u16(), body)));
        }

        // Bitso wraps results as {"success": true, "payload": ...} and carries
        // in-band failures as {"success": false, "error": {...}}.
        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            BitsoError::InvalidResponse(format!("Failed to parse response: {e}. Body: {body}"))
        })?;

        let success = value
            .get("success")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);
        if !success {
            tracing::debug!(status = status.as_u16(), "Bitso reported failure in-band");
            return Err(BitsoError::Api(ApiError::new(status.as_u16(), value)));
        }

        let payload = value.get("payload").cloned().ok_or_else(|| {
            BitsoError::InvalidResponse("Response missing 'payload' field".to_string())
        })?;

        serde_json::from_value(payload).map_err(|e| {
            BitsoError::InvalidResponse(format!("Failed to parse payload: {e}. Body: {body}"))
        })
    }
}

impl std::fmt::Debug for BitsoRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitsoRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`BitsoRestClient`].
pub struct BitsoRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Duration,
}

impl BitsoRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BITSO_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-request deadline. Expired calls fail with
    /// [`BitsoError::Timeout`]; retrying is the caller's decision.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// Fails with [`BitsoError::Config`] if the configured base URL is not a
    /// valid absolute URL.
    pub fn build(self) -> Result<BitsoRestClient, BitsoError> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| BitsoError::Config(format!("Invalid base URL {base_url:?}: {e}")))?;

        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bitso-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitso-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| BitsoError::Config(format!("Failed to build HTTP client: {e}")))?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        Ok(BitsoRestClient {
            http_client: client,
            base_url,
            credentials: self.credentials,
            nonce_provider,
        })
    }
}

impl Default for BitsoRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
