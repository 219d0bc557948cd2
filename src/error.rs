//! Error types for the Bitso client library.

use thiserror::Error;

/// The main error type for all Bitso client operations.
#[derive(Error, Debug)]
pub enum BitsoError {
    /// Invalid configuration at startup (bad base URL, missing environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or connection failure below the HTTP response layer
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request middleware failure
    #[error("Transport error: {0}")]
    Middleware(#[source] reqwest_middleware::Error),

    /// Request deadline exceeded
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bitso API returned an error
    #[error("Bitso API error: {0}")]
    Api(ApiError),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_ms:?}ms")]
    RateLimitExceeded {
        /// Suggested wait time in milliseconds before retrying
        retry_after_ms: Option<u64>,
    },

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Caller passed a malformed request (bad path, empty identifier)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Response body could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for private endpoints")]
    MissingCredentials,
}

impl From<reqwest::Error> for BitsoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BitsoError::Timeout
        } else {
            BitsoError::Transport(err)
        }
    }
}

impl From<reqwest_middleware::Error> for BitsoError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(inner) => inner.into(),
            other => BitsoError::Middleware(other),
        }
    }
}

/// An error response from the Bitso API.
///
/// Carries the HTTP status and the remote body verbatim so callers can inspect
/// whatever the service sent back. Bitso errors normally arrive as
/// `{"success": false, "error": {"code": "...", "message": "..."}}`, but the
/// body is preserved even when it doesn't follow that envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status: u16,
    /// The response body, untouched
    pub body: serde_json::Value,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => write!(f, "HTTP {}: {}", self.status, message),
            None => write!(f, "HTTP {}: {}", self.status, self.body),
        }
    }
}

impl ApiError {
    /// Create a new API error from an HTTP status and response body.
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// The Bitso error code (e.g. `"0301"`), if the body follows Bitso's
    /// error envelope.
    pub fn code(&self) -> Option<&str> {
        self.body.get("error")?.get("code")?.as_str()
    }

    /// The human-readable error message, if one can be found in the body.
    ///
    /// Understands both the Bitso envelope (`error.message`) and a plain
    /// `{"error": "..."}` shape.
    pub fn message(&self) -> Option<&str> {
        match self.body.get("error")? {
            serde_json::Value::String(s) => Some(s),
            other => other.get("message")?.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_envelope_accessors() {
        let error = ApiError::new(
            400,
            json!({"success": false, "error": {"code": "0301", "message": "Unknown order book"}}),
        );
        assert_eq!(error.code(), Some("0301"));
        assert_eq!(error.message(), Some("Unknown order book"));
        assert_eq!(error.to_string(), "HTTP 400: Unknown order book");
    }

    #[test]
    fn test_api_error_plain_body() {
        let error = ApiError::new(400, json!({"error": "insufficient funds"}));
        assert_eq!(error.code(), None);
        assert_eq!(error.message(), Some("insufficient funds"));
    }

    #[test]
    fn test_api_error_opaque_body() {
        let error = ApiError::new(502, serde_json::Value::String("bad gateway".to_string()));
        assert_eq!(error.code(), None);
        assert_eq!(error.message(), None);
        assert_eq!(error.to_string(), r#"HTTP 502: "bad gateway""#);
    }
}
