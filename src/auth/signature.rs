//! HMAC-SHA256 request signing for Bitso API authentication.
//!
//! Bitso private endpoints require a signature computed as:
//! ```text
//! HMAC-SHA256(nonce + HTTP_METHOD + request_path + json_payload, api_secret)
//! ```
//!
//! The nonce is its decimal string form, the method is the uppercase verb, the
//! path includes any query string, and the payload term is omitted entirely
//! for requests without a body. The signature is hex-encoded (lowercase) and
//! sent as part of the `Authorization` header:
//! ```text
//! Authorization: Bitso <api_key>:<nonce>:<signature>
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BitsoError;

type HmacSha256 = Hmac<Sha256>;

/// Authorization header scheme for Bitso's HMAC authentication.
pub const AUTH_SCHEME: &str = "Bitso";

/// Sign a request for Bitso's private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `method` - The uppercase HTTP verb (e.g. "POST")
/// * `path` - The request path including any query string (e.g. "/v3/orders/")
/// * `nonce` - The nonce value for this request
/// * `body` - The exact JSON body that will be transmitted, if any
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use bitso_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_request(&credentials, "GET", "/v3/withdrawals/", 1234567890, None)?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    method: &str,
    path: &str,
    nonce: u64,
    body: Option<&str>,
) -> Result<String, BitsoError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BitsoError::Auth(format!("Invalid HMAC key: {e}")))?;

    // Canonical message: nonce + METHOD + path + body. The signed bytes must
    // match the transmitted bytes exactly, so the caller passes the serialized
    // body it is about to send, and bodyless requests contribute no body term.
    hmac.update(nonce.to_string().as_bytes());
    hmac.update(method.as_bytes());
    hmac.update(path.as_bytes());
    if let Some(body) = body {
        hmac.update(body.as_bytes());
    }

    Ok(hex::encode(hmac.finalize().into_bytes()))
}

/// Compose the full `Authorization` header value for a signed request.
pub fn authorization_header(
    credentials: &Credentials,
    method: &str,
    path: &str,
    nonce: u64,
    body: Option<&str>,
) -> Result<String, BitsoError> {
    let signature = sign_request(credentials, method, path, nonce, body)?;
    Ok(format!(
        "{AUTH_SCHEME} {}:{nonce}:{signature}",
        credentials.api_key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_known_vector() {
        // HMAC-SHA256 hex digest of
        // `1700000000000POST/v3/orders/{"book":"btc_mxn","side":"buy","type":"market","minor":"100"}`
        // under key `s3cr3t`.
        let credentials = Credentials::new("key", "s3cr3t");
        let body = r#"{"book":"btc_mxn","side":"buy","type":"market","minor":"100"}"#;

        let signature =
            sign_request(&credentials, "POST", "/v3/orders/", 1700000000000, Some(body)).unwrap();

        assert_eq!(
            signature,
            "a8248fbd9b98f76e76e587aac26547fbee79d2e110e14526ca93f187bab987ea"
        );
    }

    #[test]
    fn test_bodyless_get_known_vector() {
        let credentials = Credentials::new("key", "s3cr3t");

        let signature = sign_request(
            &credentials,
            "GET",
            "/v3/order_trades/oid123/",
            1700000000000,
            None,
        )
        .unwrap();

        // Digest of `1700000000000GET/v3/order_trades/oid123/` under `s3cr3t`.
        assert_eq!(
            signature,
            "78abfda99e2c1a7584506e1d72e99db30d2dcfd33c97f9e0541e7ac858b8e6fb"
        );
    }

    #[test]
    fn test_bodyless_get_is_not_signed_as_empty_object() {
        // A GET without a body signs no body term at all, which is not the
        // same message as one ending in the literal `{}`.
        let credentials = Credentials::new("key", "s3cr3t");
        let path = "/v3/order_trades/oid123/";

        let without_body = sign_request(&credentials, "GET", path, 1700000000000, None).unwrap();
        let empty_object =
            sign_request(&credentials, "GET", path, 1700000000000, Some("{}")).unwrap();

        assert_ne!(without_body, empty_object);
    }

    #[test]
    fn test_signature_deterministic() {
        let credentials = Credentials::new("key", "my_secret");
        let body = r#"{"book":"eth_mxn","side":"buy","type":"limit","major":"0.5","price":"40000"}"#;

        let sig1 = sign_request(&credentials, "POST", "/v3/orders/", 12345, Some(body)).unwrap();
        let sig2 = sign_request(&credentials, "POST", "/v3/orders/", 12345, Some(body)).unwrap();

        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_nonce() {
        let credentials = Credentials::new("key", "my_secret");

        let sig1 = sign_request(&credentials, "GET", "/v3/withdrawals/", 12345, None).unwrap();
        let sig2 = sign_request(&credentials, "GET", "/v3/withdrawals/", 12346, None).unwrap();

        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_path() {
        let credentials = Credentials::new("key", "my_secret");

        let sig1 = sign_request(&credentials, "GET", "/v3/withdrawals/", 12345, None).unwrap();
        let sig2 = sign_request(&credentials, "GET", "/v3/fundings/", 12345, None).unwrap();

        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_authorization_header_shape() {
        let credentials = Credentials::new("test_key", "my_secret");

        let header =
            authorization_header(&credentials, "GET", "/v3/withdrawals/", 12345, None).unwrap();

        let signature = sign_request(&credentials, "GET", "/v3/withdrawals/", 12345, None).unwrap();
        assert_eq!(header, format!("Bitso test_key:12345:{signature}"));
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
