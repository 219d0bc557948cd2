//! # Bitso Client
//!
//! An async Rust client library for the Bitso exchange REST API (v3).
//!
//! ## Features
//!
//! - Authenticated REST endpoints with Bitso's per-request HMAC-SHA256 scheme
//! - Strictly increasing nonces, safe under concurrent dispatch
//! - Typed errors that distinguish remote API failures from transport failures
//! - Optional client-side rate limiting
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitso_api_client::auth::StaticCredentials;
//! use bitso_api_client::rest::BitsoRestClient;
//! use bitso_api_client::rest::private::PlaceOrderRequest;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
//!     let client = BitsoRestClient::builder().credentials(credentials).build()?;
//!
//!     let request = PlaceOrderRequest::market_buy("btc_mxn", Decimal::new(100, 0));
//!     let confirmation = client.place_order(&request).await?;
//!     println!("Order placed: {}", confirmation.oid);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rate_limit;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, BitsoError};
pub use types::common::{OrderKind, OrderStatus, Side, WithdrawalStatus};

/// Result type alias using BitsoError
pub type Result<T> = std::result::Result<T, BitsoError>;
