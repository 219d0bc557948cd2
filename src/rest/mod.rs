//! Bitso REST API client.
//!
//! Provides access to Bitso's authenticated REST endpoints.
//!
//! # Trait-based API
//!
//! The [`BitsoClient`] trait abstracts the REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., rate limiting wrapper)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use bitso_api_client::rest::{BitsoClient, BitsoRestClient};
//!
//! async fn recent_withdrawals<C: BitsoClient>(client: &C) -> Result<(), bitso_api_client::BitsoError> {
//!     let withdrawals = client.get_withdrawals(None).await?;
//!     println!("{} withdrawals", withdrawals.len());
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
mod traits;

pub use client::{BitsoRestClient, BitsoRestClientBuilder};
pub use endpoints::*;
pub use traits::BitsoClient;
