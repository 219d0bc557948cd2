//! Rate limiting for the Bitso API.
//!
//! Bitso limits authenticated clients to 300 requests per rolling 5-minute
//! window per API key; exceeding it gets the key blocked for several minutes.
//! This module provides an opt-in wrapper that spaces calls out before they
//! leave the process. It only ever delays a call until a permit is free - it
//! never drops or retries one.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bitso_api_client::rate_limit::{RateLimitConfig, RateLimitedClient};
//! use bitso_api_client::rest::BitsoRestClient;
//!
//! let client = BitsoRestClient::builder().credentials(credentials).build()?;
//! let rate_limited = RateLimitedClient::new(client, RateLimitConfig::default());
//!
//! // All requests are automatically rate limited.
//! let withdrawals = rate_limited.get_withdrawals(None).await?;
//! ```

mod client;
mod window;

pub use client::RateLimitedClient;
pub use window::SlidingWindow;

use std::time::Duration;

/// Rate limit constants for Bitso's published quotas.
pub mod limits {
    /// Maximum authenticated requests per window, per API key.
    pub const PRIVATE_MAX_REQUESTS: u32 = 300;
    /// Window length in seconds for the private quota.
    pub const PRIVATE_WINDOW_SECS: u64 = 300;
}

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
    /// Whether to enable rate limiting.
    pub enabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: limits::PRIVATE_MAX_REQUESTS,
            window: Duration::from_secs(limits::PRIVATE_WINDOW_SECS),
            enabled: true,
        }
    }
}
