//! Rate-limited REST client wrapper.
//!
//! Provides a wrapper around any [`BitsoClient`] implementation that spaces
//! requests out to stay inside Bitso's per-key quota.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::BitsoError;
use crate::rate_limit::{RateLimitConfig, SlidingWindow};
use crate::rest::BitsoClient;
use crate::rest::private::{
    OrderConfirmation, OrderTrade, PlaceOrderRequest, Withdrawal, WithdrawalsRequest,
};

/// A rate-limited wrapper around any [`BitsoClient`] implementation.
///
/// Every operation waits for a permit from a shared sliding window before it
/// is forwarded to the inner client. Calls are delayed, never dropped, and the
/// inner client's no-retry semantics are untouched.
///
/// # Example
///
/// ```rust,ignore
/// use bitso_api_client::rate_limit::{RateLimitConfig, RateLimitedClient};
/// use bitso_api_client::rest::BitsoRestClient;
///
/// let client = BitsoRestClient::builder().credentials(credentials).build()?;
/// let rate_limited = RateLimitedClient::new(client, RateLimitConfig::default());
///
/// let trades = rate_limited.get_order_trades("g81d3y1ywri0yg8m").await?;
/// ```
pub struct RateLimitedClient<C> {
    inner: C,
    config: RateLimitConfig,
    limiter: Arc<Mutex<SlidingWindow>>,
}

impl<C> RateLimitedClient<C> {
    /// Create a new rate-limited client wrapper.
    pub fn new(inner: C, config: RateLimitConfig) -> Self {
        let limiter = SlidingWindow::new(config.window, config.max_requests);
        Self {
            inner,
            config,
            limiter: Arc::new(Mutex::new(limiter)),
        }
    }

    /// Get a reference to the inner client.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Get the current configuration.
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Enable or disable rate limiting.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Wait for a request permit.
    async fn wait_for_permit(&self) -> Result<(), BitsoError> {
        if !self.config.enabled {
            return Ok(());
        }

        loop {
            let mut limiter = self.limiter.lock().await;
            match limiter.try_acquire() {
                Ok(()) => return Ok(()),
                Err(wait_time) => {
                    drop(limiter);
                    tracing::debug!(?wait_time, "rate limit reached, waiting for a permit");
                    tokio::time::sleep(wait_time).await;
                }
            }
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for RateLimitedClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitedClient")
            .field("inner", &self.inner)
            .field("config", &self.config)
            .finish()
    }
}

impl<C: Clone> Clone for RateLimitedClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            config: self.config.clone(),
            limiter: self.limiter.clone(),
        }
    }
}

impl<C: BitsoClient> BitsoClient for RateLimitedClient<C> {
    async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<OrderConfirmation, BitsoError> {
        self.wait_for_permit().await?;
        self.inner.place_order(request).await
    }

    async fn get_order_trades(&self, order_id: &str) -> Result<Vec<OrderTrade>, BitsoError> {
        self.wait_for_permit().await?;
        self.inner.get_order_trades(order_id).await
    }

    async fn get_withdrawals(
        &self,
        request: Option<&WithdrawalsRequest>,
    ) -> Result<Vec<Withdrawal>, BitsoError> {
        self.wait_for_permit().await?;
        self.inner.get_withdrawals(request).await
    }
}
