//! Trait definition for the Bitso REST API client.
//!
//! This module provides the `BitsoClient` trait which abstracts the REST API
//! operations. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., rate limiting wrapper)
//! - Alternative implementations

use std::future::Future;

use crate::error::BitsoError;
use crate::rest::BitsoRestClient;
use crate::rest::private::{
    OrderConfirmation, OrderTrade, PlaceOrderRequest, Withdrawal, WithdrawalsRequest,
};

/// Trait defining the Bitso REST API operations.
///
/// All methods are async and return `Result<T, BitsoError>`.
pub trait BitsoClient: Send + Sync {
    /// Place an order.
    fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> impl Future<Output = Result<OrderConfirmation, BitsoError>> + Send;

    /// Get the trades that filled a specific order.
    fn get_order_trades(
        &self,
        order_id: &str,
    ) -> impl Future<Output = Result<Vec<OrderTrade>, BitsoError>> + Send;

    /// List withdrawals.
    fn get_withdrawals(
        &self,
        request: Option<&WithdrawalsRequest>,
    ) -> impl Future<Output = Result<Vec<Withdrawal>, BitsoError>> + Send;
}

impl BitsoClient for BitsoRestClient {
    async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<OrderConfirmation, BitsoError> {
        BitsoRestClient::place_order(self, request).await
    }

    async fn get_order_trades(&self, order_id: &str) -> Result<Vec<OrderTrade>, BitsoError> {
        BitsoRestClient::get_order_trades(self, order_id).await
    }

    async fn get_withdrawals(
        &self,
        request: Option<&WithdrawalsRequest>,
    ) -> Result<Vec<Withdrawal>, BitsoError> {
        BitsoRestClient::get_withdrawals(self, request).await
    }
}
