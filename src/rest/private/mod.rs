//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.

mod types;

pub use types::*;

use crate::error::BitsoError;
use crate::rest::BitsoRestClient;
use crate::rest::endpoints::private;

impl BitsoRestClient {
    /// Place an order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitso_api_client::auth::StaticCredentials;
    /// use bitso_api_client::rest::BitsoRestClient;
    /// use bitso_api_client::rest::private::PlaceOrderRequest;
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = BitsoRestClient::builder().credentials(credentials).build()?;
    ///
    ///     // Spend 100 MXN at market price.
    ///     let request = PlaceOrderRequest::market_buy("btc_mxn", Decimal::new(100, 0));
    ///     let confirmation = client.place_order(&request).await?;
    ///     println!("Order ID: {}", confirmation.oid);
    ///     Ok(())
    /// }
    /// ```
    pub async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<OrderConfirmation, BitsoError> {
        self.signed_post(private::ORDERS, request).await
    }

    /// Get the trades that filled a specific order.
    pub async fn get_order_trades(&self, order_id: &str) -> Result<Vec<OrderTrade>, BitsoError> {
        if order_id.is_empty() || order_id.contains('/') {
            return Err(BitsoError::InvalidRequest(format!(
                "invalid order ID: {order_id:?}"
            )));
        }
        self.signed_get(&private::order_trades(order_id)).await
    }

    /// List withdrawals, most recent first.
    pub async fn get_withdrawals(
        &self,
        request: Option<&WithdrawalsRequest>,
    ) -> Result<Vec<Withdrawal>, BitsoError> {
        match request {
            Some(req) => {
                self.signed_get_with_params(private::WITHDRAWALS, req)
                    .await
            }
            None => self.signed_get(private::WITHDRAWALS).await,
        }
    }
}
