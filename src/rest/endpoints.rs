//! Bitso REST API endpoint constants.

/// Base URL for the Bitso REST API.
pub const BITSO_BASE_URL: &str = "https://api.bitso.com";

/// Private endpoints (authentication required).
pub mod private {
    /// Place an order.
    pub const ORDERS: &str = "/v3/orders/";
    /// List withdrawals.
    pub const WITHDRAWALS: &str = "/v3/withdrawals/";

    /// Trades that filled a specific order.
    pub fn order_trades(order_id: &str) -> String {
        format!("/v3/order_trades/{order_id}/")
    }
}
