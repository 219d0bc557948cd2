//! Types for the private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{OrderKind, OrderStatus, Side, WithdrawalStatus};

/// Request to place an order on a book.
///
/// Field order matters: the serialized body is the exact byte sequence that
/// gets signed, and the remote contract expects
/// `{book, side, type, minor}` for market buys and
/// `{book, side, type, major, price}` for limit buys.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceOrderRequest {
    /// Order book to trade on (e.g. "btc_mxn").
    pub book: String,
    /// Buy or sell.
    pub side: Side,
    /// Market or limit.
    #[serde(rename = "type")]
    pub kind: OrderKind,
    /// Amount of major currency, for limit orders.
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub major: Option<Decimal>,
    /// Limit price in minor currency.
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    /// Amount of minor currency to spend, for market orders.
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub minor: Option<Decimal>,
}

impl PlaceOrderRequest {
    /// Market buy: spend `minor` units of the quote currency at the best
    /// available price.
    pub fn market_buy(book: impl Into<String>, minor: Decimal) -> Self {
        Self {
            book: book.into(),
            side: Side::Buy,
            kind: OrderKind::Market,
            major: None,
            price: None,
            minor: Some(minor),
        }
    }

    /// Limit buy: bid for `major` units of the base currency at `price`.
    pub fn limit_buy(book: impl Into<String>, major: Decimal, price: Decimal) -> Self {
        Self {
            book: book.into(),
            side: Side::Buy,
            kind: OrderKind::Limit,
            major: Some(major),
            price: Some(price),
            minor: None,
        }
    }
}

/// Confirmation returned when an order is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderConfirmation {
    /// The order ID assigned by the exchange.
    pub oid: String,
    /// Book the order was placed on, when echoed back.
    #[serde(default)]
    pub book: Option<String>,
    /// Order side, when echoed back.
    #[serde(default)]
    pub side: Option<Side>,
    /// Order type, when echoed back.
    #[serde(rename = "type", default)]
    pub kind: Option<OrderKind>,
    /// Current order status, when echoed back.
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

/// A single trade that filled (part of) an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderTrade {
    /// Order book of the trade.
    pub book: String,
    /// Amount of major currency traded (negative when given up).
    #[serde(with = "rust_decimal::serde::str")]
    pub major: Decimal,
    /// Amount of minor currency traded (negative when given up).
    #[serde(with = "rust_decimal::serde::str")]
    pub minor: Decimal,
    /// Execution price in minor currency.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Fee charged for this trade.
    #[serde(with = "rust_decimal::serde::str")]
    pub fees_amount: Decimal,
    /// Currency the fee was charged in.
    pub fees_currency: String,
    /// Trade ID.
    pub tid: i64,
    /// Order ID this trade belongs to.
    pub oid: String,
    /// Maker side of the trade.
    pub side: Side,
    /// When the trade executed.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Filters for listing withdrawals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WithdrawalsRequest {
    /// Return records older than this withdrawal ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Maximum number of records to return (remote default 25, cap 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Restrict to withdrawals in this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WithdrawalStatus>,
    /// Restrict to a withdrawal method (e.g. "Bitcoin", "sp").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// A withdrawal record.
#[derive(Debug, Clone, Deserialize)]
pub struct Withdrawal {
    /// Withdrawal ID.
    pub wid: String,
    /// Current status.
    pub status: WithdrawalStatus,
    /// When the withdrawal was requested.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Currency withdrawn.
    pub currency: String,
    /// Withdrawal method (e.g. "Bitcoin", "sp").
    pub method: String,
    /// Amount withdrawn.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Method-specific detail object, relayed as-is.
    #[serde(default)]
    pub details: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_market_buy_body_is_canonical() {
        let request = PlaceOrderRequest::market_buy("btc_mxn", Decimal::new(100, 0));
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"book":"btc_mxn","side":"buy","type":"market","minor":"100"}"#
        );
    }

    #[test]
    fn test_limit_buy_body_is_canonical() {
        let request =
            PlaceOrderRequest::limit_buy("eth_mxn", Decimal::new(5, 1), Decimal::new(40000, 0));
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"book":"eth_mxn","side":"buy","type":"limit","major":"0.5","price":"40000"}"#
        );
    }

    #[test]
    fn test_order_trade_deserialization() {
        let json = r#"{
            "book": "btc_mxn",
            "major": "-0.25232073",
            "created_at": "2016-04-08T17:52:31.000+00:00",
            "minor": "1013.540958479115",
            "fees_amount": "-0.10127504",
            "fees_currency": "mxn",
            "price": "4057.45",
            "tid": 51756,
            "oid": "g81d3y1ywri0yg8m",
            "side": "sell"
        }"#;

        let trade: OrderTrade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.book, "btc_mxn");
        assert_eq!(trade.side, Side::Sell);
        assert_eq!(trade.tid, 51756);
        assert_eq!(trade.price, Decimal::new(405745, 2));
        assert_eq!(trade.created_at, datetime!(2016-04-08 17:52:31 UTC));
    }

    #[test]
    fn test_withdrawal_deserialization() {
        let json = r#"{
            "wid": "c5b8d7f0768ee91d3b33bee648318688",
            "status": "pending",
            "created_at": "2016-04-08T17:52:31.000+00:00",
            "currency": "btc",
            "method": "Bitcoin",
            "amount": "0.48650929",
            "details": {
                "withdrawal_address": "18MsnATiNiKLqUHDTRKjurwMg7inCrdNEp",
                "tx_hash": "d4f28394693e9fb5fffcaf730c11f32d1922e5837f76ca82189d3bfe30ded433"
            }
        }"#;

        let withdrawal: Withdrawal = serde_json::from_str(json).unwrap();
        assert_eq!(withdrawal.wid, "c5b8d7f0768ee91d3b33bee648318688");
        assert_eq!(withdrawal.status, WithdrawalStatus::Pending);
        assert_eq!(withdrawal.amount, Decimal::new(48650929, 8));
        assert!(withdrawal.details.get("tx_hash").is_some());
    }

    #[test]
    fn test_withdrawals_request_query_string() {
        let request = WithdrawalsRequest {
            limit: Some(5),
            ..WithdrawalsRequest::default()
        };
        assert_eq!(serde_urlencoded::to_string(&request).unwrap(), "limit=5");

        let empty = WithdrawalsRequest::default();
        assert_eq!(serde_urlencoded::to_string(&empty).unwrap(), "");
    }
}
