//! Order records and their status enumeration.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::QueryParseError;

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Received, not yet started.
    Pending,
    /// In the kitchen.
    Preparing,
    /// With a driver.
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    /// Handed to the customer.
    Delivered,
    /// Will not be fulfilled.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in the order the filter drop-down lists them.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Display and wire label.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Delivered and cancelled orders never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Still being worked on.
    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = QueryParseError;

    /// Exact, case-sensitive label match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| QueryParseError::UnknownStatus(s.to_string()))
    }
}

/// One pizza purchase request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique id, e.g. `PZA001`.
    pub id: String,
    /// Free-text customer name.
    pub customer_name: String,
    /// Menu item name.
    pub pizza_type: String,
    /// Number of pizzas, always positive.
    pub quantity: u32,
    /// Timestamp text, see [`parse_order_date`].
    pub order_date: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Order amount in dollars, when the dataset carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

const NAIVE_FORMATS: [&str; 4] =
    ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse an order timestamp.
///
/// Accepts `2024-01-20 14:30`, the `T`-separated variants with or without
/// seconds, and RFC 3339. Offset-carrying timestamps are normalised to UTC
/// so that every order compares on the same clock.
pub fn parse_order_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}

/// Timestamp as shown in tables, e.g. `Jan 20, 2024 14:30`. Text that does
/// not parse is shown as is.
pub fn display_order_date(raw: &str) -> String {
    parse_order_date(raw)
        .map(|instant| instant.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}
