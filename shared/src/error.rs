//! Error types for order data and query parsing.

use thiserror::Error;

/// A record in the order collection violates the data contract.
///
/// These are raised once, when an [`OrderBook`](crate::OrderBook) is built,
/// so that a malformed collection never reaches the view layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrderDataError {
    /// Two records share the same id.
    #[error("duplicate order id `{0}`")]
    DuplicateId(String),
    /// `orderDate` could not be parsed into an instant.
    #[error("order `{id}` has an unparseable date `{value}`")]
    InvalidOrderDate {
        /// Offending order.
        id: String,
        /// Raw date text.
        value: String,
    },
    /// Quantity must be a positive count.
    #[error("order `{0}` has a zero quantity")]
    InvalidQuantity(String),
    /// Total must be a finite, non-negative amount.
    #[error("order `{id}` has an invalid total {value}")]
    InvalidTotal {
        /// Offending order.
        id: String,
        /// Raw amount.
        value: f64,
    },
    /// Some orders carry a total and some do not.
    #[error("order `{0}` is missing a total while other orders carry one")]
    InconsistentTotals(String),
    /// Dataset file could not be read or decoded.
    #[error("failed to load orders: {0}")]
    Load(String),
}

/// A query parameter (status label, sort field, direction) is not
/// recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryParseError {
    /// Not one of the five status labels.
    #[error("unknown order status `{0}`")]
    UnknownStatus(String),
    /// Not an attribute of an order.
    #[error("unknown sort field `{0}`")]
    UnknownSortField(String),
    /// Neither `asc` nor `desc`.
    #[error("unknown sort direction `{0}`")]
    UnknownDirection(String),
}
