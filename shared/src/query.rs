//! Transient search / filter / sort parameters chosen by the viewer.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::QueryParseError, order::OrderStatus};

/// An order attribute the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Order id.
    Id,
    /// Customer name.
    CustomerName,
    /// Pizza type.
    PizzaType,
    /// Quantity.
    Quantity,
    /// Parsed order date.
    OrderDate,
    /// Status label.
    Status,
    /// Order total.
    Total,
}

impl SortField {
    /// Table column order.
    pub const ALL: [SortField; 7] = [
        SortField::Id,
        SortField::CustomerName,
        SortField::PizzaType,
        SortField::Quantity,
        SortField::OrderDate,
        SortField::Total,
        SortField::Status,
    ];

    /// Attribute name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::CustomerName => "customerName",
            SortField::PizzaType => "pizzaType",
            SortField::Quantity => "quantity",
            SortField::OrderDate => "orderDate",
            SortField::Status => "status",
            SortField::Total => "total",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(SortField::Id),
            "customerName" | "customer_name" => Ok(SortField::CustomerName),
            "pizzaType" | "pizza_type" => Ok(SortField::PizzaType),
            "quantity" => Ok(SortField::Quantity),
            "orderDate" | "order_date" => Ok(SortField::OrderDate),
            "status" => Ok(SortField::Status),
            "total" => Ok(SortField::Total),
            other => Err(QueryParseError::UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smaller or earlier first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Larger or later first.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The other direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// `asc` or `desc`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(QueryParseError::UnknownDirection(s.to_string())),
        }
    }
}

/// Status filter: either everything, or exactly one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// No filtering.
    #[default]
    All,
    /// Only orders with this status.
    Only(OrderStatus),
}

impl StatusFilter {
    /// Sentinel value used in query strings and the drop-down.
    pub const ALL_SENTINEL: &'static str = "all";

    /// Whether an order with `status` passes this filter.
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    /// `all` or the status label.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => Self::ALL_SENTINEL,
            StatusFilter::Only(status) => status.label(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_SENTINEL {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        StatusFilter::Only(status)
    }
}

/// The full query state of the orders table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    /// Case-insensitive substring filter; empty means no filter.
    pub search_term: String,
    /// Status filter.
    pub status_filter: StatusFilter,
    /// Column the table is sorted by.
    pub sort_field: SortField,
    /// Sort direction.
    pub sort_direction: SortDirection,
}

impl Default for OrderQuery {
    /// Newest orders first, nothing filtered.
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            sort_field: SortField::OrderDate,
            sort_direction: SortDirection::Descending,
        }
    }
}

impl OrderQuery {
    /// Case-folded search needle, `None` when the term is empty. Whitespace
    /// is part of the needle.
    pub fn search_needle(&self) -> Option<String> {
        if self.search_term.is_empty() {
            None
        } else {
            Some(self.search_term.to_lowercase())
        }
    }

    /// Same field flips the direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// True when neither the search nor the status filter restricts rows.
    pub fn is_unfiltered(&self) -> bool {
        self.search_needle().is_none() && self.status_filter == StatusFilter::All
    }
}
