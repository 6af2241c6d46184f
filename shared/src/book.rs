//! The validated, immutable order collection.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::{
    error::OrderDataError,
    order::{parse_order_date, Order},
    query::SortField,
};

/// An order collection that passed validation, with each order's parsed
/// timestamp cached next to it.
///
/// The book is built once and never mutated; every view is derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBook {
    orders: Vec<Order>,
    placed_at: Vec<NaiveDateTime>,
    has_totals: bool,
}

impl OrderBook {
    /// Validate `orders` and build the book.
    ///
    /// Fails on the first record that breaks the data contract: duplicate
    /// id, unparseable date, zero quantity, negative or non-finite total,
    /// or a total carried by some orders but not all of them.
    pub fn new(orders: Vec<Order>) -> Result<Self, OrderDataError> {
        let mut placed_at = Vec::with_capacity(orders.len());
        let has_totals = orders.first().is_some_and(|order| order.total.is_some());

        let mut seen = HashSet::with_capacity(orders.len());
        for order in &orders {
            if !seen.insert(order.id.as_str()) {
                return Err(OrderDataError::DuplicateId(order.id.clone()));
            }
            if order.quantity == 0 {
                return Err(OrderDataError::InvalidQuantity(order.id.clone()));
            }
            match order.total {
                Some(value) if !value.is_finite() || value < 0.0 => {
                    return Err(OrderDataError::InvalidTotal {
                        id: order.id.clone(),
                        value,
                    });
                },
                Some(_) if !has_totals => {
                    return Err(OrderDataError::InconsistentTotals(
                        orders[0].id.clone(),
                    ));
                },
                None if has_totals => {
                    return Err(OrderDataError::InconsistentTotals(order.id.clone()));
                },
                _ => {},
            }
            let instant = parse_order_date(&order.order_date).ok_or_else(|| {
                OrderDataError::InvalidOrderDate {
                    id: order.id.clone(),
                    value: order.order_date.clone(),
                }
            })?;
            placed_at.push(instant);
        }
        drop(seen);

        Ok(Self {
            orders,
            placed_at,
            has_totals,
        })
    }

    /// Orders in collection order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// True for an empty collection.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Look an order up by id.
    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Parsed timestamp of the order at `index`.
    pub fn placed_at(&self, index: usize) -> NaiveDateTime {
        self.placed_at[index]
    }

    /// Whether every order carries a total.
    pub fn has_totals(&self) -> bool {
        self.has_totals
    }

    /// Whether `field` is an attribute of every order in this book.
    pub fn supports(&self, field: SortField) -> bool {
        field != SortField::Total || self.has_totals
    }

    /// Columns this book can be sorted by, in table order.
    pub fn sortable_fields(&self) -> impl Iterator<Item = SortField> + '_ {
        SortField::ALL.into_iter().filter(|field| self.supports(*field))
    }
}
