//! Dashboard overview figures aggregated over the order book.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    book::OrderBook,
    order::{Order, OrderStatus},
};

/// Number of orders in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// Status.
    pub status: OrderStatus,
    /// Orders currently in it.
    pub count: usize,
}

/// Aggregates shown on the dashboard overview cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Orders in the collection.
    pub total_orders: usize,
    /// Sum of quantities.
    pub pizzas_sold: u64,
    /// Distinct customer names.
    pub customers: usize,
    /// Sum of totals, zero when the dataset carries none.
    pub revenue: f64,
    /// Revenue per order, zero for an empty collection.
    pub average_order_value: f64,
    /// Orders not yet delivered or cancelled.
    pub active_orders: usize,
    /// One entry per status, in [`OrderStatus::ALL`] order.
    pub status_counts: Vec<StatusCount>,
}

impl DashboardStats {
    /// Aggregate over every order in `book`.
    pub fn from_book(book: &OrderBook) -> Self {
        let orders = book.orders();
        let total_orders = orders.len();
        let revenue: f64 = orders.iter().filter_map(|order| order.total).sum();
        let customers = orders
            .iter()
            .map(|order| order.customer_name.as_str())
            .collect::<HashSet<_>>()
            .len();
        let status_counts = OrderStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: orders.iter().filter(|order| order.status == status).count(),
            })
            .collect();

        Self {
            total_orders,
            pizzas_sold: orders.iter().map(|order| u64::from(order.quantity)).sum(),
            customers,
            revenue,
            average_order_value: if total_orders == 0 {
                0.0
            } else {
                revenue / total_orders as f64
            },
            active_orders: orders.iter().filter(|order| order.status.is_active()).count(),
            status_counts,
        }
    }

    /// Count for one status.
    pub fn count_of(&self, status: OrderStatus) -> usize {
        self.status_counts
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }
}

/// The `limit` newest orders, newest first. Orders placed at the same
/// instant keep collection order.
pub fn recent_orders(book: &OrderBook, limit: usize) -> Vec<&Order> {
    let mut indexed: Vec<usize> = (0..book.len()).collect();
    indexed.sort_by(|left, right| book.placed_at(*right).cmp(&book.placed_at(*left)));
    indexed
        .into_iter()
        .take(limit)
        .map(|index| &book.orders()[index])
        .collect()
}

/// Render a dollar amount as `$1,234.50`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_orders;

    fn sample_book() -> OrderBook {
        OrderBook::new(sample_orders()).expect("sample orders are valid")
    }

    #[test]
    fn aggregates_sample_dataset() {
        let stats = DashboardStats::from_book(&sample_book());
        assert_eq!(stats.total_orders, 8);
        assert_eq!(stats.pizzas_sold, 15);
        assert_eq!(stats.customers, 8);
        assert!((stats.revenue - 247.67).abs() < 1e-9);
        assert!((stats.average_order_value - 247.67 / 8.0).abs() < 1e-9);
        assert_eq!(stats.active_orders, 5);
        assert_eq!(stats.count_of(OrderStatus::Delivered), 2);
        assert_eq!(stats.count_of(OrderStatus::Cancelled), 1);
        assert_eq!(stats.status_counts.len(), OrderStatus::ALL.len());
        assert_eq!(stats.status_counts.iter().map(|entry| entry.count).sum::<usize>(), 8);
    }

    #[test]
    fn empty_book_has_zero_stats() {
        let stats = DashboardStats::from_book(&OrderBook::new(Vec::new()).expect("empty"));
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.average_order_value, 0.0);
        assert!(stats.status_counts.iter().all(|entry| entry.count == 0));
    }

    #[test]
    fn recent_orders_are_newest_first() {
        let book = sample_book();
        let recent: Vec<_> = recent_orders(&book, 3).iter().map(|order| order.id.as_str()).collect();
        assert_eq!(recent, ["PZA008", "PZA007", "PZA006"]);
        assert_eq!(recent_orders(&book, 100).len(), 8);
        assert!(recent_orders(&book, 0).is_empty());
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(18.5), "$18.50");
        assert_eq!(format_money(1234.0), "$1,234.00");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(-51.4), "-$51.40");
    }
}
