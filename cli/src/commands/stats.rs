//! `stats`: dashboard overview figures.

use pizzafy_shared::{DashboardStats, OrderBook};

use crate::render::render_stats;

/// Render the overview for `book`.
pub fn run(book: &OrderBook) -> String {
    render_stats(&DashboardStats::from_book(book))
}
