//! `recent`: newest orders first.

use pizzafy_shared::{recent_orders, OrderBook};

use crate::{cli::OutputFormat, render::render_orders};

/// Render the `limit` newest orders.
pub fn run(book: &OrderBook, limit: usize, format: OutputFormat) -> String {
    render_orders(&recent_orders(book, limit), format)
}
