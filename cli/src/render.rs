//! Plain-text rendering of orders and stats.

use std::fmt::Write;

use pizzafy_shared::{format_money, order::display_order_date, DashboardStats, Order};

use crate::cli::OutputFormat;

/// Printed instead of a table when no order matches.
pub const EMPTY_MESSAGE: &str = "No orders found matching your criteria.";

const HEADERS: [&str; 7] =
    ["Order ID", "Customer", "Pizza Type", "Quantity", "Order Date", "Total", "Status"];

fn row_cells(order: &Order) -> [String; 7] {
    [
        order.id.clone(),
        order.customer_name.clone(),
        order.pizza_type.clone(),
        order.quantity.to_string(),
        display_order_date(&order.order_date),
        order.total.map(format_money).unwrap_or_else(|| "-".to_string()),
        order.status.to_string(),
    ]
}

/// Render `orders` in the requested layout, or [`EMPTY_MESSAGE`].
pub fn render_orders(orders: &[&Order], format: OutputFormat) -> String {
    if orders.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }
    match format {
        OutputFormat::Table => render_table(orders),
        OutputFormat::Vertical => render_vertical(orders),
    }
}

fn render_table(orders: &[&Order]) -> String {
    let rows: Vec<[String; 7]> = orders.iter().map(|order| row_cells(order)).collect();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[&str]| {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(line.trim_end());
        out.push('\n');
    };

    push_line(&HEADERS);
    let rule = widths.map(|width| "-".repeat(width));
    push_line(&rule.iter().map(String::as_str).collect::<Vec<_>>());
    for row in &rows {
        push_line(&row.iter().map(String::as_str).collect::<Vec<_>>());
    }
    out
}

fn render_vertical(orders: &[&Order]) -> String {
    let label_width = HEADERS.iter().map(|header| header.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (index, order) in orders.iter().enumerate() {
        let _ = writeln!(out, "*************** {}. order ***************", index + 1);
        for (header, cell) in HEADERS.iter().zip(row_cells(order)) {
            let _ = writeln!(out, "{header:>label_width$}: {cell}");
        }
    }
    out
}

/// Render the dashboard overview figures.
pub fn render_stats(stats: &DashboardStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Orders:    {}", stats.total_orders);
    let _ = writeln!(out, "Revenue:         {}", format_money(stats.revenue));
    let _ = writeln!(out, "Customers:       {}", stats.customers);
    let _ = writeln!(out, "Avg Order Value: {}", format_money(stats.average_order_value));
    let _ = writeln!(out, "Pizzas Sold:     {}", stats.pizzas_sold);
    let _ = writeln!(out, "Active Orders:   {}", stats.active_orders);
    let _ = writeln!(out, "By status:");
    for entry in &stats.status_counts {
        let _ = writeln!(out, "  {:<16} {}", entry.status.label(), entry.count);
    }
    out
}
