//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pizzafy_shared::{SortField, StatusFilter};

/// How order rows are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns, one row per order.
    Table,
    /// One `field: value` block per order.
    Vertical,
}

/// Top-level arguments.
#[derive(Parser)]
#[command(name = "pizzafy-cli", version, about = "Pizzafy order dashboard CLI")]
pub struct Cli {
    /// JSON order dataset (defaults to the built-in sample orders).
    #[arg(long, global = true)]
    pub orders_file: Option<PathBuf>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List orders with search, status filter and sorting.
    Orders {
        /// Case-insensitive text matched against id, customer and pizza.
        #[arg(long, default_value = "")]
        search: String,
        /// Status label (e.g. "Out for Delivery") or `all`.
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Sort column: id, customerName, pizzaType, quantity, orderDate,
        /// status or total. Defaults to newest first.
        #[arg(long)]
        sort: Option<SortField>,
        /// Sort descending.
        #[arg(long, conflicts_with = "asc")]
        desc: bool,
        /// Sort ascending.
        #[arg(long)]
        asc: bool,
        /// Output layout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print the dashboard overview figures.
    Stats,
    /// Print the newest orders.
    Recent {
        /// How many orders to show.
        #[arg(long, default_value_t = 3)]
        limit: usize,
        /// Output layout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}
