//! Subcommand implementations.

pub mod orders;
pub mod recent;
pub mod stats;

use anyhow::{Context, Result};
use pizzafy_shared::{source::load_or_sample, OrderBook};

use crate::cli::{Cli, Commands};

/// Run the parsed command, returning what should be printed to stdout.
pub fn run(cli: Cli) -> Result<String> {
    let book = load_book(cli.orders_file.as_deref())?;
    match cli.command {
        Commands::Orders {
            search,
            status,
            sort,
            desc,
            asc,
            format,
        } => orders::run(book, orders::OrdersArgs {
            search,
            status,
            sort,
            desc,
            asc,
            format,
        }),
        Commands::Stats => Ok(stats::run(&book)),
        Commands::Recent {
            limit,
            format,
        } => Ok(recent::run(&book, limit, format)),
    }
}

fn load_book(path: Option<&std::path::Path>) -> Result<OrderBook> {
    load_or_sample(path).with_context(|| match path {
        Some(path) => format!("failed to load orders from {}", path.display()),
        None => "built-in sample orders are invalid".to_string(),
    })
}
