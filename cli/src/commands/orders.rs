//! `orders`: the filtered, sorted orders table.

use anyhow::{bail, Result};
use pizzafy_shared::{OrderBook, OrderList, OrderQuery, SortDirection, SortField, StatusFilter};

use crate::{cli::OutputFormat, render::render_orders};

/// Arguments of the `orders` subcommand.
#[derive(Debug, Clone)]
pub struct OrdersArgs {
    /// Search text.
    pub search: String,
    /// Status filter.
    pub status: StatusFilter,
    /// Sort column, newest first when absent.
    pub sort: Option<SortField>,
    /// Force descending.
    pub desc: bool,
    /// Force ascending.
    pub asc: bool,
    /// Output layout.
    pub format: OutputFormat,
}

impl OrdersArgs {
    /// Query state these arguments describe. A named column without an
    /// explicit direction sorts ascending.
    pub fn query(&self) -> OrderQuery {
        let defaults = OrderQuery::default();
        let sort_field = self.sort.unwrap_or(defaults.sort_field);
        let sort_direction = if self.desc {
            SortDirection::Descending
        } else if self.asc || self.sort.is_some() {
            SortDirection::Ascending
        } else {
            defaults.sort_direction
        };
        OrderQuery {
            search_term: self.search.clone(),
            status_filter: self.status,
            sort_field,
            sort_direction,
        }
    }
}

/// Render the orders matching `args`.
pub fn run(book: OrderBook, args: OrdersArgs) -> Result<String> {
    let query = args.query();
    if !book.supports(query.sort_field) {
        bail!("orders cannot be sorted by `{}`: the dataset has no totals", query.sort_field);
    }
    let list = OrderList::with_query(book, query);
    let visible = list.visible_orders();
    tracing::debug!(matched = visible.len(), total = list.book().len(), "derived order view");
    Ok(render_orders(&visible, args.format))
}
