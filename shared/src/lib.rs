//! Order model and view logic shared by the Pizzafy dashboard frontend,
//! backend and CLI.
//!
//! The order collection is immutable once an [`OrderBook`] has been built
//! from it. Everything the dashboard shows is derived from the book:
//! the orders table through [`OrderList`] / [`visible_orders`], the
//! overview cards through [`DashboardStats`].

pub mod book;
pub mod error;
pub mod order;
pub mod query;
pub mod sample;
pub mod session;
#[cfg(not(target_arch = "wasm32"))]
pub mod source;
pub mod stats;
pub mod view;

pub use book::OrderBook;
pub use error::{OrderDataError, QueryParseError};
pub use order::{Order, OrderStatus};
pub use query::{OrderQuery, SortDirection, SortField, StatusFilter};
pub use session::UserSession;
pub use stats::{format_money, recent_orders, DashboardStats, StatusCount};
pub use view::{visible_orders, OrderList};
