//! Shared request state.

use std::sync::Arc;

use pizzafy_shared::OrderBook;

/// Cloned into every handler; the order book is never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Immutable order collection, shared by every request
    book: Arc<OrderBook>,
    /// Login entry point returned with 401 responses
    login_url: Arc<str>,
}

impl AppState {
    /// Wrap a validated book for sharing across requests.
    pub fn new(book: OrderBook, login_url: &str) -> Self {
        Self {
            book: Arc::new(book),
            login_url: Arc::from(login_url),
        }
    }

    /// The order collection.
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Login entry point for clients without a session.
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Number of orders served.
    pub fn order_count(&self) -> usize {
        self.book.len()
    }
}
