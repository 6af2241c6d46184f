//! Loading an order collection from a JSON file.

use std::{fs, path::Path};

use crate::{book::OrderBook, error::OrderDataError, order::Order, sample::sample_orders};

/// Read a JSON array of orders from `path` and validate it into a book.
pub fn load_order_book(path: &Path) -> Result<OrderBook, OrderDataError> {
    let raw = fs::read_to_string(path)
        .map_err(|err| OrderDataError::Load(format!("{}: {err}", path.display())))?;
    let orders: Vec<Order> = serde_json::from_str(&raw)
        .map_err(|err| OrderDataError::Load(format!("{}: {err}", path.display())))?;
    let book = OrderBook::new(orders).inspect_err(|err| {
        tracing::warn!(path = %path.display(), "rejected order dataset: {err}");
    })?;
    tracing::info!(path = %path.display(), orders = book.len(), "loaded order dataset");
    Ok(book)
}

/// Book from `path` when given, otherwise the built-in sample dataset.
pub fn load_or_sample(path: Option<&Path>) -> Result<OrderBook, OrderDataError> {
    match path {
        Some(path) => load_order_book(path),
        None => {
            let book = OrderBook::new(sample_orders())?;
            tracing::info!(orders = book.len(), "using built-in sample orders");
            Ok(book)
        },
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn loads_valid_file() {
        let mut file = NamedTempFile::new().expect("create temp file");
        let json = serde_json::to_string(&sample_orders()).expect("serialize sample");
        file.write_all(json.as_bytes()).expect("write orders");

        let book = load_order_book(file.path()).expect("load orders");
        assert_eq!(book.len(), 8);
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"{not json").expect("write");
        assert!(matches!(load_order_book(file.path()), Err(OrderDataError::Load(_))));
    }

    #[test]
    fn invalid_records_are_rejected() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(
            br#"[{"id":"A","customerName":"x","pizzaType":"y","quantity":1,
                 "orderDate":"not a date","status":"Pending"}]"#,
        )
        .expect("write");
        assert!(matches!(
            load_order_book(file.path()),
            Err(OrderDataError::InvalidOrderDate { .. })
        ));
    }

    #[test]
    fn missing_path_falls_back_to_sample() {
        let book = load_or_sample(None).expect("sample");
        assert_eq!(book.len(), 8);
    }
}
