//! The order list view-model: query state plus the derived, visible rows.

use std::cmp::Ordering;

use crate::{
    book::OrderBook,
    order::Order,
    query::{OrderQuery, SortDirection, SortField, StatusFilter},
};

/// Compare text case-insensitively, falling back to the raw bytes so that
/// strings differing only in case still have a fixed order.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn matches_search(order: &Order, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    [&order.id, &order.customer_name, &order.pizza_type]
        .into_iter()
        .any(|text| text.to_lowercase().contains(needle))
}

fn compare_orders(
    book: &OrderBook,
    field: SortField,
    (left_index, left): (usize, &Order),
    (right_index, right): (usize, &Order),
) -> Ordering {
    match field {
        SortField::Id => compare_text(&left.id, &right.id),
        SortField::CustomerName => compare_text(&left.customer_name, &right.customer_name),
        SortField::PizzaType => compare_text(&left.pizza_type, &right.pizza_type),
        SortField::Status => compare_text(left.status.label(), right.status.label()),
        SortField::Quantity => left.quantity.cmp(&right.quantity),
        SortField::OrderDate => book.placed_at(left_index).cmp(&book.placed_at(right_index)),
        // OrderBook guarantees totals are all present when the field is supported.
        SortField::Total => left
            .total
            .unwrap_or_default()
            .total_cmp(&right.total.unwrap_or_default()),
    }
}

/// Derive the rows to display: orders passing both the search and status
/// filters, sorted by the query's field and direction.
///
/// The sort is stable, so orders with equal keys keep their collection
/// order in either direction. The result borrows from `book` and is
/// recomputed from scratch on every call.
///
/// # Panics
///
/// When `query.sort_field` is not an attribute of every order in `book`
/// (sorting by total on a dataset without totals).
pub fn visible_orders<'a>(book: &'a OrderBook, query: &OrderQuery) -> Vec<&'a Order> {
    assert!(
        book.supports(query.sort_field),
        "cannot sort by `{}`: not every order carries it",
        query.sort_field
    );

    let needle = query.search_needle();
    let mut rows: Vec<(usize, &Order)> = book
        .orders()
        .iter()
        .enumerate()
        .filter(|(_, order)| {
            matches_search(order, needle.as_deref()) && query.status_filter.matches(order.status)
        })
        .collect();

    rows.sort_by(|left, right| {
        let ordering = compare_orders(book, query.sort_field, *left, *right);
        match query.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    rows.into_iter().map(|(_, order)| order).collect()
}

/// An order book together with the viewer's current query.
///
/// The mutators only touch the query; the book is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderList {
    book: OrderBook,
    query: OrderQuery,
}

impl OrderList {
    /// Start from the default query (newest first, unfiltered).
    pub fn new(book: OrderBook) -> Self {
        Self::with_query(book, OrderQuery::default())
    }

    /// Start from an explicit query.
    ///
    /// # Panics
    ///
    /// When the query sorts by a field the book does not carry.
    pub fn with_query(book: OrderBook, query: OrderQuery) -> Self {
        assert!(book.supports(query.sort_field), "unsupported sort field `{}`", query.sort_field);
        Self {
            book,
            query,
        }
    }

    /// The underlying collection.
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// The current query state.
    pub fn query(&self) -> &OrderQuery {
        &self.query
    }

    /// Replace the search term. Empty text clears the search.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.query.search_term = text.into();
    }

    /// Replace the status filter.
    pub fn set_status_filter(&mut self, status: impl Into<StatusFilter>) {
        self.query.status_filter = status.into();
    }

    /// Flip the direction when `field` is already the sort field, otherwise
    /// sort ascending by `field`.
    ///
    /// # Panics
    ///
    /// When `field` is not an attribute of every order in the book.
    pub fn toggle_sort(&mut self, field: SortField) {
        assert!(self.book.supports(field), "unsupported sort field `{field}`");
        self.query.toggle_sort(field);
    }

    /// Rows to display for the current query.
    pub fn visible_orders(&self) -> Vec<&Order> {
        visible_orders(&self.book, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{order::OrderStatus, sample::sample_orders};

    fn sample_list() -> OrderList {
        OrderList::new(OrderBook::new(sample_orders()).expect("sample orders are valid"))
    }

    fn ids(rows: &[&Order]) -> Vec<String> {
        rows.iter().map(|order| order.id.clone()).collect()
    }

    fn all_queries(book: &OrderBook) -> Vec<OrderQuery> {
        let terms = ["", "pza00", "margherita", "A", "veggie ", " supreme", "\t", "zzz-no-match"];
        let filters = std::iter::once(StatusFilter::All)
            .chain(OrderStatus::ALL.into_iter().map(StatusFilter::Only))
            .collect::<Vec<_>>();
        let mut queries = Vec::new();
        for term in terms {
            for filter in &filters {
                for field in book.sortable_fields() {
                    for direction in [SortDirection::Ascending, SortDirection::Descending] {
                        queries.push(OrderQuery {
                            search_term: term.to_string(),
                            status_filter: *filter,
                            sort_field: field,
                            sort_direction: direction,
                        });
                    }
                }
            }
        }
        queries
    }

    #[test]
    fn default_view_is_newest_first() {
        let list = sample_list();
        assert_eq!(
            ids(&list.visible_orders()),
            ["PZA008", "PZA007", "PZA006", "PZA005", "PZA004", "PZA003", "PZA002", "PZA001"]
        );
    }

    #[test]
    fn delivered_filter_keeps_exactly_delivered_orders() {
        let mut list = sample_list();
        list.set_status_filter(OrderStatus::Delivered);
        list.toggle_sort(SortField::Id);
        assert_eq!(ids(&list.visible_orders()), ["PZA001", "PZA005"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut list = sample_list();
        list.set_search_term("margherita");
        let rows = list.visible_orders();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|order| order.pizza_type == "Margherita"));
    }

    #[test]
    fn search_covers_id_and_customer() {
        let mut list = sample_list();
        list.set_search_term("pza003");
        assert_eq!(ids(&list.visible_orders()), ["PZA003"]);
        list.set_search_term("TOM");
        assert_eq!(ids(&list.visible_orders()), ["PZA005"]);
    }

    #[test]
    fn unmatched_search_is_an_empty_view() {
        let mut list = sample_list();
        list.set_search_term("zzz-no-match");
        assert!(list.visible_orders().is_empty());
    }

    #[test]
    fn search_and_status_must_both_hold() {
        let mut list = sample_list();
        list.set_search_term("veggie");
        list.set_status_filter(OrderStatus::OutForDelivery);
        list.toggle_sort(SortField::Id);
        assert_eq!(ids(&list.visible_orders()), ["PZA003", "PZA008"]);
        list.set_status_filter(OrderStatus::Delivered);
        assert!(list.visible_orders().is_empty());
    }

    #[test]
    fn toggling_total_twice_restores_direction_and_reverses_rows() {
        let mut list = sample_list();
        list.toggle_sort(SortField::Total);
        assert_eq!(list.query().sort_direction, SortDirection::Ascending);
        let ascending = ids(&list.visible_orders());
        assert_eq!(ascending.first().map(String::as_str), Some("PZA002"));
        assert_eq!(ascending.last().map(String::as_str), Some("PZA007"));

        list.toggle_sort(SortField::Total);
        assert_eq!(list.query().sort_direction, SortDirection::Descending);
        let mut descending = ids(&list.visible_orders());
        descending.reverse();
        assert_eq!(descending, ascending);

        list.toggle_sort(SortField::Total);
        assert_eq!(list.query().sort_direction, SortDirection::Ascending);
        assert_eq!(list.query().sort_field, SortField::Total);
    }

    #[test]
    fn ties_keep_collection_order_in_both_directions() {
        let mut list = sample_list();
        list.toggle_sort(SortField::PizzaType);
        let ascending = ids(&list.visible_orders());
        let margheritas: Vec<_> =
            ascending.iter().filter(|id| *id == "PZA001" || *id == "PZA007").collect();
        assert_eq!(margheritas, ["PZA001", "PZA007"]);

        list.toggle_sort(SortField::PizzaType);
        let descending = ids(&list.visible_orders());
        let margheritas: Vec<_> =
            descending.iter().filter(|id| *id == "PZA001" || *id == "PZA007").collect();
        assert_eq!(margheritas, ["PZA001", "PZA007"]);
    }

    #[test]
    fn strings_differing_only_in_case_have_a_fixed_order() {
        assert_eq!(compare_text("alice", "Bob"), Ordering::Less);
        assert_eq!(compare_text("Alice", "alice"), Ordering::Less);
        assert_eq!(compare_text("alice", "Alice"), Ordering::Greater);
        assert_eq!(compare_text("alice", "alice"), Ordering::Equal);
    }

    #[test]
    fn status_sorts_by_label() {
        let mut list = sample_list();
        list.toggle_sort(SortField::Status);
        let statuses: Vec<_> = list.visible_orders().iter().map(|order| order.status).collect();
        assert_eq!(statuses.first(), Some(&OrderStatus::Cancelled));
        assert_eq!(statuses.last(), Some(&OrderStatus::Preparing));
    }

    #[test]
    fn every_view_is_a_filtered_sorted_subset() {
        let book = OrderBook::new(sample_orders()).expect("valid");
        for query in all_queries(&book) {
            let rows = visible_orders(&book, &query);
            assert!(rows.len() <= book.len());

            let needle = query.search_needle();
            for order in &rows {
                assert!(book.orders().iter().any(|candidate| candidate == *order));
                assert!(matches_search(order, needle.as_deref()), "{query:?}");
                assert!(query.status_filter.matches(order.status), "{query:?}");
            }

            let index_of = |order: &Order| {
                book.orders().iter().position(|candidate| candidate.id == order.id).unwrap_or(0)
            };
            for pair in rows.windows(2) {
                let ordering = compare_orders(
                    &book,
                    query.sort_field,
                    (index_of(pair[0]), pair[0]),
                    (index_of(pair[1]), pair[1]),
                );
                match query.sort_direction {
                    SortDirection::Ascending => assert_ne!(ordering, Ordering::Greater),
                    SortDirection::Descending => assert_ne!(ordering, Ordering::Less),
                }
            }

            assert_eq!(rows, visible_orders(&book, &query), "derivation is idempotent");
        }
    }

    #[test]
    fn search_matches_the_raw_term_as_a_substring() {
        let mut list = sample_list();
        list.toggle_sort(SortField::Id);

        list.set_search_term("doe ");
        assert!(list.visible_orders().is_empty(), "\"doe \" is not a substring of \"john doe\"");

        list.set_search_term("Veggie ");
        assert_eq!(ids(&list.visible_orders()), ["PZA003", "PZA008"]);

        list.set_search_term("\t");
        assert!(list.visible_orders().is_empty());

        // Every customer name contains a space.
        list.set_search_term(" ");
        assert_eq!(list.visible_orders().len(), 8);

        list.set_search_term("");
        assert_eq!(list.visible_orders().len(), 8);
    }

    #[test]
    fn book_is_untouched_by_query_changes() {
        let mut list = sample_list();
        let before = list.book().clone();
        list.set_search_term("pepperoni");
        list.set_status_filter(StatusFilter::Only(OrderStatus::Preparing));
        list.toggle_sort(SortField::Quantity);
        let _ = list.visible_orders();
        assert_eq!(list.book(), &before);
    }

    #[test]
    #[should_panic(expected = "unsupported sort field")]
    fn sorting_by_missing_total_fails_fast() {
        let mut orders = sample_orders();
        for order in &mut orders {
            order.total = None;
        }
        let mut list = OrderList::new(OrderBook::new(orders).expect("valid without totals"));
        list.toggle_sort(SortField::Total);
    }
}
