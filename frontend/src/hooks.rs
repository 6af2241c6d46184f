use std::rc::Rc;

use pizzafy_shared::{OrderBook, OrderList, SortField, StatusFilter};
use yew::prelude::*;

/// Progress of the one-shot order fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum OrdersLoad {
    Loading,
    Ready(Rc<OrderBook>),
    Failed(String),
}

/// Fetch the order dataset once and validate it into an [`OrderBook`].
#[hook]
pub fn use_order_book() -> OrdersLoad {
    let load = use_state(|| OrdersLoad::Loading);

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let next = match crate::api::fetch_orders().await {
                    Ok(orders) => match OrderBook::new(orders) {
                        Ok(book) => OrdersLoad::Ready(Rc::new(book)),
                        Err(e) => OrdersLoad::Failed(e.to_string()),
                    },
                    Err(e) => OrdersLoad::Failed(e),
                };
                if let OrdersLoad::Failed(message) = &next {
                    web_sys::console::error_1(
                        &format!("Failed to load orders: {}", message).into(),
                    );
                }
                load.set(next);
            });
            || ()
        });
    }

    (*load).clone()
}

/// The orders table state: `None` until the book has arrived.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderListView(pub Option<OrderList>);

pub enum OrderListAction {
    Load(Rc<OrderBook>),
    Search(String),
    Status(StatusFilter),
    ToggleSort(SortField),
}

impl OrderListView {
    /// Apply `change` to a copy of the list; `change` returns false to keep
    /// the current state.
    fn updated(self: Rc<Self>, change: impl FnOnce(&mut OrderList) -> bool) -> Rc<Self> {
        let Some(mut list) = self.0.clone() else {
            return self;
        };
        if change(&mut list) {
            Rc::new(OrderListView(Some(list)))
        } else {
            self
        }
    }
}

impl Reducible for OrderListView {
    type Action = OrderListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            OrderListAction::Load(book) => {
                Rc::new(OrderListView(Some(OrderList::new((*book).clone()))))
            },
            OrderListAction::Search(text) => self.updated(|list| {
                list.set_search_term(text);
                true
            }),
            OrderListAction::Status(status) => self.updated(|list| {
                list.set_status_filter(status);
                true
            }),
            // Headers are only offered for supported columns.
            OrderListAction::ToggleSort(field) => self.updated(|list| {
                let supported = list.book().supports(field);
                if supported {
                    list.toggle_sort(field);
                }
                supported
            }),
        }
    }
}

/// Bind an [`OrderList`] to the fetched book; the query survives re-renders.
#[hook]
pub fn use_order_list(load: &OrdersLoad) -> UseReducerHandle<OrderListView> {
    let view = use_reducer(OrderListView::default);

    {
        let view = view.clone();
        let book = match load {
            OrdersLoad::Ready(book) => Some(book.clone()),
            _ => None,
        };
        use_effect_with(book, move |book| {
            if let Some(book) = book {
                view.dispatch(OrderListAction::Load(book.clone()));
            }
            || ()
        });
    }

    view
}

#[cfg(test)]
mod tests {
    use pizzafy_shared::{sample::sample_orders, OrderStatus, SortDirection};

    use super::*;

    fn loaded() -> Rc<OrderListView> {
        let book = Rc::new(OrderBook::new(sample_orders()).expect("sample orders are valid"));
        Rc::new(OrderListView::default()).reduce(OrderListAction::Load(book))
    }

    #[test]
    fn actions_before_load_are_ignored() {
        let empty = Rc::new(OrderListView::default());
        let next = empty.reduce(OrderListAction::Search("john".to_string()));
        assert_eq!(*next, OrderListView(None));
    }

    #[test]
    fn load_starts_from_the_default_query() {
        let view = loaded();
        let list = view.0.as_ref().expect("loaded");
        assert_eq!(list.query().sort_field, SortField::OrderDate);
        assert_eq!(list.query().sort_direction, SortDirection::Descending);
        assert_eq!(list.visible_orders().len(), 8);
    }

    #[test]
    fn actions_update_the_query() {
        let view = loaded()
            .reduce(OrderListAction::Status(OrderStatus::Delivered.into()))
            .reduce(OrderListAction::ToggleSort(SortField::CustomerName));
        let list = view.0.as_ref().expect("loaded");
        let ids: Vec<&str> = list.visible_orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["PZA001", "PZA005"]);
        assert_eq!(list.query().sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn unsupported_sort_is_a_no_op() {
        let mut orders = sample_orders();
        for order in &mut orders {
            order.total = None;
        }
        let book = Rc::new(OrderBook::new(orders).expect("valid without totals"));
        let view = Rc::new(OrderListView::default()).reduce(OrderListAction::Load(book));
        let next = view.clone().reduce(OrderListAction::ToggleSort(SortField::Total));
        assert!(Rc::ptr_eq(&view, &next));
    }
}
