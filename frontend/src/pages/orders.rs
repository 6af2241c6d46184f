use pizzafy_shared::{
    format_money,
    order::display_order_date,
    Order,
    OrderStatus,
    SortField,
    StatusFilter,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{
    components::{
        error_banner::ErrorBanner,
        loading_spinner::LoadingSpinner,
        sort_header::SortHeader,
        status_badge::StatusBadge,
    },
    hooks::{use_order_book, use_order_list, OrderListAction, OrdersLoad},
    i18n::{current::orders_page as t, fill_one},
};

fn column_label(field: SortField) -> &'static str {
    match field {
        SortField::Id => t::COL_ID,
        SortField::CustomerName => t::COL_CUSTOMER,
        SortField::PizzaType => t::COL_PIZZA,
        SortField::Quantity => t::COL_QUANTITY,
        SortField::OrderDate => t::COL_DATE,
        SortField::Total => t::COL_TOTAL,
        SortField::Status => t::COL_STATUS,
    }
}

fn cell(order: &Order, field: SortField) -> Html {
    match field {
        SortField::Id => html! { <span class="font-mono">{ order.id.clone() }</span> },
        SortField::CustomerName => html! { { order.customer_name.clone() } },
        SortField::PizzaType => html! { { order.pizza_type.clone() } },
        SortField::Quantity => html! { { order.quantity.to_string() } },
        SortField::OrderDate => html! { { display_order_date(&order.order_date) } },
        SortField::Total => html! { { order.total.map(format_money).unwrap_or_default() } },
        SortField::Status => html! { <StatusBadge status={order.status} /> },
    }
}

/// Parse the status `<select>` value; the error text feeds a transient banner.
fn status_from_select(value: &str) -> Result<StatusFilter, String> {
    value
        .parse::<StatusFilter>()
        .map_err(|e| fill_one(t::STATUS_ERROR_TEMPLATE, e))
}

#[function_component(OrdersPage)]
pub fn orders_page() -> Html {
    let load = use_order_book();
    let view = use_order_list(&load);

    let on_search = {
        let view = view.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            view.dispatch(OrderListAction::Search(input.value()));
        })
    };

    let status_error = use_state(|| None::<String>);

    let on_status = {
        let view = view.clone();
        let status_error = status_error.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match status_from_select(&select.value()) {
                Ok(status) => view.dispatch(OrderListAction::Status(status)),
                Err(message) => status_error.set(Some(message)),
            }
        })
    };

    let clear_status_error = {
        let status_error = status_error.clone();
        Callback::from(move |()| status_error.set(None))
    };

    let on_toggle = {
        let view = view.clone();
        Callback::from(move |field: SortField| view.dispatch(OrderListAction::ToggleSort(field)))
    };

    let list = match (&load, view.0.as_ref()) {
        (OrdersLoad::Failed(message), _) => {
            return html! {
                <>
                    <h1 class="mb-6 text-3xl font-bold">{ t::TITLE }</h1>
                    <ErrorBanner message={message.clone()} />
                </>
            };
        },
        (_, Some(list)) => list,
        _ => return html! { <LoadingSpinner /> },
    };

    let query = list.query();
    let rows = list.visible_orders();
    let columns: Vec<SortField> = list.book().sortable_fields().collect();
    let active = (query.sort_field, query.sort_direction);
    let selected_status = query.status_filter.as_str();

    html! {
        <>
            <h1 class="mb-6 text-3xl font-bold">{ t::TITLE }</h1>
            if let Some(message) = (*status_error).clone() {
                <ErrorBanner {message} auto_dismiss=true on_close={clear_status_error} />
            }
            <div class="mb-4 flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                <input
                    type="search"
                    class="w-full rounded-lg border px-3 py-2 md:max-w-md"
                    placeholder={t::SEARCH_PLACEHOLDER}
                    aria-label={t::SEARCH_ARIA}
                    value={query.search_term.clone()}
                    oninput={on_search}
                />
                <select
                    class="rounded-lg border px-3 py-2"
                    aria-label={t::STATUS_ARIA}
                    onchange={on_status}
                >
                    <option
                        value={StatusFilter::ALL_SENTINEL}
                        selected={selected_status == StatusFilter::ALL_SENTINEL}
                    >
                        { t::ALL_STATUSES }
                    </option>
                    { for OrderStatus::ALL.iter().map(|status| html! {
                        <option value={status.label()} selected={selected_status == status.label()}>
                            { status.label() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="overflow-x-auto rounded-xl bg-white shadow-sm">
                <table class="min-w-full text-sm">
                    <thead class="border-b bg-gray-50">
                        <tr>
                            { for columns.iter().map(|field| html! {
                                <SortHeader
                                    field={*field}
                                    label={column_label(*field)}
                                    {active}
                                    on_toggle={on_toggle.clone()}
                                />
                            }) }
                        </tr>
                    </thead>
                    <tbody class="divide-y">
                        if rows.is_empty() {
                            <tr>
                                <td colspan={columns.len().to_string()} class="px-4 py-8 text-center text-gray-500">
                                    { t::EMPTY }
                                </td>
                            </tr>
                        } else {
                            { for rows.iter().map(|order| html! {
                                <tr key={order.id.clone()} class="hover:bg-gray-50">
                                    { for columns.iter().map(|field| html! {
                                        <td class="px-4 py-3">{ cell(order, *field) }</td>
                                    }) }
                                </tr>
                            }) }
                        }
                    </tbody>
                </table>
            </div>
            <p class="mt-4 text-sm text-gray-500">{ fill_one(t::TOTAL_TEMPLATE, rows.len()) }</p>
        </>
    }
}
