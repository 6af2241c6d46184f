use pizzafy_shared::{format_money, order::display_order_date, recent_orders, DashboardStats};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        error_banner::ErrorBanner,
        loading_spinner::LoadingSpinner,
        stats_card::StatsCard,
        status_badge::StatusBadge,
    },
    config::RECENT_ORDERS_LIMIT,
    hooks::{use_order_book, OrdersLoad},
    i18n::{current::dashboard_page as t, fill_one},
    router::Route,
    session_context::SessionContext,
};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_context::<SessionContext>();
    let load = use_order_book();

    let greeting_name = session
        .as_ref()
        .and_then(|s| s.user().map(|user| user.greeting_name().to_string()))
        .unwrap_or_else(|| "User".to_string());

    let body = match &load {
        OrdersLoad::Loading => html! { <LoadingSpinner /> },
        OrdersLoad::Failed(message) => {
            html! { <ErrorBanner message={message.clone()} /> }
        },
        OrdersLoad::Ready(book) => {
            let stats = DashboardStats::from_book(book);
            let recent = recent_orders(book, RECENT_ORDERS_LIMIT);
            html! {
                <>
                    <section class="mb-8 grid grid-cols-1 gap-4 md:grid-cols-3">
                        <StatsCard
                            icon="🧾"
                            label={t::TOTAL_ORDERS}
                            value={stats.total_orders.to_string()}
                            route={Some(Route::Orders)}
                        />
                        <StatsCard icon="💰" label={t::REVENUE} value={format_money(stats.revenue)} />
                        <StatsCard icon="👥" label={t::CUSTOMERS} value={stats.customers.to_string()} />
                        <StatsCard
                            icon="📈"
                            label={t::AVG_ORDER_VALUE}
                            value={format_money(stats.average_order_value)}
                        />
                        <StatsCard icon="🍕" label={t::PIZZAS_SOLD} value={stats.pizzas_sold.to_string()} />
                        <StatsCard
                            icon="🛵"
                            label={t::ACTIVE_ORDERS}
                            value={stats.active_orders.to_string()}
                        />
                    </section>
                    <section class="rounded-xl bg-white p-6 shadow-sm">
                        <div class="mb-4 flex items-center justify-between">
                            <h2 class="text-lg font-semibold">{ t::RECENT_ORDERS }</h2>
                            <Link<Route> to={Route::Orders} classes={classes!("text-sm", "text-orange-600")}>
                                { t::VIEW_ALL }
                            </Link<Route>>
                        </div>
                        if recent.is_empty() {
                            <p class="text-gray-500">{ t::NO_ORDERS }</p>
                        } else {
                            <ul class="divide-y">
                                { for recent.iter().map(|order| html! {
                                    <li key={order.id.clone()} class="flex items-center justify-between py-3">
                                        <div>
                                            <p class="font-medium">
                                                { format!("{} · {}", order.pizza_type, order.customer_name) }
                                            </p>
                                            <p class="text-xs text-gray-500">
                                                { format!("{} · {}", order.id, display_order_date(&order.order_date)) }
                                            </p>
                                        </div>
                                        <StatusBadge status={order.status} />
                                    </li>
                                }) }
                            </ul>
                        }
                    </section>
                </>
            }
        },
    };

    html! {
        <>
            <header class="mb-8">
                <h1 class="text-3xl font-bold">{ fill_one(t::GREETING_TEMPLATE, greeting_name) }</h1>
                <p class="text-gray-500">{ t::SUBTITLE }</p>
            </header>
            { body }
        </>
    }
}
