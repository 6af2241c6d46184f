use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub icon: AttrValue,
    pub label: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub route: Option<Route>,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    let content = html! {
        <>
            <span class="stats-card-icon text-2xl" aria-hidden="true">{ props.icon.clone() }</span>
            <div class="flex flex-col">
                <span class="text-sm text-gray-500">{ props.label.clone() }</span>
                <strong class="stats-card-value text-2xl">{ props.value.clone() }</strong>
            </div>
        </>
    };
    let classes = classes!(
        "stats-card",
        "flex",
        "items-center",
        "gap-4",
        "rounded-xl",
        "bg-white",
        "p-5",
        "shadow-sm"
    );

    if let Some(route) = &props.route {
        html! {
            <Link<Route> to={route.clone()} classes={classes}>
                { content }
            </Link<Route>>
        }
    } else {
        html! {
            <div class={classes} role="status">
                { content }
            </div>
        }
    }
}
