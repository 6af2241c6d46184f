use pizzafy_shared::OrderStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: OrderStatus,
}

fn palette(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "bg-yellow-100 text-yellow-800",
        OrderStatus::Preparing => "bg-blue-100 text-blue-800",
        OrderStatus::OutForDelivery => "bg-purple-100 text-purple-800",
        OrderStatus::Delivered => "bg-green-100 text-green-800",
        OrderStatus::Cancelled => "bg-red-100 text-red-800",
    }
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={classes!(
            "inline-flex",
            "rounded-full",
            "px-2.5",
            "py-0.5",
            "text-xs",
            "font-medium",
            palette(props.status)
        )}>
            { props.status.label() }
        </span>
    }
}
