//! Pizzafy dashboard: a Yew single-page app over the order API.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;
mod session_context;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
