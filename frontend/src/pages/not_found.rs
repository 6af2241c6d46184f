use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="flex min-h-screen flex-col items-center justify-center gap-4">
            <h2 class="text-3xl font-bold">{ t::TITLE }</h2>
            <p class="text-gray-500">{ t::BODY }</p>
            <Link<Route> to={Route::Dashboard} classes={classes!("text-orange-600", "underline")}>
                { t::BACK }
            </Link<Route>>
        </main>
    }
}
