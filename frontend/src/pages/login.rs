use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    i18n::current::login_page as t,
    router::Route,
    session_context::{SessionAction, SessionContext, SessionState},
};

/// Public entry point. Signed-in users go straight to the dashboard.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_context::<SessionContext>();

    let on_sign_in = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            // With a real provider the browser leaves the app here.
            if let Some(user) = api::sign_in() {
                if let Some(session) = session.as_ref() {
                    session.dispatch(SessionAction::Resolved(Some(user)));
                }
            }
        })
    };

    match session.as_deref() {
        Some(SessionState::SignedIn(_)) => {
            return html! { <Redirect<Route> to={Route::Dashboard} /> };
        },
        Some(SessionState::Loading) => {
            return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen=true /> };
        },
        Some(SessionState::SignedOut) | None => {},
    }

    html! {
        <main class="flex min-h-screen items-center justify-center bg-orange-50">
            <div class="w-full max-w-sm rounded-2xl bg-white p-8 text-center shadow-lg">
                <p class="mb-4 text-5xl" aria-hidden="true">{ "🍕" }</p>
                <h1 class="mb-2 text-2xl font-bold">{ t::TITLE }</h1>
                <p class="mb-6 text-gray-500">{ t::SUBTITLE }</p>
                <button
                    type="button"
                    class={classes!(
                        "w-full",
                        "rounded-lg",
                        "bg-orange-500",
                        "px-4",
                        "py-2",
                        "font-semibold",
                        "text-white",
                        "hover:bg-orange-600"
                    )}
                    onclick={on_sign_in}
                >
                    { t::SIGN_IN }
                </button>
            </div>
        </main>
    }
}
