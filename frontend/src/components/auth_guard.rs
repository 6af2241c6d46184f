use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    router::Route,
    session_context::{SessionContext, SessionState},
};

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children only for a signed-in user; everyone else is sent to
/// the login page.
#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let session = use_context::<SessionContext>();

    match session.as_deref() {
        Some(SessionState::Loading) => {
            html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen=true /> }
        },
        Some(SessionState::SignedIn(_)) => html! { <>{ props.children.clone() }</> },
        Some(SessionState::SignedOut) | None => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
