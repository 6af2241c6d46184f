use std::rc::Rc;

use pizzafy_shared::UserSession;
use yew::prelude::*;

/// Authentication state as far as the UI knows it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// The session request has not answered yet.
    #[default]
    Loading,
    SignedOut,
    SignedIn(UserSession),
}

impl SessionState {
    pub fn user(&self) -> Option<&UserSession> {
        match self {
            SessionState::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

pub enum SessionAction {
    Resolved(Option<UserSession>),
    SignedOut,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SessionAction::Resolved(Some(user)) => SessionState::SignedIn(user),
            SessionAction::Resolved(None) | SessionAction::SignedOut => SessionState::SignedOut,
        };
        if *self == next {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Asks the backend for the current session once on mount. A failed request
/// is treated as signed out.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_session().await {
                    Ok(session) => state.dispatch(SessionAction::Resolved(session)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch session: {}", e).into(),
                        );
                        state.dispatch(SessionAction::Resolved(None));
                    },
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SessionContext> context={state}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
