use pizzafy_shared::UserSession;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    i18n::current::{common, sidebar as t},
    router::Route,
    session_context::{SessionAction, SessionContext},
};

#[derive(Properties, PartialEq)]
struct NavItemProps {
    to: Route,
    icon: &'static str,
    label: &'static str,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let current = use_route::<Route>();
    let is_active = current.as_ref() == Some(&props.to);
    let classes = classes!(
        "flex",
        "items-center",
        "gap-3",
        "rounded-lg",
        "px-3",
        "py-2",
        if is_active { "bg-orange-100 text-orange-700" } else { "hover:bg-gray-100" }
    );

    html! {
        <Link<Route> to={props.to.clone()} {classes}>
            <span aria-hidden="true">{ props.icon }</span>
            <span>{ props.label }</span>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
struct UserCardProps {
    user: UserSession,
}

#[function_component(UserCard)]
fn user_card(props: &UserCardProps) -> Html {
    let user = &props.user;
    let avatar = match &user.image {
        Some(src) => html! {
            <img src={src.clone()} alt={user.display_name().to_string()} class="h-9 w-9 rounded-full" />
        },
        None => html! {
            <span class={classes!(
                "flex",
                "h-9",
                "w-9",
                "items-center",
                "justify-center",
                "rounded-full",
                "bg-orange-500",
                "text-sm",
                "font-semibold",
                "text-white"
            )}>
                { user.initials() }
            </span>
        },
    };

    html! {
        <div class="flex items-center gap-3">
            { avatar }
            <div class="min-w-0">
                <p class="truncate text-sm font-medium">{ user.display_name().to_string() }</p>
                <p class="truncate text-xs text-gray-500">{ user.email.clone() }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Sidebar navigation plus the signed-in user, wrapping a dashboard page.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let session = use_context::<SessionContext>();
    let user = session.as_ref().and_then(|s| s.user().cloned());

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            api::sign_out();
            if let Some(session) = session.as_ref() {
                session.dispatch(SessionAction::SignedOut);
            }
        })
    };

    html! {
        <div class="flex min-h-screen bg-gray-50">
            <aside class={classes!(
                "flex",
                "w-64",
                "shrink-0",
                "flex-col",
                "justify-between",
                "border-r",
                "bg-white",
                "p-4"
            )}>
                <div>
                    <p class="mb-6 px-3 text-xl font-bold text-orange-600">
                        { "🍕 " }{ common::APP_NAME }
                    </p>
                    <nav aria-label={t::NAV_ARIA} class="flex flex-col gap-1">
                        <NavItem to={Route::Dashboard} icon="📊" label={t::DASHBOARD} />
                        <NavItem to={Route::Orders} icon="🧾" label={t::ORDERS} />
                    </nav>
                </div>
                <div class="flex flex-col gap-3 border-t pt-4">
                    if let Some(user) = user {
                        <UserCard {user} />
                    }
                    <button
                        type="button"
                        class="rounded-lg px-3 py-2 text-left text-sm hover:bg-gray-100"
                        onclick={on_sign_out}
                    >
                        { t::SIGN_OUT }
                    </button>
                </div>
            </aside>
            <main class="flex-1 p-8">
                { props.children.clone() }
            </main>
        </div>
    }
}
