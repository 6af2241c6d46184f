use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{auth_guard::AuthGuard, sidebar::DashboardLayout},
    pages,
    session_context::SessionProvider,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,

    #[at("/login")]
    Login,

    #[at("/dashboard")]
    Dashboard,

    #[at("/dashboard/orders")]
    Orders,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn protected(page: Html) -> Html {
    html! {
        <AuthGuard>
            <DashboardLayout>
                { page }
            </DashboardLayout>
        </AuthGuard>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::Dashboard => protected(html! { <pages::dashboard::DashboardPage /> }),
        Route::Orders => protected(html! { <pages::orders::OrdersPage /> }),
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}
