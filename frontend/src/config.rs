//! Configuration for the frontend application

/// Backend API root, same origin as the app behind the OAuth proxy.
/// Override at build time with `PIZZAFY_API_BASE`.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("PIZZAFY_API_BASE") {
    Some(url) => url,
    None => "/api",
};

/// Identity provider sign-in entry point (OAuth proxy). Returns to the
/// dashboard afterwards.
#[cfg(not(feature = "mock"))]
pub const SIGN_IN_URL: &str = match option_env!("PIZZAFY_SIGN_IN_URL") {
    Some(url) => url,
    None => "/oauth2/start?rd=/dashboard",
};

/// Identity provider sign-out endpoint. Returns to the login page
/// afterwards.
#[cfg(not(feature = "mock"))]
pub const SIGN_OUT_URL: &str = match option_env!("PIZZAFY_SIGN_OUT_URL") {
    Some(url) => url,
    None => "/oauth2/sign_out?rd=/login",
};

/// Number of orders in the dashboard's "Recent Orders" card.
pub const RECENT_ORDERS_LIMIT: usize = 3;

#[cfg(all(test, not(feature = "mock")))]
mod tests {
    use super::*;

    #[test]
    fn api_base_defaults_to_same_origin() {
        if option_env!("PIZZAFY_API_BASE").is_none() {
            assert_eq!(API_BASE, "/api");
        }
    }
}
