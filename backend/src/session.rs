//! Identity handed over by the OAuth proxy in front of the service.
//!
//! The proxy authenticates the user and forwards who they are in request
//! headers; this service never sees credentials. A request without the
//! email header has no session.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use pizzafy_shared::UserSession;

use crate::{error::ApiError, state::AppState};

/// Verified email; its absence means no session.
pub const EMAIL_HEADER: &str = "x-forwarded-email";
/// Provider user id, used as the name when it is not the email.
pub const USER_HEADER: &str = "x-forwarded-user";
/// Preferred display name.
pub const PREFERRED_USERNAME_HEADER: &str = "x-forwarded-preferred-username";
/// Optional avatar URL.
pub const AVATAR_HEADER: &str = "x-forwarded-avatar";

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

/// Build the session from the proxy headers, `None` without an email.
pub fn session_from_headers(headers: &HeaderMap) -> Option<UserSession> {
    let email = header_value(headers, EMAIL_HEADER)?;
    let name = header_value(headers, PREFERRED_USERNAME_HEADER)
        .or_else(|| header_value(headers, USER_HEADER).filter(|user| *user != email))
        .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

    Some(UserSession {
        name,
        email,
        image: header_value(headers, AVATAR_HEADER),
    })
}

/// Extractor for routes that require a signed-in user.
pub struct CurrentUser(pub UserSession);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        session_from_headers(&parts.headers)
            .map(CurrentUser)
            .ok_or_else(|| ApiError::Unauthorized {
                login_url: state.login_url().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn no_email_means_no_session() {
        assert_eq!(session_from_headers(&headers(&[(USER_HEADER, "jane")])), None);
        assert_eq!(session_from_headers(&headers(&[(EMAIL_HEADER, "  ")])), None);
    }

    #[test]
    fn preferred_username_wins() {
        let session = session_from_headers(&headers(&[
            (EMAIL_HEADER, "jane@example.com"),
            (USER_HEADER, "108234"),
            (PREFERRED_USERNAME_HEADER, "Jane Smith"),
            (AVATAR_HEADER, "https://example.com/jane.png"),
        ]))
        .expect("session");
        assert_eq!(session.name, "Jane Smith");
        assert_eq!(session.image.as_deref(), Some("https://example.com/jane.png"));
    }

    #[test]
    fn name_falls_back_to_email_local_part() {
        let session = session_from_headers(&headers(&[
            (EMAIL_HEADER, "jane@example.com"),
            (USER_HEADER, "jane@example.com"),
        ]))
        .expect("session");
        assert_eq!(session.name, "jane");
        assert_eq!(session.image, None);
    }
}
