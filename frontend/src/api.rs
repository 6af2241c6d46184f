#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
use pizzafy_shared::{Order, UserSession};
#[cfg(not(feature = "mock"))]
use serde::Deserialize;

#[cfg(not(feature = "mock"))]
use crate::config::{API_BASE, SIGN_IN_URL, SIGN_OUT_URL};
#[cfg(feature = "mock")]
use crate::models;

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct OrderListResponse {
    orders: Vec<Order>,
}

#[cfg(not(feature = "mock"))]
async fn get(path: &str) -> Result<gloo_net::http::Response, String> {
    Request::get(&format!("{}{}", API_BASE, path))
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))
}

/// 当前登录会话；未登录时返回 `Ok(None)`
pub async fn fetch_session() -> Result<Option<UserSession>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_session());
    }

    #[cfg(not(feature = "mock"))]
    {
        let response = get("/session").await?;
        if response.status() == 401 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }
        response
            .json::<UserSession>()
            .await
            .map(Some)
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}

/// 完整订单集合（数据集原始顺序）
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_orders());
    }

    #[cfg(not(feature = "mock"))]
    {
        let response = get("/orders").await?;
        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }
        let json_response: OrderListResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;
        Ok(json_response.orders)
    }
}

#[cfg(not(feature = "mock"))]
fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(url) {
            web_sys::console::error_1(&err);
        }
    }
}

/// Hand the user to the identity provider. Returns the session to use
/// immediately, if any; with a real provider the page navigates away.
pub fn sign_in() -> Option<UserSession> {
    #[cfg(feature = "mock")]
    {
        models::set_mock_signed_in(true);
        return models::mock_session();
    }

    #[cfg(not(feature = "mock"))]
    {
        redirect_to(SIGN_IN_URL);
        None
    }
}

/// End the session at the identity provider.
pub fn sign_out() {
    #[cfg(feature = "mock")]
    {
        models::set_mock_signed_in(false);
    }

    #[cfg(not(feature = "mock"))]
    {
        redirect_to(SIGN_OUT_URL);
    }
}
