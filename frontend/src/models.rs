// =============== Mock 数据 ===============

use pizzafy_shared::{sample::sample_orders, Order, UserSession};
use web_sys::window;

const MOCK_SIGNED_OUT_KEY: &str = "pizzafy:mock:signed_out";

/// 内置的 8 条示例订单。
pub fn mock_orders() -> Vec<Order> {
    sample_orders()
}

/// 演示用户；在本标签页中点过 "Sign out" 之后返回 `None`。
pub fn mock_session() -> Option<UserSession> {
    if is_mock_signed_out() {
        return None;
    }
    Some(UserSession {
        name: "Demo User".to_string(),
        email: "demo@pizzafy.dev".to_string(),
        image: None,
    })
}

fn is_mock_signed_out() -> bool {
    window()
        .and_then(|win| win.session_storage().ok().flatten())
        .and_then(|storage| storage.get_item(MOCK_SIGNED_OUT_KEY).ok().flatten())
        .is_some()
}

/// 记录 mock 登录状态（仅当前标签页）。
pub fn set_mock_signed_in(signed_in: bool) {
    if let Some(storage) = window().and_then(|win| win.session_storage().ok().flatten()) {
        let _ = if signed_in {
            storage.remove_item(MOCK_SIGNED_OUT_KEY)
        } else {
            storage.set_item(MOCK_SIGNED_OUT_KEY, "1")
        };
    }
}
