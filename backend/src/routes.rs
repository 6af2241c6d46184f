//! HTTP route table.

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, state::AppState};

fn cors_layer(allow_origin: Option<&str>) -> CorsLayer {
    let origin = match allow_origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => AllowOrigin::exact(value),
        Some(Err(err)) => {
            tracing::warn!("ignoring invalid CORS_ALLOW_ORIGIN ({err}), allowing any origin");
            AllowOrigin::from(Any)
        },
        None => AllowOrigin::from(Any),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the `/api` router with CORS and request tracing.
pub fn create_router(state: AppState, allow_origin: Option<&str>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/session", get(handlers::get_session))
        .route("/api/orders", get(handlers::list_orders))
        .route("/api/orders/view", get(handlers::view_orders))
        .route("/api/orders/recent", get(handlers::recent_orders))
        .route("/api/orders/:id", get(handlers::get_order))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
        .layer(cors_layer(allow_origin))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use pizzafy_shared::{sample::sample_orders, OrderBook};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::session::{EMAIL_HEADER, PREFERRED_USERNAME_HEADER};

    fn app() -> Router {
        let book = OrderBook::new(sample_orders()).expect("sample orders are valid");
        create_router(AppState::new(book, "/login"), None)
    }

    async fn send(uri: &str, signed_in: bool) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(uri);
        if signed_in {
            builder = builder
                .header(EMAIL_HEADER, "jane@example.com")
                .header(PREFERRED_USERNAME_HEADER, "Jane Smith");
        }
        let response = app()
            .oneshot(builder.body(Body::empty()).expect("build request"))
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn ids(body: &Value) -> Vec<&str> {
        body["orders"]
            .as_array()
            .map(|orders| orders.iter().filter_map(|order| order["id"].as_str()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn health_needs_no_session() {
        let (status, body) = send("/api/health", false).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["orders"], 8);
    }

    #[tokio::test]
    async fn session_reports_forwarded_identity() {
        let (status, body) = send("/api/session", true).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Jane Smith");
        assert_eq!(body["email"], "jane@example.com");
    }

    #[tokio::test]
    async fn missing_session_points_to_login() {
        for uri in ["/api/session", "/api/orders", "/api/orders/view", "/api/stats"] {
            let (status, body) = send(uri, false).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(body["code"], 401);
            assert_eq!(body["login_url"], "/login");
        }
    }

    #[tokio::test]
    async fn lists_full_collection_in_dataset_order() {
        let (status, body) = send("/api/orders", true).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 8);
        assert_eq!(ids(&body).first(), Some(&"PZA001"));
    }

    #[tokio::test]
    async fn view_defaults_to_newest_first() {
        let (status, body) = send("/api/orders/view", true).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body).first(), Some(&"PZA008"));
        assert_eq!(body["query"]["sort"], "orderDate");
        assert_eq!(body["query"]["dir"], "desc");
        assert_eq!(body["query"]["status"], "all");
    }

    #[tokio::test]
    async fn view_filters_by_status() {
        let (status, body) = send("/api/orders/view?status=Delivered&sort=id", true).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), ["PZA001", "PZA005"]);
        assert_eq!(body["query"]["dir"], "asc");
    }

    #[tokio::test]
    async fn view_search_is_case_insensitive() {
        let (_, body) = send("/api/orders/view?q=margherita&sort=total&dir=desc", true).await;
        assert_eq!(ids(&body), ["PZA007", "PZA001"]);
    }

    #[tokio::test]
    async fn empty_view_is_not_an_error() {
        let (status, body) = send("/api/orders/view?q=zzz-no-match", true).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
        assert!(ids(&body).is_empty());
    }

    #[tokio::test]
    async fn view_rejects_unknown_parameters() {
        for uri in [
            "/api/orders/view?sort=price",
            "/api/orders/view?status=delivered",
            "/api/orders/view?dir=sideways",
        ] {
            let (status, body) = send(uri, true).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["code"], 400);
        }
    }

    #[tokio::test]
    async fn recent_orders_default_to_three() {
        let (_, body) = send("/api/orders/recent", true).await;
        assert_eq!(ids(&body), ["PZA008", "PZA007", "PZA006"]);
        let (_, body) = send("/api/orders/recent?limit=500", true).await;
        assert_eq!(body["total"], 8);
    }

    #[tokio::test]
    async fn single_order_lookup() {
        let (status, body) = send("/api/orders/PZA003", true).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pizzaType"], "Veggie Supreme");
        assert_eq!(body["status"], "Out for Delivery");

        let (status, body) = send("/api/orders/PZA999", true).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn stats_aggregate_the_dataset() {
        let (status, body) = send("/api/stats", true).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_orders"], 8);
        assert_eq!(body["customers"], 8);
        assert_eq!(body["active_orders"], 5);
        assert_eq!(body["status_counts"].as_array().map(Vec::len), Some(5));
    }
}
