//! Request handlers for the order API.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use pizzafy_shared::{
    recent_orders as newest_orders, visible_orders, DashboardStats, Order, OrderQuery,
    SortDirection, SortField, StatusFilter, UserSession,
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, session::CurrentUser, state::AppState};

const DEFAULT_RECENT_LIMIT: usize = 3;
const MAX_RECENT_LIMIT: usize = 50;

/// Liveness body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: &'static str,
    /// Orders loaded.
    pub orders: usize,
}

/// A list of orders with its length.
#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    /// Orders in response order.
    pub orders: Vec<Order>,
    /// `orders.len()`.
    pub total: usize,
}

/// Raw `/api/orders/view` query string; missing values take the default
/// query.
#[derive(Debug, Default, Deserialize)]
pub struct OrderViewParams {
    /// Search term.
    #[serde(default)]
    pub q: Option<String>,
    /// Status label or `all`.
    #[serde(default)]
    pub status: Option<String>,
    /// Sort field name.
    #[serde(default)]
    pub sort: Option<String>,
    /// `asc` or `desc`.
    #[serde(default)]
    pub dir: Option<String>,
}

/// Query echoed back in normalised form.
#[derive(Debug, Serialize)]
pub struct AppliedQuery {
    /// Search term as applied.
    pub q: String,
    /// Status filter as text.
    pub status: String,
    /// Sort field.
    pub sort: SortField,
    /// Sort direction.
    pub dir: SortDirection,
}

/// Visible orders for a query.
#[derive(Debug, Serialize)]
pub struct OrderViewResponse {
    /// Matching orders in display order.
    pub orders: Vec<Order>,
    /// Number of matching orders.
    pub total: usize,
    /// The query that produced them.
    pub query: AppliedQuery,
}

/// `/api/orders/recent` query string.
#[derive(Debug, Deserialize)]
pub struct RecentParams {
    /// How many orders, default 3, capped at 50.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl OrderViewParams {
    fn into_query(self) -> Result<OrderQuery, ApiError> {
        let bad_request = |err: pizzafy_shared::QueryParseError| ApiError::BadRequest(err.to_string());
        let defaults = OrderQuery::default();
        let sort_field = match self.sort.as_deref() {
            Some(raw) => raw.parse::<SortField>().map_err(bad_request)?,
            None => defaults.sort_field,
        };
        // A new sort column starts ascending, mirroring the table header toggle.
        let sort_direction = match self.dir.as_deref() {
            Some(raw) => raw.parse::<SortDirection>().map_err(bad_request)?,
            None if sort_field == defaults.sort_field => defaults.sort_direction,
            None => SortDirection::Ascending,
        };
        Ok(OrderQuery {
            search_term: self.q.unwrap_or_default(),
            status_filter: match self.status.as_deref() {
                Some(raw) => raw.parse::<StatusFilter>().map_err(bad_request)?,
                None => StatusFilter::All,
            },
            sort_field,
            sort_direction,
        })
    }
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        orders: state.order_count(),
    })
}

/// `GET /api/session`
pub async fn get_session(CurrentUser(session): CurrentUser) -> Json<UserSession> {
    Json(session)
}

/// `GET /api/orders`: the whole collection in dataset order.
pub async fn list_orders(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<OrderListResponse> {
    let orders = state.book().orders().to_vec();
    Json(OrderListResponse {
        total: orders.len(),
        orders,
    })
}

/// `GET /api/orders/view`: search, filter and sort.
pub async fn view_orders(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<OrderViewParams>,
) -> Result<Json<OrderViewResponse>, ApiError> {
    let query = params.into_query()?;
    if !state.book().supports(query.sort_field) {
        return Err(ApiError::BadRequest(format!(
            "orders cannot be sorted by `{}` in this dataset",
            query.sort_field
        )));
    }

    let orders: Vec<Order> = visible_orders(state.book(), &query).into_iter().cloned().collect();
    tracing::debug!(
        search = %query.search_term,
        status = %query.status_filter,
        sort = %query.sort_field,
        dir = query.sort_direction.as_str(),
        matched = orders.len(),
        "derived order view"
    );

    Ok(Json(OrderViewResponse {
        total: orders.len(),
        orders,
        query: AppliedQuery {
            q: query.search_term,
            status: query.status_filter.to_string(),
            sort: query.sort_field,
            dir: query.sort_direction,
        },
    }))
}

/// `GET /api/orders/recent`: newest first.
pub async fn recent_orders(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<RecentParams>,
) -> Json<OrderListResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT).min(MAX_RECENT_LIMIT);
    let orders: Vec<Order> = newest_orders(state.book(), limit).into_iter().cloned().collect();
    Json(OrderListResponse {
        total: orders.len(),
        orders,
    })
}

/// `GET /api/orders/:id`
pub async fn get_order(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    state
        .book()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// `GET /api/stats`
pub async fn get_stats(State(state): State<AppState>, _user: CurrentUser) -> Json<DashboardStats> {
    Json(DashboardStats::from_book(state.book()))
}
