//! Pizzafy dashboard API server.

mod config;
mod error;
mod handlers;
mod routes;
mod session;
mod state;

use anyhow::{Context, Result};
use pizzafy_shared::source::load_or_sample;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Default to info-level logs; override via RUST_LOG if needed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::ServerConfig::from_env()?;
    tracing::info!("Starting Pizzafy backend server");

    let book = load_or_sample(config.orders_file.as_deref()).context("failed to load orders")?;
    let app_state = state::AppState::new(book, &config.login_url);
    tracing::info!("Serving {} orders", app_state.order_count());

    let app = routes::create_router(app_state, config.cors_allow_origin.as_deref());

    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
