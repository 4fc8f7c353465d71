//! Keep-alive HTTP endpoint for hosts that probe the process over HTTP.

use axum::{routing::get, Router};
use tracing::info;

use crate::core::Result;

pub const KEEPALIVE_BODY: &str = "Bot is running!";

async fn alive() -> &'static str {
    KEEPALIVE_BODY
}

/// `GET /` → 200 [`KEEPALIVE_BODY`].
pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

/// Binds `0.0.0.0:<port>` and serves [`router`] until the task is dropped.
pub async fn serve(port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Keep-alive endpoint listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
