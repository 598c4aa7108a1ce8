//! HTTP API over the same use cases the CLI drives.

mod error;
mod handlers;

pub use error::*;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::api::Container;

pub fn build_router(container: Arc<Container>) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    axum::Router::new()
        .route("/search", get(handlers::search))
        .route("/api/search-email", post(handlers::search_email))
        .route("/api/find-email", post(handlers::find_email))
        .route("/api/scrape", post(handlers::scrape))
        .route("/api/profiles", get(handlers::list_profiles))
        .route("/api/profiles/export", get(handlers::export_profiles))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}

pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let app = build_router(container);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
