//! HTTP routes

pub mod health;
pub mod pages;

use std::path::Path;

use axum::{middleware, routing::get, Router};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::{security::security_headers_middleware, state::AppState};

/// Create all routes
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness));

    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route("/trains/json", get(pages::trains_json))
        .route("/trains/:train_number", get(pages::train))
        .route("/trains/:train_number/json", get(pages::train_json))
        .route("/trains/:train_number/_partial", get(pages::train_partial));

    Router::new()
        .merge(health_routes)
        .merge(page_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(pages::fallback)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
