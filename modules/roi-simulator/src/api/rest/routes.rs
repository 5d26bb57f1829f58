//! Route table and router assembly.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::config::{build_cors_layer, CorsConfig};
use crate::domain::service::Service;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Service>,
}

/// Assemble the full router: API routes nested under `/api`, CORS and
/// request tracing layered on top.
pub fn router(service: Arc<Service>, cors: &CorsConfig) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/simulate", post(handlers::simulate))
        .route(
            "/scenarios",
            post(handlers::create_scenario).get(handlers::list_scenarios),
        )
        .route(
            "/scenarios/{id}",
            get(handlers::get_scenario).delete(handlers::delete_scenario),
        )
        .route("/report/generate", post(handlers::generate_report));

    Router::new()
        .nest("/api", api)
        .layer(build_cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}
