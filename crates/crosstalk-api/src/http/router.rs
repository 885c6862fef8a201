//! Axum router configuration with middleware.
//!
//! Two routes: `POST /api/chat` (the relay) and `GET /health` (registry
//! diagnostics). Middleware: CORS, request tracing.

use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(handlers::chat::relay_chat))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health -- eligible-provider diagnostics for monitoring.
///
/// Reads only the registry's diagnostic counters; no provider is contacted.
async fn health_check(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    let eligible = state.registry.eligible_count();
    let total = state.registry.total();
    axum::Json(serde_json::json!({
        "status": if eligible > 0 { "ok" } else { "degraded" },
        "providers_eligible": eligible,
        "providers_total": total,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
