use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::handler;

/// Build the axum router with every endpoint, traced per request.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .merge(api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
