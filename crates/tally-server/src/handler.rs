use axum::extract::State;
use serde::Serialize;

use crate::api::AppState;
use crate::envelope::Reply;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub records: usize,
}

/// Health check handler.
pub async fn health_handler(State(state): State<AppState>) -> Reply<Health> {
    let commerce = state.commerce.counts();
    let social = state.social.counts();
    let records = commerce.sources
        + commerce.products
        + commerce.transactions
        + social.users
        + social.posts
        + social.likes;
    Reply::ok(
        "Service is healthy",
        Health {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            records,
        },
    )
}
