use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tally_commerce::PurchaseRequest;
use tally_types::{RecordId, Transaction};

use super::{ApiResult, AppState};
use crate::envelope::Reply;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route("/transactions/:id", get(get_transaction))
}

async fn list_transactions(State(state): State<AppState>) -> ApiResult<Vec<Transaction>> {
    Ok(Reply::ok(
        "Transactions retrieved successfully",
        state.commerce.transactions(),
    ))
}

async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> ApiResult<Transaction> {
    let tx = state.commerce.transaction(&id)?;
    Ok(Reply::ok("Transaction retrieved successfully", tx))
}

/// Purchase: `{product_id, quantity}`. Any client-supplied `id` or `total`
/// is ignored.
async fn create_transaction(
    State(state): State<AppState>,
    body: Result<Json<PurchaseRequest>, JsonRejection>,
) -> ApiResult<Transaction> {
    let Json(request) = body?;
    let tx = state.commerce.purchase(&request)?;
    Ok(Reply::created("Transaction created successfully", tx))
}
