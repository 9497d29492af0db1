use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tally_commerce::SourceInput;
use tally_types::{RecordId, Source};

use super::{ApiResult, AppState};
use crate::envelope::Reply;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sources", get(list_sources).post(create_source))
        .route(
            "/sources/:id",
            get(get_source).put(update_source).delete(delete_source),
        )
}

async fn list_sources(State(state): State<AppState>) -> ApiResult<Vec<Source>> {
    Ok(Reply::ok("Sources retrieved successfully", state.commerce.sources()))
}

async fn get_source(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<Source> {
    let source = state.commerce.source(&id)?;
    Ok(Reply::ok("Source retrieved successfully", source))
}

async fn create_source(
    State(state): State<AppState>,
    body: Result<Json<SourceInput>, JsonRejection>,
) -> ApiResult<Source> {
    let Json(input) = body?;
    let source = state.commerce.create_source(input)?;
    Ok(Reply::created("Source created successfully", source))
}

async fn update_source(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    body: Result<Json<SourceInput>, JsonRejection>,
) -> ApiResult<Source> {
    let Json(input) = body?;
    let source = state.commerce.update_source(&id, input)?;
    Ok(Reply::ok("Source updated successfully", source))
}

async fn delete_source(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<()> {
    state.commerce.delete_source(&id)?;
    Ok(Reply::done("Source deleted successfully"))
}
