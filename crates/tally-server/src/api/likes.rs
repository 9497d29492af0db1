use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tally_social::LikeInput;
use tally_types::{Like, RecordId};

use super::{ApiResult, AppState};
use crate::envelope::Reply;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/likes", get(list_likes).post(create_like))
        .route("/likes/:id", get(get_like).delete(delete_like))
}

async fn list_likes(State(state): State<AppState>) -> ApiResult<Vec<Like>> {
    Ok(Reply::ok("Likes retrieved successfully", state.social.likes()))
}

async fn get_like(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<Like> {
    let like = state.social.like(&id)?;
    Ok(Reply::ok("Like retrieved successfully", like))
}

async fn create_like(
    State(state): State<AppState>,
    body: Result<Json<LikeInput>, JsonRejection>,
) -> ApiResult<Like> {
    let Json(input) = body?;
    let like = state.social.create_like(input)?;
    Ok(Reply::created("Like created successfully", like))
}

async fn delete_like(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<()> {
    state.social.delete_like(&id)?;
    Ok(Reply::done("Like deleted successfully"))
}
