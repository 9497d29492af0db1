use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tally_social::{PostInput, PostUpdate};
use tally_types::{Like, Post, RecordId};

use super::{ApiResult, AppState};
use crate::envelope::Reply;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/:id",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/posts/:id/likes", get(post_likes))
}

async fn list_posts(State(state): State<AppState>) -> ApiResult<Vec<Post>> {
    Ok(Reply::ok("Posts retrieved successfully", state.social.posts()))
}

async fn get_post(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<Post> {
    let post = state.social.post(&id)?;
    Ok(Reply::ok("Post retrieved successfully", post))
}

/// `created_at` is stamped by the server; a client-supplied value is ignored.
async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<PostInput>, JsonRejection>,
) -> ApiResult<Post> {
    let Json(input) = body?;
    let post = state.social.create_post(input)?;
    Ok(Reply::created("Post created successfully", post))
}

async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    body: Result<Json<PostUpdate>, JsonRejection>,
) -> ApiResult<Post> {
    let Json(update) = body?;
    let post = state.social.update_post(&id, update)?;
    Ok(Reply::ok("Post updated successfully", post))
}

async fn delete_post(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<()> {
    state.social.delete_post(&id)?;
    Ok(Reply::done("Post deleted successfully"))
}

async fn post_likes(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<Vec<Like>> {
    let likes = state.social.likes_for_post(&id)?;
    Ok(Reply::ok("Post likes retrieved successfully", likes))
}
