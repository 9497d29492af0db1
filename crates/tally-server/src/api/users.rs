use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tally_social::UserInput;
use tally_types::{Like, Post, RecordId, User};

use super::{ApiResult, AppState};
use crate::envelope::Reply;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/:id/posts", get(user_posts))
        .route("/users/:id/likes", get(user_likes))
}

async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    Ok(Reply::ok("Users retrieved successfully", state.social.users()))
}

async fn get_user(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<User> {
    let user = state.social.user(&id)?;
    Ok(Reply::ok("User retrieved successfully", user))
}

async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> ApiResult<User> {
    let Json(input) = body?;
    let user = state.social.create_user(input)?;
    Ok(Reply::created("User created successfully", user))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> ApiResult<User> {
    let Json(input) = body?;
    let user = state.social.update_user(&id, input)?;
    Ok(Reply::ok("User updated successfully", user))
}

async fn delete_user(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<()> {
    state.social.delete_user(&id)?;
    Ok(Reply::done("User deleted successfully"))
}

async fn user_posts(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<Vec<Post>> {
    let posts = state.social.posts_by_user(&id)?;
    Ok(Reply::ok("User posts retrieved successfully", posts))
}

async fn user_likes(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<Vec<Like>> {
    let likes = state.social.likes_by_user(&id)?;
    Ok(Reply::ok("User likes retrieved successfully", likes))
}
