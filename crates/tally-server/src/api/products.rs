use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tally_commerce::{ProductFilter, ProductInput};
use tally_types::{Product, RecordId};

use super::{ApiResult, AppState};
use crate::envelope::Reply;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ProductFilter>, QueryRejection>,
) -> ApiResult<Vec<Product>> {
    let Query(filter) = query?;
    Ok(Reply::ok(
        "Products retrieved successfully",
        state.commerce.products(&filter),
    ))
}

async fn get_product(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<Product> {
    let product = state.commerce.product(&id)?;
    Ok(Reply::ok("Product retrieved successfully", product))
}

async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<Product> {
    let Json(input) = body?;
    let product = state.commerce.create_product(input)?;
    Ok(Reply::created("Product created successfully", product))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<Product> {
    let Json(input) = body?;
    let product = state.commerce.update_product(&id, input)?;
    Ok(Reply::ok("Product updated successfully", product))
}

async fn delete_product(State(state): State<AppState>, Path(id): Path<RecordId>) -> ApiResult<()> {
    state.commerce.delete_product(&id)?;
    Ok(Reply::done("Product deleted successfully"))
}
