//! REST endpoints, one module per record kind.
//!
//! Handlers parse paths and bodies, call into the domain services, and
//! render results through [`Reply`] or [`ApiError`]. They hold no state of
//! their own.

pub mod likes;
pub mod posts;
pub mod products;
pub mod sources;
pub mod transactions;
pub mod users;

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tally_commerce::Commerce;
use tally_social::Social;
use tally_types::{DomainError, IdAllocator};

use crate::envelope::Envelope;

/// Shared handler state: both domain services over one ID sequence.
#[derive(Clone, Debug)]
pub struct AppState {
    pub commerce: Arc<Commerce>,
    pub social: Arc<Social>,
}

impl AppState {
    pub fn new(commerce: Commerce, social: Social) -> Self {
        Self {
            commerce: Arc::new(commerce),
            social: Arc::new(social),
        }
    }

    /// Empty stores sharing a fresh allocator.
    pub fn empty() -> Self {
        let ids = Arc::new(IdAllocator::new());
        Self::new(Commerce::new(Arc::clone(&ids)), Social::new(ids))
    }

    /// Stores preloaded with the bootstrap records.
    pub fn seeded() -> Self {
        let ids = Arc::new(IdAllocator::new());
        Self::new(
            tally_commerce::seed::sample(Arc::clone(&ids)),
            tally_social::seed::sample(ids),
        )
    }
}

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .merge(sources::routes())
        .merge(products::routes())
        .merge(transactions::routes())
        .merge(users::routes())
        .merge(posts::routes())
        .merge(likes::routes())
}

/// A failed request, rendered as an envelope with null `data`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: String,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let (status, message) = match &err {
            DomainError::MalformedInput(_) => {
                (StatusCode::BAD_REQUEST, "Invalid request body".to_string())
            }
            DomainError::ValidationFailed { .. } | DomainError::ReferenceNotFound { .. } => {
                (StatusCode::BAD_REQUEST, "Validation failed".to_string())
            }
            DomainError::NotFound { kind, .. } => (StatusCode::NOT_FOUND, format!("{kind} not found")),
            DomainError::InsufficientStock { .. } => {
                (StatusCode::BAD_REQUEST, "Insufficient stock".to_string())
            }
        };
        Self {
            status,
            message,
            detail: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        DomainError::MalformedInput(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        DomainError::MalformedInput(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, detail = %self.detail, "request failed");
        let body = Envelope::<()> {
            message: self.message,
            data: None,
            error: Some(self.detail),
        };
        (self.status, Json(body)).into_response()
    }
}

pub(crate) type ApiResult<T> = Result<crate::envelope::Reply<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tally_types::EntityKind;

    #[test]
    fn status_mapping() {
        let cases = [
            (DomainError::MalformedInput("eof".into()), 400, "Invalid request body"),
            (DomainError::validation("name", "Name is required"), 400, "Validation failed"),
            (
                DomainError::missing_reference(EntityKind::Source, &"9".into()),
                400,
                "Validation failed",
            ),
            (
                DomainError::not_found(EntityKind::Product, &"9".into()),
                404,
                "Product not found",
            ),
            (
                DomainError::InsufficientStock {
                    available: 7,
                    requested: 100,
                },
                400,
                "Insufficient stock",
            ),
        ];
        for (err, status, message) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status.as_u16(), status);
            assert_eq!(api.message, message);
        }
    }

    #[test]
    fn detail_is_the_domain_message() {
        let api = ApiError::from(DomainError::not_found(EntityKind::User, &"4".into()));
        assert_eq!(api.detail, "User with ID 4 not found");
    }
}
