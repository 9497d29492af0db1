//! HTTP transport for Tally.
//!
//! Exposes the commerce and social services as a JSON REST API. Every
//! response body is an [`Envelope`](envelope::Envelope) of
//! `{message, data, error}`.
//!
//! # Status mapping
//!
//! | Domain error        | Status |
//! |---------------------|--------|
//! | `MalformedInput`    | 400    |
//! | `ValidationFailed`  | 400    |
//! | `ReferenceNotFound` | 400    |
//! | `NotFound`          | 404    |
//! | `InsufficientStock` | 400    |

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use api::{ApiError, AppState};
pub use config::ServerConfig;
pub use envelope::{Envelope, Reply};
pub use error::{ServerError, ServerResult};
pub use server::TallyServer;
