//! HTTP/JSON surface of the ledger.

pub mod dto;
pub mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::application::LedgerService;

pub use error::{ApiError, INTERNAL_ERROR_MESSAGE};

/// Build the application router around a shared ledger service.
pub fn router(service: Arc<LedgerService>) -> Router {
    Router::new()
        .route("/accounts", post(handlers::create_account))
        .route("/accounts/:account_id", get(handlers::get_balance))
        .route("/accounts/:account_id/deposit", post(handlers::deposit))
        .route("/accounts/:account_id/withdraw", post(handlers::withdraw))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .with_state(service)
}
