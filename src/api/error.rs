use std::any::Any;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::application::{AppError, ErrorKind};

use super::dto::ErrorResponse;

/// Body sent for every 500; internals never reach the client.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Errors a handler can return.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Json(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::App(err) => err.into_response(),
            ApiError::Json(rejection) => {
                debug!(error = %rejection, "rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(rejection.body_text())),
                )
                    .into_response()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::Validation | ErrorKind::InsufficientBalance => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => {
                error!(error = ?self, "unhandled internal error");
                return internal_error_response();
            }
        };

        debug!(%status, error = ?self, "request failed");
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Panic hook for `CatchPanicLayer`: log the payload, answer with a plain 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = detail, "request handler panicked");
    internal_error_response()
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
