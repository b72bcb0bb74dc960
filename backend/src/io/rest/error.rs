//! Error translation from the domain to HTTP responses.
//!
//! Every failure leaves the service as JSON with a `detail` key: a string for
//! 404, 405 and 500, a list of [`ErrorDetail`] entries for 422.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ErrorDetail, ErrorResponse, ValidationErrorResponse};
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::ItemError;

pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const ROUTE_NOT_FOUND: &str = "Not Found";
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed item does not exist
    #[error("item {0} not found")]
    ItemNotFound(i64),

    /// No route matches the request path
    #[error("no route for request")]
    RouteNotFound,

    /// The path exists but does not accept this method
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Request input failed schema checks before reaching the domain
    #[error("request validation failed with {} error(s)", .0.len())]
    Validation(Vec<ErrorDetail>),

    /// Anything unexpected; details are logged, never returned
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(detail: ErrorDetail) -> Self {
        ApiError::Validation(vec![detail])
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ItemNotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound { id } => ApiError::ItemNotFound(id),
            ItemError::Storage(source) => ApiError::Internal(source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::ItemNotFound(_) => {
                (status, Json(ErrorResponse::new(ITEM_NOT_FOUND))).into_response()
            }
            ApiError::RouteNotFound => {
                (status, Json(ErrorResponse::new(ROUTE_NOT_FOUND))).into_response()
            }
            ApiError::MethodNotAllowed => {
                (status, Json(ErrorResponse::new(METHOD_NOT_ALLOWED))).into_response()
            }
            ApiError::Validation(detail) => {
                for failure in &detail {
                    warn!("Rejected request input: {}", failure);
                }
                (status, Json(ValidationErrorResponse { detail })).into_response()
            }
            ApiError::Internal(source) => {
                error!("Internal error while handling request: {:?}", source);
                (status, Json(ErrorResponse::new(INTERNAL_ERROR))).into_response()
            }
        }
    }
}
