use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::{ErrorBody, INTERNAL_ERROR, INVALID_INPUT};
use crate::error::KeepsakeError;
use crate::validation::ValidationError;

/// Failure of a route handler. Field-level detail is logged, the client
/// only ever sees the generic message.
#[derive(Debug)]
pub enum ApiError {
    /// The body was not JSON at all.
    Malformed(JsonRejection),
    /// The body was JSON but did not satisfy the insert validator.
    Invalid(ValidationError),
    Internal(KeepsakeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Malformed(_) | ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Malformed(_) | ApiError::Invalid(_) => INVALID_INPUT,
            ApiError::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl From<KeepsakeError> for ApiError {
    fn from(err: KeepsakeError) -> Self {
        match err {
            KeepsakeError::Validation(v) => ApiError::Invalid(v),
            other => ApiError::Internal(other),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Invalid(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Malformed(rejection) => {
                tracing::warn!(reason = %rejection.body_text(), "Rejected malformed body")
            }
            ApiError::Invalid(err) => tracing::warn!(issues = %err, "Rejected invalid input"),
            ApiError::Internal(err) => tracing::error!(error = %err, "Request failed"),
        }

        let body = ErrorBody {
            message: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
