//! HTTP error mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use distance::DistanceError;
use thiserror::Error;

use crate::handlers::{ErrorResponse, ValidationDetail, ValidationErrorResponse};

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body could not be decoded into the expected shape.
    #[error("Invalid request body: {0}")]
    Validation(#[from] JsonRejection),

    /// Legs were decoded but are not valid for a distance.
    #[error(transparent)]
    Distance(#[from] DistanceError),

    /// Resource hidden by deployment policy.
    #[error("Not found")]
    Hidden,

    /// No route matches the request path.
    #[error("Not Found")]
    RouteNotFound,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Distance(_) => StatusCode::BAD_REQUEST,
            ApiError::Hidden | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            ApiError::Validation(rejection) => {
                tracing::warn!(error = %rejection, "Request body rejected");
                let detail = ValidationDetail {
                    loc: vec!["body".to_string()],
                    msg: rejection.body_text(),
                    kind: rejection_kind(&rejection).to_string(),
                };
                (
                    status,
                    Json(ValidationErrorResponse {
                        detail: vec![detail],
                    }),
                )
                    .into_response()
            }
            other => {
                if let ApiError::Distance(e) = &other {
                    tracing::warn!(error = ?e, "Distance calculation rejected");
                }
                (
                    status,
                    Json(ErrorResponse {
                        detail: other.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

fn rejection_kind(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonDataError(_) => "value_error",
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "missing_content_type",
        _ => "invalid_body",
    }
}
