//! HTTP request handlers for the distance service.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{error::ApiError, AppState};

/// API version reported by `/version`.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Legs of the right triangle to measure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DistanceRequest {
    /// Vertical distance. Must be non-negative.
    pub vertical: f64,
    /// Horizontal distance. Must be non-negative.
    pub horizontal: f64,
}

/// Successful distance response.
#[derive(Debug, Serialize, ToSchema)]
pub struct DistanceResponse {
    /// Straight-line distance, rounded to two decimal places.
    pub distance: f64,
}

/// Plain informational message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    pub message: String,
}

/// Version response.
#[derive(Debug, Serialize, ToSchema)]
pub struct VersionResponse {
    pub version: String,
    pub description: String,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub detail: String,
}

/// One problem found while decoding a request body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationDetail {
    /// Where the problem is, e.g. `["body"]`.
    pub loc: Vec<String>,
    /// Human-readable description.
    pub msg: String,
    /// Machine-readable category.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Response for bodies that fail to decode.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationDetail>,
}

/// Calculate the distance from vertical and horizontal legs.
///
/// # Returns
///
/// - `200 OK` with the rounded distance
/// - `400 Bad Request` if either leg is negative
/// - `422 Unprocessable Entity` if the body is not a valid `DistanceRequest`
#[utoipa::path(
    post,
    path = "/calculate_distance",
    tag = "distance",
    request_body = DistanceRequest,
    responses(
        (status = 200, description = "Distance calculated", body = DistanceResponse),
        (status = 400, description = "Negative leg", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ValidationErrorResponse)
    )
)]
pub async fn calculate_distance(
    payload: Result<Json<DistanceRequest>, JsonRejection>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let Json(request) = payload?;

    let distance = distance::calculate(request.vertical, request.horizontal)?;

    tracing::debug!(
        vertical = request.vertical,
        horizontal = request.horizontal,
        distance = distance,
        "Distance calculated"
    );

    Ok(Json(DistanceResponse { distance }))
}

/// Welcome message pointing at the distance endpoint.
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses((status = 200, description = "Welcome message", body = MessageResponse))
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Distance Calculator API! Use POST /calculate_distance to calculate distance.".to_string(),
    })
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is running", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Distance Calculator API is running.".to_string(),
    })
}

/// Report the API version.
#[utoipa::path(
    get,
    path = "/version",
    tag = "system",
    responses((status = 200, description = "API version", body = VersionResponse))
)]
pub async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: API_VERSION.to_string(),
        description: format!("Distance Calculator API version {API_VERSION}"),
    })
}

/// Documentation pointer, hidden in production.
///
/// The environment is the one read from `ENV` at startup and held in
/// [`AppState`]; changing `ENV` in a running process has no effect.
#[utoipa::path(
    get,
    path = "/docs",
    tag = "system",
    responses(
        (status = 200, description = "Documentation available", body = MessageResponse),
        (status = 404, description = "Hidden in production", body = ErrorResponse)
    )
)]
pub async fn get_docs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.environment.docs_visible() {
        return Err(ApiError::Hidden);
    }

    Ok(Json(MessageResponse {
        message: "API documentation is available at /docs".to_string(),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
