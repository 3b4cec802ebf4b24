//! Distance Service Library
//!
//! HTTP handlers, middleware and router for the distance calculator API.
//! This library is used by both the distance-service binary and integration tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use distance::Environment;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Deployment environment, fixed at startup.
    pub environment: Environment,
}

/// Build the application router with the full middleware chain.
///
/// Layers, outermost first: request tracing, security headers, CORS origin
/// policy, request/response logging, CORS preflight handling. Logging sits
/// outside the preflight layer so answered preflights are logged too.
pub fn router(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::read_root))
        .route("/calculate_distance", post(handlers::calculate_distance))
        .route("/health", get(handlers::health_check))
        .route("/version", get(handlers::get_version))
        .route("/docs", get(handlers::get_docs))
        .fallback(handlers::not_found);

    if state.environment.docs_visible() {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        );
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(middleware::security_headers))
            .layer(axum::middleware::from_fn(middleware::cors_policy))
            .layer(axum::middleware::from_fn(middleware::log_exchange))
            .layer(middleware::preflight_layer()),
    )
    .with_state(state)
}

// Re-export commonly used types for convenience
pub use config::ServiceConfig;
pub use error::ApiError;
pub use handlers::{
    DistanceRequest, DistanceResponse, ErrorResponse, HealthResponse, MessageResponse,
    ValidationDetail, ValidationErrorResponse, VersionResponse,
};
