//! OpenAPI document for the distance service.

use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation for the distance service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Distance Calculator API",
        version = "1.0.0",
        description = "Calculates the straight-line distance from vertical and horizontal distances.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::calculate_distance,
        handlers::read_root,
        handlers::health_check,
        handlers::get_version,
        handlers::get_docs,
    ),
    components(
        schemas(
            handlers::DistanceRequest,
            handlers::DistanceResponse,
            handlers::MessageResponse,
            handlers::HealthResponse,
            handlers::VersionResponse,
            handlers::ErrorResponse,
            handlers::ValidationDetail,
            handlers::ValidationErrorResponse,
        )
    ),
    tags(
        (name = "distance", description = "Distance calculation endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
pub struct ApiDoc;
