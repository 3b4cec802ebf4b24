//! Distance Service - HTTP microservice for right-triangle distance calculation.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `ENV` | Deployment environment; `production` hides `/docs` and Swagger UI | "development" |
//! | `PORT` | HTTP server port | 8000 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `POST /calculate_distance` - Distance from `{"vertical", "horizontal"}`
//! - `GET /` - Welcome message
//! - `GET /health` - Health check
//! - `GET /version` - API version
//! - `GET /docs` - Documentation pointer (404 in production)
//! - `GET /swagger-ui` - OpenAPI documentation (Swagger UI, not in production)

use std::sync::Arc;

use distance_service::{router, AppState, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "distance_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();

    tracing::info!(
        environment = %config.environment,
        docs_visible = config.environment.docs_visible(),
        port = config.port,
        "Starting distance service"
    );

    let state = Arc::new(AppState {
        environment: config.environment.clone(),
    });
    let app = router(state);

    // Start server
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
