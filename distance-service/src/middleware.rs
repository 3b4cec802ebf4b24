//! HTTP middleware: security headers, CORS policy and exchange logging.

use axum::{
    extract::Request,
    http::{header, request::Parts, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Headers set on every response.
const SECURITY_HEADERS: [(HeaderName, &str); 4] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::X_XSS_PROTECTION, "1; mode=block"),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
];

/// Origins are allowed when they start with one of these.
pub const ALLOWED_ORIGIN_PREFIXES: [&str; 3] =
    ["http://localhost", "https://localhost", "https://berke.dev"];

/// Body of the response that replaces anything sent to a disallowed origin.
pub const CORS_FORBIDDEN_BODY: &str = "CORS origin forbidden";

/// Attach the fixed security headers to every response.
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }

    response
}

/// Whether a cross-origin caller may read responses.
pub fn is_allowed_origin(origin: &HeaderValue) -> bool {
    origin
        .to_str()
        .map(|origin| {
            ALLOWED_ORIGIN_PREFIXES
                .iter()
                .any(|prefix| origin.starts_with(prefix))
        })
        .unwrap_or(false)
}

/// Enforce the origin policy.
///
/// Requests without an `Origin` pass through. Allowed origins get the CORS
/// headers echoed back. Anything else still reaches the handler, but the
/// caller receives `403 CORS origin forbidden` instead of its response.
pub async fn cors_policy(request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .filter(|origin| !origin.is_empty())
        .cloned();

    let mut response = next.run(request).await;

    let Some(origin) = origin else {
        return response;
    };

    if !is_allowed_origin(&origin) {
        tracing::warn!(origin = ?origin, "Cross-origin request forbidden");
        return (StatusCode::FORBIDDEN, CORS_FORBIDDEN_BODY).into_response();
    }

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("*"),
    );

    response
}

/// Answer CORS preflight requests using the same origin predicate as
/// [`cors_policy`].
pub fn preflight_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            |origin: &HeaderValue, _parts: &Parts| is_allowed_origin(origin),
        ))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Log each request before dispatch and each response after.
pub async fn log_exchange(request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        url = %full_url(&request),
        headers = ?request.headers(),
        "Request"
    );

    let response = next.run(request).await;

    tracing::info!(
        status = response.status().as_u16(),
        headers = ?response.headers(),
        "Response"
    );

    response
}

/// Reconstruct the absolute URL from the `Host` header when the request line
/// only carries a path.
fn full_url(request: &Request) -> String {
    let uri = request.uri();
    if uri.scheme().is_some() {
        return uri.to_string();
    }

    match request
        .headers()
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
    {
        Some(host) => format!("http://{host}{uri}"),
        None => uri.to_string(),
    }
}
