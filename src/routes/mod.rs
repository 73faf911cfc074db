//! HTTP route handlers and middleware pipeline assembly.
//!
//! The router carries the full middleware chain: hardened security response
//! headers, the configured cross-origin policy, and (when enabled) per-request
//! access logging. Handlers that accept a request body use the typed JSON
//! extractor, so a malformed JSON body is rejected with a client error before
//! any handler logic runs.
//!
//! The access-log middleware is installed only when the configuration says so;
//! its absence in test runs is decided here, at construction, not by an
//! environment check inside the pipeline.

pub mod health;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{
    HeaderName, HeaderValue, CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY,
    X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{
    CorsConfig, SECURITY_CONTENT_TYPE_OPTIONS, SECURITY_CSP, SECURITY_FRAME_OPTIONS,
    SECURITY_HSTS, SECURITY_REFERRER_POLICY, SECURITY_XSS_PROTECTION,
};
use crate::error::AppError;
use crate::middleware::access_log_layer;
use crate::state::AppState;

/// Hardened security headers applied to every response.
fn security_headers() -> [(HeaderName, HeaderValue); 6] {
    [
        (
            CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(SECURITY_CSP),
        ),
        (
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static(SECURITY_CONTENT_TYPE_OPTIONS),
        ),
        (
            X_FRAME_OPTIONS,
            HeaderValue::from_static(SECURITY_FRAME_OPTIONS),
        ),
        (
            REFERRER_POLICY,
            HeaderValue::from_static(SECURITY_REFERRER_POLICY),
        ),
        (
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(SECURITY_HSTS),
        ),
        (
            X_XSS_PROTECTION,
            HeaderValue::from_static(SECURITY_XSS_PROTECTION),
        ),
    ]
}

/// Cross-origin layer from configuration: the wildcard allows any origin,
/// anything else allows exactly the configured origin.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allows_any() {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(
            config
                .allowed_origin
                .parse()
                .expect("CORS origin validated at startup"),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Fallback for unmatched paths, keeping error responses JSON like the rest
/// of the API surface.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Creates the Axum router with the middleware pipeline and all routes.
///
/// Layer order matters: the access log is outermost so its span wraps all
/// request processing, and the header-setting layers act on every response,
/// including short-circuited error responses.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let access_log = state.config.logging.access_log;

    let mut router = Router::new()
        .route("/api/health", get(health::health))
        .fallback(not_found)
        .with_state(state)
        .layer(cors);

    for (name, value) in security_headers() {
        router = router.layer(SetResponseHeaderLayer::if_not_present(name, value));
    }

    if access_log {
        router = router.layer(middleware::from_fn(access_log_layer));
    }

    router
}
