//! # brandgate-api: Axum API Service
//!
//! HTTP boundary of the multi-brand marketing site. A visitor's ZIP is
//! routed to a brand, brand landing pages are assembled per request, and
//! lead form submissions are acknowledged.
//!
//! ## API Surface
//!
//! | Prefix                         | Module                   | Purpose             |
//! |--------------------------------|--------------------------|---------------------|
//! | `/api/zip-router`              | [`routes::zip_router`]   | ZIP → brand         |
//! | `/api/brands/*`                | [`routes::brands`]       | Catalog, landing    |
//! | `/api/lead`                    | [`routes::lead`]         | Lead intake         |
//! | `/metrics`                     | [`middleware::metrics`]  | Request counters    |
//! | `/openapi.json`                | [`openapi`]              | OpenAPI document    |
//! | `/health/*`                    | this module              | Probes              |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → MetricsMiddleware → Handler
//! ```

pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::http::{header, Method, Uri};
use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

pub use error::AppError;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the middleware stack so
/// they are neither traced nor counted.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();

    let api = Router::new()
        .merge(routes::zip_router::router())
        .merge(routes::brands::router())
        .merge(routes::lead::router())
        .merge(openapi::router())
        .route("/metrics", get(middleware::metrics::metrics_snapshot))
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(cors())
        .layer(middleware::tracing_layer::layer())
        .layer(Extension(metrics))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .fallback(not_found)
}

/// Unmatched paths get the structured error body.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// The landing pages are served from another origin; allow them to call in.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the site is loaded before the listener binds, so a
/// running server is always ready.
async fn readiness() -> &'static str {
    "ready"
}
