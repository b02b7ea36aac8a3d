//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "brandgate API",
        description = "ZIP-to-brand routing, brand landing views and lead intake for the multi-brand marketing site.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::zip_router::route_zip,
        crate::routes::brands::list_brands,
        crate::routes::brands::get_brand,
        crate::routes::brands::landing,
        crate::routes::lead::submit_lead,
        crate::middleware::metrics::metrics_snapshot,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::BrandView,
        crate::routes::AttributionView,
        crate::routes::zip_router::ZipRouteResponse,
        crate::routes::brands::LandingResponse,
        crate::routes::lead::LeadReceiptResponse,
        crate::middleware::metrics::MetricsSnapshot,
    )),
    tags(
        (name = "routing", description = "ZIP entry and brand resolution"),
        (name = "brands", description = "Brand catalog and landing views"),
        (name = "leads", description = "Lead form intake"),
        (name = "operations", description = "Service counters"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
