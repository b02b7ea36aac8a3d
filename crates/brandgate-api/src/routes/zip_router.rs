//! # ZIP Router
//!
//! Routes:
//! - GET /api/zip-router?zip=XXXXX: Resolve a ZIP to the brand serving it
//!
//! Missing ZIP → 400, malformed ZIP → 422, unserved ZIP → 404 with the
//! "not yet supported" message.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::extractors::extract_query;
use crate::routes::BrandView;
use crate::state::AppState;

/// Query string of the ZIP router.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ZipQuery {
    /// 5-digit US ZIP code.
    pub zip: Option<String>,
}

/// Brand resolved for a ZIP.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ZipRouteResponse {
    pub zip: String,
    pub brand: BrandView,
}

/// Build the ZIP router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/zip-router", get(route_zip))
}

/// GET /api/zip-router: Resolve a ZIP to its brand.
#[utoipa::path(
    get,
    path = "/api/zip-router",
    params(ZipQuery),
    responses(
        (status = 200, description = "Brand serving the ZIP", body = ZipRouteResponse),
        (status = 400, description = "ZIP missing", body = crate::error::ErrorBody),
        (status = 404, description = "ZIP outside every served area", body = crate::error::ErrorBody),
        (status = 422, description = "ZIP is not 5 digits", body = crate::error::ErrorBody),
    ),
    tag = "routing"
)]
pub(crate) async fn route_zip(
    State(state): State<AppState>,
    query: Result<Query<ZipQuery>, QueryRejection>,
) -> Result<Json<ZipRouteResponse>, AppError> {
    let zip = extract_query(query)?
        .zip
        .filter(|z| !z.is_empty())
        .ok_or_else(|| AppError::BadRequest("ZIP code required".to_string()))?;

    let brand = state.site.route(&zip)?;
    tracing::debug!(zip = %zip, brand = %brand.id, "ZIP routed");

    Ok(Json(ZipRouteResponse {
        brand: BrandView::from(brand),
        zip,
    }))
}
