//! # Brand Catalog & Landing Views
//!
//! Routes:
//! - GET /api/brands: List all brands
//! - GET /api/brands/{brand_id}: Get one brand
//! - GET /api/brands/{brand_id}/landing: Assemble the landing page view
//!
//! The landing view opens a selection for this request only, switches it to
//! the route's brand, and applies `?source=` phone overrides. UTM
//! parameters in the query are captured as attribution.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use brandgate_core::{Attribution, LandingRequest, LandingView};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::extract_query;
use crate::routes::{AttributionView, BrandView};
use crate::state::AppState;

/// Everything a landing page renders.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LandingResponse {
    pub brand: BrandView,
    /// Phone number to display (override or brand default).
    pub phone: String,
    /// Traffic source whose override produced `phone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_source: Option<String>,
    /// ZIP for the weather widget, when a valid one was passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default)]
    pub attribution: AttributionView,
}

impl From<LandingView> for LandingResponse {
    fn from(v: LandingView) -> Self {
        Self {
            brand: BrandView::from(&v.brand),
            phone: v.phone,
            phone_source: v.phone_source,
            zip: v.zip.map(String::from),
            attribution: v.attribution.into(),
        }
    }
}

/// Build the brands router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/brands", get(list_brands))
        .route("/api/brands/{brand_id}", get(get_brand))
        .route("/api/brands/{brand_id}/landing", get(landing))
}

/// GET /api/brands: List brands in configuration order.
#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "All brands", body = Vec<BrandView>),
    ),
    tag = "brands"
)]
pub(crate) async fn list_brands(State(state): State<AppState>) -> Json<Vec<BrandView>> {
    Json(state.site.registry().brands().iter().map(BrandView::from).collect())
}

/// GET /api/brands/{brand_id}: Get one brand.
#[utoipa::path(
    get,
    path = "/api/brands/{brand_id}",
    params(("brand_id" = String, Path, description = "Brand identifier")),
    responses(
        (status = 200, description = "Brand found", body = BrandView),
        (status = 404, description = "Unknown brand", body = crate::error::ErrorBody),
    ),
    tag = "brands"
)]
pub(crate) async fn get_brand(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> Result<Json<BrandView>, AppError> {
    state
        .site
        .registry()
        .get(&brand_id)
        .map(|b| Json(BrandView::from(b)))
        .ok_or(AppError::UnknownBrand(brand_id))
}

/// GET /api/brands/{brand_id}/landing: Assemble a landing view.
#[utoipa::path(
    get,
    path = "/api/brands/{brand_id}/landing",
    params(
        ("brand_id" = String, Path, description = "Brand identifier"),
        ("source" = Option<String>, Query, description = "Traffic source for phone overrides"),
        ("zip" = Option<String>, Query, description = "Visitor ZIP for the weather widget"),
        ("utm_source" = Option<String>, Query, description = "UTM source"),
        ("utm_medium" = Option<String>, Query, description = "UTM medium"),
        ("utm_campaign" = Option<String>, Query, description = "UTM campaign"),
        ("utm_term" = Option<String>, Query, description = "UTM term"),
        ("utm_content" = Option<String>, Query, description = "UTM content"),
    ),
    responses(
        (status = 200, description = "Landing view", body = LandingResponse),
        (status = 404, description = "Unknown brand", body = crate::error::ErrorBody),
    ),
    tag = "brands"
)]
pub(crate) async fn landing(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<LandingResponse>, AppError> {
    let pairs = extract_query(query)?;

    let view = state.site.landing(LandingRequest {
        brand_id: &brand_id,
        source: first_param(&pairs, "source"),
        zip: first_param(&pairs, "zip"),
        attribution: Attribution::from_pairs(pairs.iter().map(|(k, v)| (k, v))),
    })?;

    tracing::debug!(
        brand = %view.brand.id,
        phone_source = view.phone_source.as_deref().unwrap_or("-"),
        "landing view assembled"
    );

    Ok(Json(view.into()))
}

/// First non-empty value of a query parameter.
fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, v)| k == name && !v.is_empty())
        .map(|(_, v)| v.as_str())
}
