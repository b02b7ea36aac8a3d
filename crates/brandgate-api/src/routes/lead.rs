//! # Lead Intake
//!
//! Routes:
//! - POST /api/lead: Accept a lead form submission
//!
//! The payload is free-form; any JSON object is accepted and echoed back
//! in the receipt. Nothing is stored or forwarded.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use brandgate_core::{LeadReceipt, LeadSubmission};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::routes::AttributionView;
use crate::state::AppState;

/// Acknowledgement of a received lead.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadReceiptResponse {
    pub success: bool,
    pub message: String,
    pub lead_id: Uuid,
    pub received_at: DateTime<Utc>,
    /// Brand serving the submitted ZIP, when it routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub attribution: AttributionView,
    /// The submitted payload.
    #[schema(value_type = Object)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl From<LeadReceipt> for LeadReceiptResponse {
    fn from(r: LeadReceipt) -> Self {
        Self {
            success: r.success,
            message: r.message,
            lead_id: r.lead_id,
            received_at: r.received_at,
            brand_id: r.brand_id.map(String::from),
            attribution: r.attribution.into(),
            data: r.data,
        }
    }
}

/// Build the lead router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/lead", post(submit_lead))
}

/// POST /api/lead: Submit a lead.
#[utoipa::path(
    post,
    path = "/api/lead",
    request_body(content = serde_json::Value, description = "Lead form fields (free-form JSON object)"),
    responses(
        (status = 200, description = "Lead received", body = LeadReceiptResponse),
        (status = 400, description = "Body is not a JSON object", body = crate::error::ErrorBody),
    ),
    tag = "leads"
)]
pub(crate) async fn submit_lead(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<LeadReceiptResponse>, AppError> {
    let lead = LeadSubmission::from_value(extract_json(body)?)?;
    let receipt = state.site.receive_lead(lead);
    Ok(Json(receipt.into()))
}
