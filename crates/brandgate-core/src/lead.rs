//! # Lead Intake
//!
//! Leads arrive as free-form JSON objects from the landing page form
//! (name, email, phone, zip, address, serviceType, plus whatever the form
//! adds later). No field is required. The payload is acknowledged with a
//! [`LeadReceipt`]; it is not stored or forwarded anywhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::attribution::Attribution;
use crate::brand::BrandId;
use crate::error::LeadError;
use crate::site::Site;

/// Acknowledgement message returned for every accepted lead.
pub const LEAD_RECEIVED: &str = "Lead received";

/// A lead payload that passed shape checks.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSubmission {
    fields: Map<String, Value>,
}

impl LeadSubmission {
    /// Accept a JSON value as a lead.
    ///
    /// # Errors
    ///
    /// [`LeadError::NotAnObject`] unless `value` is a JSON object.
    pub fn from_value(value: Value) -> Result<Self, LeadError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(LeadError::NotAnObject(json_kind(&other))),
        }
    }

    /// A string field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Submitted fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// UTM parameters carried in the payload's `attribution` object, if any.
    ///
    /// Fields are read one at a time, so a bad value drops only that field.
    pub fn attribution(&self) -> Attribution {
        match self.fields.get("attribution") {
            Some(Value::Object(fields)) => Attribution::from_json_object(fields),
            Some(other) => {
                tracing::debug!(kind = json_kind(other), "lead attribution is not an object");
                Attribution::default()
            }
            None => Attribution::default(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Acknowledgement of a received lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadReceipt {
    /// Always `true` for a receipt.
    pub success: bool,
    /// Human-readable acknowledgement.
    pub message: String,
    /// Identifier assigned to this lead.
    pub lead_id: Uuid,
    /// When the lead was accepted.
    pub received_at: DateTime<Utc>,
    /// Brand serving the lead's ZIP, when the ZIP routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<BrandId>,
    /// Attribution submitted with the lead.
    #[serde(default, skip_serializing_if = "Attribution::is_empty")]
    pub attribution: Attribution,
    /// The submitted payload, echoed back.
    pub data: Map<String, Value>,
}

impl Site {
    /// Acknowledge a lead, tagging it with the brand that serves its ZIP.
    pub fn receive_lead(&self, lead: LeadSubmission) -> LeadReceipt {
        let brand_id = lead.field("zip").and_then(|z| self.resolve(z)).cloned();
        let attribution = lead.attribution();
        let receipt = LeadReceipt {
            success: true,
            message: LEAD_RECEIVED.to_string(),
            lead_id: Uuid::new_v4(),
            received_at: Utc::now(),
            brand_id,
            attribution,
            data: lead.fields,
        };
        tracing::info!(
            lead_id = %receipt.lead_id,
            brand = receipt.brand_id.as_ref().map(BrandId::as_str).unwrap_or("-"),
            fields = receipt.data.len(),
            "lead received"
        );
        receipt
    }
}
