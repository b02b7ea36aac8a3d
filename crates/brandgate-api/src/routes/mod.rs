//! # API Route Modules
//!
//! - `zip_router`: ZIP entry: resolve a visitor's ZIP to a brand.
//! - `brands`: brand catalog and per-visit landing views.
//! - `lead`: lead form intake.

pub mod brands;
pub mod lead;
pub mod zip_router;

use brandgate_core::{Attribution, BrandConfig};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandView {
    pub id: String,
    pub name: String,
    pub primary_color: String,
    pub cta_text: String,
    pub phone: String,
    pub region: String,
    pub is_default: bool,
}

impl From<&BrandConfig> for BrandView {
    fn from(b: &BrandConfig) -> Self {
        Self {
            id: b.id.to_string(),
            name: b.name.clone(),
            primary_color: b.primary_color.clone(),
            cta_text: b.cta_text.clone(),
            phone: b.phone.clone(),
            region: b.region.clone(),
            is_default: b.is_default,
        }
    }
}

/// Captured UTM parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttributionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl From<Attribution> for AttributionView {
    fn from(a: Attribution) -> Self {
        Self {
            source: a.source,
            medium: a.medium,
            campaign: a.campaign,
            term: a.term,
            content: a.content,
        }
    }
}
