//! # Brand Identifiers & Configuration
//!
//! A brand is a tenant-like bundle of display name, theme color, copy and
//! contact phone. [`BrandId`] is the stable key every other component uses
//! to refer to one.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A brand identifier, e.g. `"safehaven"`.
///
/// # Validation
///
/// Must be a non-empty, non-whitespace string. Ids are compared exactly;
/// no case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandId(String);

impl BrandId {
    /// Create a brand identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBrandId`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidBrandId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BrandId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BrandId> for String {
    fn from(id: BrandId) -> Self {
        id.0
    }
}

impl PartialEq<str> for BrandId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BrandId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for BrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One brand's configuration record.
///
/// Field names follow the site document (`primaryColor`, `ctaText`,
/// `isDefault`). The older `default` key is accepted for `is_default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    /// Stable identifier.
    pub id: BrandId,
    /// Display name.
    pub name: String,
    /// Theme color, e.g. `"#1E3A8A"`.
    pub primary_color: String,
    /// Call-to-action copy.
    pub cta_text: String,
    /// Default contact phone number.
    pub phone: String,
    /// Descriptive region label.
    pub region: String,
    /// Whether this brand is selected when nothing else is.
    #[serde(default, alias = "default")]
    pub is_default: bool,
}

impl BrandConfig {
    /// Check the display fields a landing page cannot render without.
    pub(crate) fn check_fields(&self) -> Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("phone", &self.phone),
            ("primaryColor", &self.primary_color),
        ] {
            if value.trim().is_empty() {
                return Err(format!("brand \"{}\" has an empty {field}", self.id));
            }
        }
        Ok(())
    }
}
