//! # UTM Attribution
//!
//! Campaign parameters captured from a visitor's entry URL. The record is
//! carried on landing views and lead receipts so a lead can be traced back
//! to the campaign that produced it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Captured `utm_*` parameters. Blank values are stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    /// `utm_source`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// `utm_medium`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    /// `utm_campaign`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    /// `utm_term`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// `utm_content`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Attribution {
    /// Capture attribution from decoded query pairs. Unrelated keys are
    /// ignored; for a repeated key the first non-blank value wins.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut utm = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                "utm_source" => &mut utm.source,
                "utm_medium" => &mut utm.medium,
                "utm_campaign" => &mut utm.campaign,
                "utm_term" => &mut utm.term,
                "utm_content" => &mut utm.content,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }
        utm
    }

    /// Read a record submitted as JSON, e.g. the `attribution` object of a
    /// lead. Keys may be bare (`source`) or prefixed (`utm_source`). Values
    /// that are not strings are skipped; the rest follow [`Self::from_pairs`].
    pub fn from_json_object(fields: &Map<String, Value>) -> Self {
        Self::from_pairs(fields.iter().filter_map(|(key, value)| {
            let Some(value) = value.as_str() else {
                tracing::debug!(field = %key, "non-string attribution value skipped");
                return None;
            };
            let key = match key.as_str() {
                "source" => "utm_source",
                "medium" => "utm_medium",
                "campaign" => "utm_campaign",
                "term" => "utm_term",
                "content" => "utm_content",
                other => other,
            };
            Some((key, value))
        }))
    }

    /// Whether no parameter was captured.
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.medium.is_none()
            && self.campaign.is_none()
            && self.term.is_none()
            && self.content.is_none()
    }
}
