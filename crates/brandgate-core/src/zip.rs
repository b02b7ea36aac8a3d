//! # ZIP Resolution
//!
//! Maps a 5-digit US ZIP code to the brand that serves it through a static
//! table keyed by the ZIP's first two digits.
//!
//! ## Matching rules
//!
//! - Input must be exactly five ASCII digits. No trimming, no ZIP+4.
//! - The prefix is the first two characters, matched by exact equality.
//! - Every key in a [`PrefixTable`] is exactly two ASCII digits; the table
//!   refuses to build otherwise, so longest-prefix ambiguity cannot arise.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::brand::BrandId;
use crate::error::{ConfigError, RouteError, ValidationError};

/// Length of a ZIP prefix key.
pub const PREFIX_LEN: usize = 2;

/// Length of a ZIP code.
pub const ZIP_LEN: usize = 5;

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// A validated 5-digit ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

impl ZipCode {
    /// Parse a ZIP code.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidZip`] unless `value` is exactly
    /// five ASCII digits.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if is_digits(value, ZIP_LEN) {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::InvalidZip(value.to_string()))
        }
    }

    /// Access the ZIP string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit routing prefix.
    pub fn prefix(&self) -> &str {
        &self.0[..PREFIX_LEN]
    }
}

impl TryFrom<String> for ZipCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ZipCode> for String {
    fn from(zip: ZipCode) -> Self {
        zip.0
    }
}

impl std::fmt::Display for ZipCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the prefix table as it appears in the site document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipPrefixRule {
    /// Two-digit ZIP prefix.
    pub prefix: String,
    /// Brand serving that prefix.
    pub brand: BrandId,
}

/// Static prefix-to-brand lookup.
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    rules: BTreeMap<String, BrandId>,
}

impl PrefixTable {
    /// Build a table from rules.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPrefix`] for a key that is not two digits,
    /// [`ConfigError::DuplicatePrefix`] for a repeated key.
    pub fn new(rules: impl IntoIterator<Item = ZipPrefixRule>) -> Result<Self, ConfigError> {
        let mut table = BTreeMap::new();
        for rule in rules {
            if !is_digits(&rule.prefix, PREFIX_LEN) {
                return Err(ConfigError::InvalidPrefix(rule.prefix));
            }
            if table.contains_key(&rule.prefix) {
                return Err(ConfigError::DuplicatePrefix(rule.prefix));
            }
            table.insert(rule.prefix, rule.brand);
        }
        Ok(Self { rules: table })
    }

    /// Resolve a ZIP to its brand.
    ///
    /// Malformed and unserved input both yield `None`; use [`Self::route`]
    /// to tell them apart.
    pub fn resolve(&self, zip: &str) -> Option<&BrandId> {
        self.route(zip).ok()
    }

    /// Resolve a ZIP, reporting why it did not route.
    pub fn route(&self, zip: &str) -> Result<&BrandId, RouteError> {
        let zip = ZipCode::parse(zip).map_err(|_| RouteError::Malformed(zip.to_string()))?;
        self.rules
            .get(zip.prefix())
            .ok_or_else(|| RouteError::Unserved(zip.to_string()))
    }

    /// Iterate `(prefix, brand)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BrandId)> {
        self.rules.iter().map(|(p, b)| (p.as_str(), b))
    }

    /// Number of prefixes.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no prefixes.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(prefix: &str, brand: &str) -> ZipPrefixRule {
        ZipPrefixRule {
            prefix: prefix.to_string(),
            brand: BrandId::new(brand).unwrap(),
        }
    }

    fn table() -> PrefixTable {
        PrefixTable::new([rule("28", "safehaven"), rule("33", "bestsecurity")]).unwrap()
    }

    #[test]
    fn zip_code_valid() {
        let zip = ZipCode::parse("28201").unwrap();
        assert_eq!(zip.as_str(), "28201");
        assert_eq!(zip.prefix(), "28");
    }

    #[test]
    fn zip_code_rejects_bad_shapes() {
        for bad in ["", "123", "123456", "abcde", "2820a", " 2820", "28201 ", "２８２０１"] {
            assert!(ZipCode::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn resolve_known_prefix() {
        assert_eq!(table().resolve("28201").unwrap(), "safehaven");
        assert_eq!(table().resolve("33101").unwrap(), "bestsecurity");
    }

    #[test]
    fn resolve_unknown_prefix_is_none() {
        assert!(table().resolve("99999").is_none());
    }

    #[test]
    fn route_distinguishes_malformed_from_unserved() {
        let t = table();
        assert_eq!(t.route("28x01"), Err(RouteError::Malformed("28x01".into())));
        assert_eq!(t.route("99999"), Err(RouteError::Unserved("99999".into())));
    }

    #[test]
    fn no_trimming() {
        assert!(table().resolve(" 28201").is_none());
        assert!(table().resolve("28201\n").is_none());
    }

    #[test]
    fn rejects_non_two_digit_prefix() {
        let err = PrefixTable::new([rule("282", "safehaven")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrefix(p) if p == "282"));
        let err = PrefixTable::new([rule("2a", "safehaven")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrefix(_)));
    }

    #[test]
    fn rejects_duplicate_prefix() {
        let err = PrefixTable::new([rule("28", "safehaven"), rule("28", "redhawk")]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePrefix(p) if p == "28"));
    }

    #[test]
    fn iter_in_prefix_order() {
        let t = PrefixTable::new([rule("33", "b"), rule("28", "a")]).unwrap();
        let prefixes: Vec<&str> = t.iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes, vec!["28", "33"]);
        assert_eq!(t.len(), 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> PrefixTable {
        PrefixTable::new(["28", "30", "33"].into_iter().map(|p| ZipPrefixRule {
            prefix: p.to_string(),
            brand: BrandId::new(format!("brand-{p}")).unwrap(),
        }))
        .unwrap()
    }

    proptest! {
        /// A 5-digit ZIP resolves exactly to its prefix's entry.
        #[test]
        fn five_digits_resolve_by_prefix(zip in "[0-9]{5}") {
            let t = table();
            let expected = t.iter().find(|(p, _)| zip.starts_with(p)).map(|(_, b)| b);
            prop_assert_eq!(t.resolve(&zip), expected);
        }

        /// Anything that is not five ASCII digits never resolves.
        #[test]
        fn other_shapes_never_resolve(input in "\\PC{0,8}") {
            prop_assume!(!(input.len() == 5 && input.bytes().all(|b| b.is_ascii_digit())));
            prop_assert!(table().resolve(&input).is_none());
        }

        /// Short or long digit strings never resolve, even with a served prefix.
        #[test]
        fn wrong_length_digits_never_resolve(input in "28[0-9]{0,2}|28[0-9]{4,6}") {
            prop_assert!(table().resolve(&input).is_none());
        }
    }
}
