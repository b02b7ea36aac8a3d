//! # Brand Registry & Selection
//!
//! [`BrandRegistry`] is the fixed catalog of brands, validated once at
//! startup and never mutated afterwards. [`BrandSelection`] is one
//! visitor's "current brand": it borrows the registry, starts at the
//! default brand, and changes only through [`BrandSelection::switch_to`].
//!
//! Selections are cheap and independent. The HTTP service creates one per
//! request, so a switch made for one visitor is never observed by another.

use std::collections::HashSet;

use crate::brand::{BrandConfig, BrandId};
use crate::error::{ConfigError, SwitchError};

/// Immutable catalog of brand configurations.
#[derive(Debug, Clone)]
pub struct BrandRegistry {
    brands: Vec<BrandConfig>,
    default_index: usize,
}

impl BrandRegistry {
    /// Validate and load the brand set.
    ///
    /// When no record is flagged `isDefault` the first record becomes the
    /// default and is flagged, so `is_default` on a loaded record always
    /// names the brand a new selection starts at.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoBrands`] for an empty set.
    /// - [`ConfigError::DuplicateBrand`] when two records share an id.
    /// - [`ConfigError::MultipleDefaults`] when more than one is flagged.
    /// - [`ConfigError::InvalidBrand`] when a record lacks a name, phone or color.
    pub fn load(mut brands: Vec<BrandConfig>) -> Result<Self, ConfigError> {
        if brands.is_empty() {
            return Err(ConfigError::NoBrands);
        }

        let mut seen = HashSet::new();
        for (index, brand) in brands.iter().enumerate() {
            if !seen.insert(brand.id.as_str()) {
                return Err(ConfigError::DuplicateBrand(brand.id.to_string()));
            }
            brand
                .check_fields()
                .map_err(|reason| ConfigError::InvalidBrand { index, reason })?;
        }

        let defaults: Vec<usize> = brands
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_default)
            .map(|(i, _)| i)
            .collect();
        let default_index = match defaults.as_slice() {
            [] => {
                tracing::warn!(
                    fallback = %brands[0].id,
                    "no default brand configured; using first entry"
                );
                0
            }
            [only] => *only,
            many => {
                return Err(ConfigError::MultipleDefaults(
                    many.iter().map(|&i| brands[i].id.to_string()).collect(),
                ))
            }
        };
        brands[default_index].is_default = true;

        Ok(Self {
            brands,
            default_index,
        })
    }

    /// Look up a brand by id.
    pub fn get(&self, id: &str) -> Option<&BrandConfig> {
        self.position(id).map(|i| &self.brands[i])
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// The default brand.
    pub fn default_brand(&self) -> &BrandConfig {
        &self.brands[self.default_index]
    }

    /// All brands in configuration order.
    pub fn brands(&self) -> &[BrandConfig] {
        &self.brands
    }

    /// Registered ids in configuration order.
    pub fn ids(&self) -> impl Iterator<Item = &BrandId> {
        self.brands.iter().map(|b| &b.id)
    }

    /// Number of brands. Never zero.
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    /// Whether the registry holds no brands. A loaded registry never does.
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Start a selection at the default brand.
    pub fn select(&self) -> BrandSelection<'_> {
        BrandSelection {
            registry: self,
            current: self.default_index,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.brands.iter().position(|b| b.id == id)
    }
}

/// One visitor's current brand.
#[derive(Debug, Clone, Copy)]
pub struct BrandSelection<'a> {
    registry: &'a BrandRegistry,
    current: usize,
}

impl<'a> BrandSelection<'a> {
    /// The active brand.
    pub fn current(&self) -> &'a BrandConfig {
        &self.registry.brands[self.current]
    }

    /// Make `id` the active brand.
    ///
    /// Switching to the brand that is already active succeeds and changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`SwitchError::UnknownBrand`] if `id` is not registered. The active
    /// brand is left as it was.
    pub fn switch_to(&mut self, id: &str) -> Result<&'a BrandConfig, SwitchError> {
        match self.registry.position(id) {
            Some(index) => {
                self.current = index;
                Ok(self.current())
            }
            None => {
                tracing::debug!(brand_id = id, current = %self.current().id, "switch to unknown brand rejected");
                Err(SwitchError::UnknownBrand(id.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(id: &str, is_default: bool) -> BrandConfig {
        BrandConfig {
            id: BrandId::new(id).unwrap(),
            name: id.to_uppercase(),
            primary_color: "#123456".into(),
            cta_text: "Call today".into(),
            phone: "1-800-555-0100".into(),
            region: "Somewhere".into(),
            is_default,
        }
    }

    #[test]
    fn load_uses_flagged_default() {
        let reg = BrandRegistry::load(vec![brand("a", false), brand("b", true)]).unwrap();
        assert_eq!(reg.default_brand().id, "b");
        assert_eq!(reg.select().current().id, "b");
    }

    #[test]
    fn load_without_default_falls_back_to_first() {
        let reg = BrandRegistry::load(vec![brand("first", false), brand("second", false)]).unwrap();
        assert_eq!(reg.default_brand().id, "first");
        let flagged: Vec<&str> = reg
            .brands()
            .iter()
            .filter(|b| b.is_default)
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(flagged, vec!["first"]);
    }

    #[test]
    fn load_empty_fails() {
        assert!(matches!(
            BrandRegistry::load(Vec::new()),
            Err(ConfigError::NoBrands)
        ));
    }

    #[test]
    fn load_rejects_duplicate_ids() {
        let err = BrandRegistry::load(vec![brand("a", false), brand("a", false)]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateBrand(id) if id == "a"));
    }

    #[test]
    fn load_rejects_two_defaults() {
        let err = BrandRegistry::load(vec![brand("a", true), brand("b", true)]).unwrap_err();
        match err {
            ConfigError::MultipleDefaults(ids) => assert_eq!(ids, vec!["a", "b"]),
            other => panic!("expected MultipleDefaults, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_incomplete_brand() {
        let mut broken = brand("b", false);
        broken.name = String::new();
        let err = BrandRegistry::load(vec![brand("a", false), broken]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBrand { index: 1, .. }));
    }

    #[test]
    fn switch_to_known_brand() {
        let reg = BrandRegistry::load(vec![brand("a", true), brand("b", false)]).unwrap();
        let mut sel = reg.select();
        let switched = sel.switch_to("b").unwrap();
        assert_eq!(switched.id, "b");
        assert_eq!(sel.current().id, "b");
    }

    #[test]
    fn switch_to_unknown_leaves_selection() {
        let reg = BrandRegistry::load(vec![brand("a", true), brand("b", false)]).unwrap();
        let mut sel = reg.select();
        sel.switch_to("b").unwrap();
        let err = sel.switch_to("zzz").unwrap_err();
        assert_eq!(err, SwitchError::UnknownBrand("zzz".into()));
        assert_eq!(sel.current().id, "b");
    }

    #[test]
    fn switch_to_current_is_idempotent() {
        let reg = BrandRegistry::load(vec![brand("a", true), brand("b", false)]).unwrap();
        let mut sel = reg.select();
        for _ in 0..3 {
            let id = sel.current().id.clone();
            assert!(sel.switch_to(id.as_str()).is_ok());
            assert_eq!(sel.current().id, "a");
        }
    }

    #[test]
    fn selections_are_independent() {
        let reg = BrandRegistry::load(vec![brand("a", true), brand("b", false)]).unwrap();
        let mut first = reg.select();
        let second = reg.select();
        first.switch_to("b").unwrap();
        assert_eq!(first.current().id, "b");
        assert_eq!(second.current().id, "a");
    }

    #[test]
    fn lookup_helpers() {
        let reg = BrandRegistry::load(vec![brand("a", false), brand("b", false)]).unwrap();
        assert!(reg.contains("a"));
        assert!(!reg.contains("c"));
        assert_eq!(reg.get("b").map(|b| b.name.as_str()), Some("B"));
        assert_eq!(reg.len(), 2);
        let ids: Vec<&str> = reg.ids().map(BrandId::as_str).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
