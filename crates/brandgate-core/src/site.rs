//! # Site Configuration
//!
//! The versioned, read-only input the whole service runs on: brand records,
//! the ZIP prefix table and traffic-source phone overrides. A document is
//! parsed into [`SiteDocument`] and validated into a [`Site`]; nothing in a
//! `Site` changes after load.
//!
//! ## Document shape
//!
//! ```yaml
//! version: "2024.1"
//! brands:
//!   - id: safehaven
//!     name: SafeHaven Security
//!     primaryColor: "#1E3A8A"
//!     ctaText: Protect your home.
//!     phone: 1-800-555-0128
//!     region: North Carolina
//!     isDefault: true
//! zipPrefixes:
//!   - { prefix: "28", brand: safehaven }
//! phoneOverrides:
//!   google: 1-800-GOOGLE-AD
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::brand::{BrandConfig, BrandId};
use crate::error::{ConfigError, RouteError};
use crate::registry::BrandRegistry;
use crate::zip::{PrefixTable, ZipPrefixRule};

/// The site document compiled into every binary.
pub const BUILTIN_SITE_JSON: &str = include_str!("../data/site.json");

/// Raw, unvalidated site document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDocument {
    /// Free-form version label of the document.
    #[serde(default)]
    pub version: Option<String>,
    /// Brand records in priority order.
    pub brands: Vec<BrandConfig>,
    /// Prefix table rows.
    #[serde(default)]
    pub zip_prefixes: Vec<ZipPrefixRule>,
    /// Source name to tracking phone number.
    #[serde(default)]
    pub phone_overrides: BTreeMap<String, String>,
}

/// Validated site configuration.
#[derive(Debug, Clone)]
pub struct Site {
    version: Option<String>,
    registry: BrandRegistry,
    prefixes: PrefixTable,
    phone_overrides: BTreeMap<String, String>,
}

impl Site {
    /// Validate a parsed document.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] raised by [`BrandRegistry::load`] or
    /// [`PrefixTable::new`], plus [`ConfigError::DanglingPrefix`] for a
    /// prefix naming an unregistered brand and
    /// [`ConfigError::InvalidPhoneOverride`] for a blank override.
    pub fn load(doc: SiteDocument) -> Result<Self, ConfigError> {
        let registry = BrandRegistry::load(doc.brands)?;
        let prefixes = PrefixTable::new(doc.zip_prefixes)?;

        for (prefix, brand) in prefixes.iter() {
            if !registry.contains(brand.as_str()) {
                return Err(ConfigError::DanglingPrefix {
                    prefix: prefix.to_string(),
                    brand: brand.to_string(),
                });
            }
        }

        for (source, phone) in &doc.phone_overrides {
            if source.trim().is_empty() || phone.trim().is_empty() {
                return Err(ConfigError::InvalidPhoneOverride(source.clone()));
            }
        }

        tracing::debug!(
            version = doc.version.as_deref().unwrap_or("-"),
            brands = registry.len(),
            prefixes = prefixes.len(),
            overrides = doc.phone_overrides.len(),
            default_brand = %registry.default_brand().id,
            "site configuration loaded"
        );

        Ok(Self {
            version: doc.version,
            registry,
            prefixes,
            phone_overrides: doc.phone_overrides,
        })
    }

    /// Load the built-in site document.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json_str(BUILTIN_SITE_JSON)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Self::load(serde_json::from_str(s)?)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Self::load(serde_yaml::from_str(s)?)
    }

    /// Read a document from disk. Files ending in `.json` are parsed as
    /// JSON, everything else as YAML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// Document version label, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The brand catalog.
    pub fn registry(&self) -> &BrandRegistry {
        &self.registry
    }

    /// The ZIP prefix table.
    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    /// Configured source overrides.
    pub fn phone_overrides(&self) -> &BTreeMap<String, String> {
        &self.phone_overrides
    }

    /// Resolve a ZIP to a brand id. `None` for malformed or unserved ZIPs.
    pub fn resolve(&self, zip: &str) -> Option<&BrandId> {
        self.prefixes.resolve(zip)
    }

    /// Resolve a ZIP to its brand configuration.
    pub fn route(&self, zip: &str) -> Result<&BrandConfig, RouteError> {
        let id = self.prefixes.route(zip)?;
        // Load rejects dangling prefixes, so the lookup always succeeds.
        self.registry
            .get(id.as_str())
            .ok_or_else(|| RouteError::Unserved(zip.to_string()))
    }

    /// Phone number to show for `brand` given the visitor's traffic source.
    ///
    /// Returns the override and the source that selected it, or the brand's
    /// own number with `None`.
    pub fn phone_for<'a>(
        &'a self,
        brand: &'a BrandConfig,
        source: Option<&str>,
    ) -> (&'a str, Option<&'a str>) {
        source
            .and_then(|s| self.phone_overrides.get_key_value(s))
            .map(|(s, phone)| (phone.as_str(), Some(s.as_str())))
            .unwrap_or((brand.phone.as_str(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_YAML: &str = r##"
version: test
brands:
  - id: alpha
    name: Alpha
    primaryColor: "#000000"
    ctaText: Go
    phone: 1-800-000-0001
    region: Here
  - id: beta
    name: Beta
    primaryColor: "#ffffff"
    ctaText: Go
    phone: 1-800-000-0002
    region: There
    default: true
zipPrefixes:
  - { prefix: "10", brand: alpha }
  - { prefix: "20", brand: beta }
phoneOverrides:
  google: 1-800-GOOGLE
"##;

    #[test]
    fn builtin_site_loads() {
        let site = Site::builtin().unwrap();
        assert_eq!(site.registry().len(), 4);
        assert_eq!(site.registry().default_brand().id, "safehaven");
        assert_eq!(site.phone_overrides().len(), 3);
    }

    #[test]
    fn yaml_document_loads() {
        let site = Site::from_yaml_str(MINIMAL_YAML).unwrap();
        assert_eq!(site.version(), Some("test"));
        assert_eq!(site.registry().default_brand().id, "beta");
        assert_eq!(site.resolve("10001").unwrap(), "alpha");
        assert_eq!(site.route("20001").unwrap().name, "Beta");
    }

    #[test]
    fn dangling_prefix_rejected() {
        let yaml = MINIMAL_YAML.replace("brand: beta }", "brand: gamma }");
        let err = Site::from_yaml_str(&yaml).unwrap_err();
        assert!(
            matches!(&err, ConfigError::DanglingPrefix { prefix, brand } if prefix == "20" && brand == "gamma"),
            "got {err:?}"
        );
    }

    #[test]
    fn blank_override_rejected() {
        let yaml = MINIMAL_YAML.replace("google: 1-800-GOOGLE", "google: \"\"");
        assert!(matches!(
            Site::from_yaml_str(&yaml),
            Err(ConfigError::InvalidPhoneOverride(s)) if s == "google"
        ));
    }

    #[test]
    fn malformed_document_is_config_error() {
        assert!(matches!(Site::from_yaml_str("brands: 7"), Err(ConfigError::Yaml(_))));
        assert!(matches!(Site::from_json_str("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn empty_brand_list_rejected() {
        assert!(matches!(
            Site::from_json_str(r#"{"brands": []}"#),
            Err(ConfigError::NoBrands)
        ));
    }

    #[test]
    fn phone_override_by_source() {
        let site = Site::from_yaml_str(MINIMAL_YAML).unwrap();
        let alpha = site.registry().get("alpha").unwrap();
        assert_eq!(site.phone_for(alpha, Some("google")), ("1-800-GOOGLE", Some("google")));
        assert_eq!(site.phone_for(alpha, Some("bing")), ("1-800-000-0001", None));
        assert_eq!(site.phone_for(alpha, None), ("1-800-000-0001", None));
    }

    #[test]
    fn from_path_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("site.yaml");
        std::fs::write(&yaml_path, MINIMAL_YAML).unwrap();
        assert_eq!(Site::from_path(&yaml_path).unwrap().registry().len(), 2);

        let json_path = dir.path().join("site.JSON");
        std::fs::write(&json_path, BUILTIN_SITE_JSON).unwrap();
        assert_eq!(Site::from_path(&json_path).unwrap().registry().len(), 4);
    }

    #[test]
    fn from_path_missing_file() {
        let err = Site::from_path(Path::new("/nonexistent/site.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
