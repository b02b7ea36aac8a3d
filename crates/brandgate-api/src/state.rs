//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The [`Site`] is loaded once by bootstrap and shared read-only behind an
//! `Arc`. There is no process-wide "current brand": handlers that need one
//! open their own selection from the registry for the duration of the
//! request.

use std::path::PathBuf;
use std::sync::Arc;

use brandgate_core::{ConfigError, Site};

/// Runtime configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// Site document to load instead of the built-in one.
    pub site_path: Option<PathBuf>,
    /// Emit JSON log lines instead of human-readable ones.
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            site_path: None,
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Build configuration from `PORT`, `BRAND_CONFIG` and `LOG_FORMAT`.
    ///
    /// An unparseable `PORT` falls back to 8080; an empty `BRAND_CONFIG`
    /// is treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);
        let site_path = lookup("BRAND_CONFIG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let log_json = lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));
        Self {
            port,
            site_path,
            log_json,
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub site: Arc<Site>,
    pub config: AppConfig,
}

impl AppState {
    /// State over the built-in site with default configuration.
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self::with_site(Site::builtin()?, AppConfig::default()))
    }

    /// State over an already-loaded site.
    pub fn with_site(site: Site, config: AppConfig) -> Self {
        Self {
            site: Arc::new(site),
            config,
        }
    }
}
