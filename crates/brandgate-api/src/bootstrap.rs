//! # Site Bootstrap
//!
//! Loads the site configuration at startup and builds the [`AppState`].
//!
//! ## Bootstrap Sequence
//!
//! 1. **Locate document**: `BRAND_CONFIG` path if set, else the built-in site.
//! 2. **Validate**: brand registry, prefix table, phone overrides.
//! 3. **Log site identity**: structured startup summary.
//!
//! Any failure aborts startup: a server that cannot load its brands cannot
//! answer a single request.

use brandgate_core::{ConfigError, Site};

use crate::state::{AppConfig, AppState};

/// Errors during site bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The site document at `path` is unusable.
    #[error("invalid site configuration {path}: {source}")]
    InvalidSite {
        path: String,
        #[source]
        source: ConfigError,
    },
}

/// Load the configured site and build application state.
pub fn bootstrap(config: AppConfig) -> Result<AppState, BootstrapError> {
    let (origin, loaded) = match &config.site_path {
        Some(path) => (path.display().to_string(), Site::from_path(path)),
        None => ("<built-in>".to_string(), Site::builtin()),
    };
    let site = loaded.map_err(|source| BootstrapError::InvalidSite {
        path: origin.clone(),
        source,
    })?;

    tracing::info!(
        source = %origin,
        version = site.version().unwrap_or("-"),
        brands = site.registry().len(),
        zip_prefixes = site.prefixes().len(),
        default_brand = %site.registry().default_brand().id,
        "site configuration loaded"
    );

    Ok(AppState::with_site(site, config))
}
