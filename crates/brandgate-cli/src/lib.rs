//! # brandgate-cli: Operator Command-Line Interface
//!
//! Provides the `brandgate` binary for checking a site document before it
//! is deployed and for answering "which brand serves this ZIP?" without
//! starting the HTTP service.
//!
//! ## Subcommands
//!
//! - `brandgate resolve <ZIP>...`: Route ZIPs to brands.
//! - `brandgate brands`: List the brand catalog.
//! - `brandgate validate <PATH>`: Load and check a site document.
//!
//! ```bash
//! brandgate resolve 28201 35201
//! brandgate --config deploy/site.yaml brands --json
//! brandgate validate deploy/site.yaml
//! ```
//!
//! Handlers return the process exit code: 0 on success, 1 when the input
//! was rejected, 2 on operational errors (reported by `main`).

pub mod brands;
pub mod resolve;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use brandgate_core::Site;

/// Load the site from `config`, or the built-in document when unset.
pub fn load_site(config: Option<&Path>) -> Result<Site> {
    match config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading site document");
            Site::from_path(path)
                .with_context(|| format!("failed to load site document {}", path.display()))
        }
        None => Site::builtin().context("built-in site document is invalid"),
    }
}
