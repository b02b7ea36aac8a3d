//! # Validate Subcommand
//!
//! Loads a site document the same way the HTTP service does at startup
//! and reports either a one-line summary or the first configuration error.
//! A document that passes here will not abort service startup.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use brandgate_core::{ConfigError, Site};

/// Arguments for the `brandgate validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Site document to check (`.json`, otherwise YAML).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns 0 when the document loads, 1 on any [`ConfigError`].
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    match check(&args.path) {
        Ok(summary) => {
            println!("OK: {} ({summary})", args.path.display());
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {}: {e}", args.path.display());
            tracing::warn!(path = %args.path.display(), error = %e, "site document rejected");
            Ok(1)
        }
    }
}

fn check(path: &std::path::Path) -> Result<String, ConfigError> {
    let site = Site::from_path(path)?;
    Ok(summarize(&site))
}

fn summarize(site: &Site) -> String {
    format!(
        "version {}, {} brands, {} ZIP prefixes, {} phone overrides, default {}",
        site.version().unwrap_or("-"),
        site.registry().len(),
        site.prefixes().len(),
        site.phone_overrides().len(),
        site.registry().default_brand().id
    )
}
