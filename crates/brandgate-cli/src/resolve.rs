//! # Resolve Subcommand
//!
//! Routes each ZIP on the command line and prints one line per ZIP:
//!
//! ```text
//! 28201 -> safehaven (SafeHaven Security, 1-800-555-0128)
//! 99999 -> Sorry, we do not serve your area yet.
//! ```

use anyhow::Result;
use clap::Args;

use brandgate_core::Site;

/// Arguments for the `brandgate resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// ZIP codes to route.
    #[arg(value_name = "ZIP", required = true)]
    pub zips: Vec<String>,
}

/// Execute the resolve subcommand.
///
/// Returns 1 when any ZIP was malformed or unserved.
pub fn run_resolve(args: &ResolveArgs, site: &Site) -> Result<u8> {
    let mut rejected = 0usize;
    for zip in &args.zips {
        let (line, ok) = describe(site, zip);
        println!("{line}");
        if !ok {
            rejected += 1;
        }
    }

    tracing::info!(total = args.zips.len(), rejected, "resolve finished");
    Ok(u8::from(rejected > 0))
}

/// One output line for `zip` and whether it routed.
fn describe(site: &Site, zip: &str) -> (String, bool) {
    match site.route(zip) {
        Ok(brand) => (
            format!("{zip} -> {} ({}, {})", brand.id, brand.name, brand.phone),
            true,
        ),
        Err(e) => {
            tracing::debug!(error = %e, "ZIP rejected");
            (format!("{zip} -> {}", e.user_message()), false)
        }
    }
}
