//! # Brands Subcommand
//!
//! Lists the brand catalog in configuration order. The default brand is
//! marked with `*`. `--json` prints the records as a JSON array instead.

use anyhow::{Context, Result};
use clap::Args;

use brandgate_core::{BrandRegistry, Site};

/// Arguments for the `brandgate brands` subcommand.
#[derive(Args, Debug)]
pub struct BrandsArgs {
    /// Print brand records as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the brands subcommand.
pub fn run_brands(args: &BrandsArgs, site: &Site) -> Result<u8> {
    let registry = site.registry();
    if args.json {
        let out = serde_json::to_string_pretty(registry.brands())
            .context("failed to serialize brands")?;
        println!("{out}");
    } else {
        for line in table(registry) {
            println!("{line}");
        }
    }
    Ok(0)
}

fn table(registry: &BrandRegistry) -> Vec<String> {
    let default_id = &registry.default_brand().id;
    let width = registry
        .ids()
        .map(|id| id.as_str().len())
        .max()
        .unwrap_or(0);
    registry
        .brands()
        .iter()
        .map(|b| {
            let mark = if &b.id == default_id { '*' } else { ' ' };
            format!(
                "{mark} {:<width$}  {}  {}  {}",
                b.id.as_str(),
                b.name,
                b.phone,
                b.region
            )
        })
        .collect()
}
