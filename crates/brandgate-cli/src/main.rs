//! # brandgate CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brandgate_cli::brands::{run_brands, BrandsArgs};
use brandgate_cli::load_site;
use brandgate_cli::resolve::{run_resolve, ResolveArgs};
use brandgate_cli::validate::{run_validate, ValidateArgs};

/// brandgate: ZIP-to-brand routing for the multi-brand marketing site.
#[derive(Parser, Debug)]
#[command(name = "brandgate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site document to use instead of the built-in one.
    #[arg(long, global = true, env = "BRAND_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Route ZIP codes to the brands serving them.
    Resolve(ResolveArgs),

    /// List configured brands.
    Brands(BrandsArgs),

    /// Check a site document without starting the service.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Resolve(args) => {
            load_site(cli.config.as_deref()).and_then(|site| run_resolve(&args, &site))
        }
        Commands::Brands(args) => {
            load_site(cli.config.as_deref()).and_then(|site| run_brands(&args, &site))
        }
        Commands::Validate(args) => run_validate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
