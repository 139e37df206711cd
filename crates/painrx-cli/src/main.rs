//! painrx console entry point.
//!
//! Loads the catalog once at startup, then runs either the interactive
//! user flow (profile + pains → recommendation) or the admin catalog
//! editor, chosen by a mode prompt.

mod admin;
mod prompt;
mod user;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use painrx_core::Catalog;

#[derive(Parser)]
#[command(name = "painrx")]
#[command(about = "Drug recommendation console over a flat-file catalog")]
struct Cli {
    /// Catalog file (tab-delimited; the legacy .csv name is kept)
    #[arg(short, long, default_value = "drugs.csv")]
    catalog: PathBuf,

    /// Also print the user-mode recommendation as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    tracing::debug!(catalog = %cli.catalog.display(), "painrx starting");

    let catalog = match Catalog::load(&cli.catalog) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("failed to load catalog {}: {err}", cli.catalog.display());
            return ExitCode::FAILURE;
        }
    };

    match run(cli, catalog) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, mut catalog: Catalog) -> anyhow::Result<()> {
    // Any answer other than 2 runs the user flow.
    let mode = prompt::read_u32("Select mode (1: user, 2: admin): ")?;
    if mode == 2 {
        admin::run(&mut catalog, &cli.catalog)
    } else {
        user::run(&catalog, cli.json)
    }
}
