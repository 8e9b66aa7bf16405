//! # Bodega Terminal Entry Point
//!
//! The interactive console application for Bodega POS.
//!
//! ## Application Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                       Bodega Terminal                          │
//! │                                                                │
//! │  main.rs ────► args, logging, optional seed load               │
//! │                                                                │
//! │  menu.rs ────► main menu / inventory menu / point-of-sale loop │
//! │                                                                │
//! │  input.rs ───► line prompts with parse-and-retry               │
//! │                                                                │
//! │  seed.rs ────► demo catalog from a JSON file                   │
//! │                                                                │
//! │                         │                                      │
//! │                         ▼                                      │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                     bodega-core                          │  │
//! │  │      Catalog (bounded list) + CheckoutSession (cart)     │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Parse CLI arguments
//! 2. Initialize tracing (logging)
//! 3. Create the catalog, optionally seeded from `--seed <file>`
//! 4. Run the main menu loop until the operator exits

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bodega_core::Catalog;

mod error;
mod input;
mod menu;
mod seed;

use error::AppError;

/// Console point of sale for a small product catalog.
#[derive(Debug, Parser)]
#[command(name = "bodega", version, about)]
struct Args {
    /// JSON file of demo products loaded into the catalog at startup
    #[arg(long, value_name = "FILE")]
    seed: Option<std::path::PathBuf>,

    /// Maximum number of products the catalog holds
    #[arg(long, value_name = "N", default_value_t = bodega_core::MAX_CATALOG_PRODUCTS)]
    catalog_capacity: usize,
}

fn main() {
    let args = Args::parse();

    // RUST_LOG overrides; rejected operations show up at debug level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bodega=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        error!("{err}");
        eprintln!("bodega: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut catalog = Catalog::with_capacity(args.catalog_capacity);

    if let Some(path) = &args.seed {
        let loaded = seed::load_into(&mut catalog, path)?;
        info!(products = loaded, path = %path.display(), "Catalog seeded");
    }

    menu::run(&mut catalog)?;
    info!("Session ended");
    Ok(())
}
