//! Lavash CLI - Menu validation and database tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate a menu document and print what it contains
//! lavash-cli catalog check products.json
//!
//! # Fail when a product has no usable price
//! lavash-cli catalog check products.json --strict
//!
//! # Create the session table used by the storefront
//! lavash-cli migrate
//! ```
//!
//! # Commands
//!
//! - `catalog check` - Validate a menu document
//! - `migrate` - Run session store migrations

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lavash-cli")]
#[command(author, version, about = "Lavash CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with the menu document
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Run session store migrations
    Migrate,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Validate a menu document and print a summary
    Check {
        /// Path of the menu document
        #[arg(default_value = "products.json")]
        path: PathBuf,

        /// Treat products without a usable price as an error
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Check { path, strict } => commands::catalog::check(&path, strict)?,
        },
        Commands::Migrate => commands::migrate::sessions().await?,
    }
    Ok(())
}
