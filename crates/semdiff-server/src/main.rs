//! Semdiff Server Binary
//!
//! Cross-lingual semantic diff service: segments two article versions
//! into sentences, embeds them in a shared vector space, and flags
//! sentences on either side without a sufficiently similar counterpart.

// Force-link semdiff-providers so linkme provider registrations are included
extern crate semdiff_providers;

use clap::Parser;

use semdiff_server::run;

/// Command line interface for the semdiff server
#[derive(Parser, Debug)]
#[command(name = "semdiff-server")]
#[command(about = "Cross-lingual semantic diff service")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to ./semdiff.toml)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
