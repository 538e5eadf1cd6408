//! BBR Seasons CLI
//!
//! Extracts per-season rows from saved player pages and writes per-player
//! and combined CSV files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bbr_core::io::load_roster;
use bbr_core::{BbrError, ExtractConfig, SeasonExtractor};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "bbr-seasons")]
#[command(about = "Extract and join season tables from saved Basketball-Reference pages", long_about = None)]
struct Cli {
    /// TOML config file (all keys optional)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Drop seasons starting before this year
    #[arg(long, global = true)]
    min_year: Option<i32>,

    /// Season column to read from the contract table (e.g. "2018-19")
    #[arg(long, global = true)]
    contract_season: Option<String>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every roster player, then write the combined CSV
    Run,

    /// Rebuild the combined CSV from existing per-player files
    Combine,

    /// Print one player's joined seasons as JSON without writing files
    Show {
        /// Player ID, e.g. "jordami01"
        bbr_id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let roster = load_roster(&config.paths.roster)
        .with_context(|| format!("failed to load roster {}", config.paths.roster.display()))?;
    info!(players = roster.len(), "loaded roster");

    match cli.command {
        Commands::Run => {
            let extractor = SeasonExtractor::from_config(config)?;
            let summary = extractor.run(&roster)?;
            info!(
                players = summary.players,
                seasons = summary.seasons,
                "extraction finished"
            );
        }
        Commands::Combine => {
            let extractor = SeasonExtractor::new(config, Default::default());
            let rows = extractor.combine(&roster)?;
            info!(rows, "combine finished");
        }
        Commands::Show { bbr_id } => {
            let player = roster
                .iter()
                .find(|p| p.bbr_id == bbr_id)
                .ok_or_else(|| BbrError::PlayerNotFound(bbr_id.clone()))?;
            let extractor = SeasonExtractor::from_config(config)?;
            let seasons = extractor.load_player(player)?;
            println!("{}", serde_json::to_string_pretty(&seasons)?);
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<ExtractConfig> {
    let mut config = match &cli.config {
        Some(path) => ExtractConfig::load(path)?,
        None => ExtractConfig::default(),
    };
    if let Some(min_year) = cli.min_year {
        config.min_year = min_year;
    }
    if let Some(season) = &cli.contract_season {
        config.contract_season = season.clone();
    }
    Ok(config)
}

/// Log to stderr so `show` output stays clean on stdout.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose {
        "bbr_core=debug,bbr_seasons=debug,warn"
    } else {
        "bbr_core=info,bbr_seasons=info,warn"
    };

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
