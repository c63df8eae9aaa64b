//! League Simulator CLI
//!
//! Schedules and plays a round-robin season in-process and prints the
//! table, results and title odds.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use league_core::{EngineConfig, League, MatchSimulator, TeamRegistry};

mod report;

#[derive(Parser)]
#[command(name = "league_sim")]
#[command(about = "Simulate a double round-robin football league", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full home-and-away schedule
    Fixtures {
        /// JSON file with [{"name": ..., "strength": ...}]; default clubs otherwise
        #[arg(long)]
        teams: Option<PathBuf>,
    },

    /// Play a season (or part of one) and print the table
    Simulate {
        #[arg(long)]
        teams: Option<PathBuf>,

        /// Engine config JSON; LEAGUE_SIM_PROFILE preset otherwise
        #[arg(long)]
        config: Option<PathBuf>,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Weeks to play; whole season if omitted
        #[arg(long)]
        weeks: Option<u32>,

        /// Emit the league snapshot as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Sample the match model for one pairing
    Match {
        /// Home strength (1-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
        home: u8,

        /// Away strength (1-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
        away: u8,

        #[arg(long, default_value_t = 10_000)]
        trials: u32,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Deserialize)]
struct TeamEntry {
    name: String,
    strength: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fixtures { teams } => {
            let mut league = League::new(load_registry(teams.as_deref())?, EngineConfig::default());
            league.generate_fixtures().context("Failed to generate fixtures")?;
            report::print_fixtures(&league);
        }

        Commands::Simulate { teams, config, seed, weeks, json } => {
            let config = load_config(config.as_deref())?;
            let mut league = League::new(load_registry(teams.as_deref())?, config);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            league.generate_fixtures().context("Failed to generate fixtures")?;
            let to_play = weeks.unwrap_or(league.season().total_weeks);
            info!(seed, weeks = to_play, "simulating");

            for _ in 0..to_play {
                if league.season().completed {
                    break;
                }
                let played = league.play_next_week(&mut rng)?;
                debug!(week = league.season().current_week, matches = played.len(), "week done");
            }

            if json {
                let snapshot = league.snapshot();
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                report::print_results(&league);
                report::print_table(&league.standings());
                report::print_predictions(&league.predictions(), league.remaining_weeks());
            }
        }

        Commands::Match { home, away, trials, seed, config } => {
            let config = load_config(config.as_deref())?;
            let simulator = MatchSimulator::new(config.simulation);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let summary = report::sample_pairing(&simulator, home, away, trials, &mut rng);
            report::print_pairing(home, away, &summary);
        }
    }

    Ok(())
}

fn load_registry(path: Option<&Path>) -> Result<TeamRegistry> {
    let Some(path) = path else {
        return Ok(TeamRegistry::with_default_teams());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read teams file {}", path.display()))?;
    let entries: Vec<TeamEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid teams file {}", path.display()))?;

    let mut registry = TeamRegistry::new();
    for entry in entries {
        registry
            .create(&entry.name, entry.strength)
            .with_context(|| format!("Rejected team {:?}", entry.name))?;
    }
    Ok(registry)
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            EngineConfig::from_json_str(&raw)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => EngineConfig::from_env_or_default(),
    };
    config.validate()?;
    Ok(config)
}
