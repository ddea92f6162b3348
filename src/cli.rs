use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Skua oil-slick verification scorer.
#[derive(Parser)]
#[command(
    name = "skua",
    version,
    about = "Multi-scale verification of simulated oil-slick footprints"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Score one observation against a simulation run.
    Score(ScoreArgs),
    /// Rank several observations and keep the most comparable one.
    Select(SelectArgs),
}

/// Arguments for the `score` subcommand.
#[derive(clap::Args)]
pub struct ScoreArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "skua.toml")]
    pub config: PathBuf,

    /// Path to the observation GeoJSON file.
    #[arg(long)]
    pub observation: PathBuf,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `select` subcommand.
#[derive(clap::Args)]
pub struct SelectArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "skua.toml")]
    pub config: PathBuf,

    /// Paths to candidate observation GeoJSON files.
    #[arg(long, num_args = 1.., required = true)]
    pub observations: Vec<PathBuf>,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
