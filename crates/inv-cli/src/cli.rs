//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use inv_core::DEFAULT_ITERATIONS;

#[derive(Parser, Debug)]
#[command(name = "alien-invasion")]
#[command(version, about = "Aliens wander a map of cities and destroy every city where two of them meet", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log deployment progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log every placement, tick, and the post-deployment map
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a simulation over a map file
    Run(RunArgs),

    /// Write a fully connected grid map
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Map file, one city per line: `<name> [<direction>=<neighbor>]*`
    pub map: PathBuf,

    /// Number of aliens to deploy
    pub aliens: u32,

    /// Maximum number of ticks to run
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u64,

    /// RNG seed (defaults to the current time)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory to write destructions.csv and summary.csv into
    #[arg(long, value_name = "DIR")]
    pub events_csv: Option<PathBuf>,

    /// Print what is left of the map when the run ends
    #[arg(long)]
    pub print_map: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output file
    #[arg(short, long)]
    pub out: PathBuf,

    /// Number of columns
    #[arg(long, default_value_t = 5)]
    pub width: u32,

    /// Number of rows
    #[arg(long, default_value_t = 5)]
    pub height: u32,
}
