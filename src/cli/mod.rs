pub mod generate;
pub mod init;
pub mod summary;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::SpendProfile;

#[derive(Parser)]
#[command(name = "spendsim", about = "Generate synthetic credit-card transactions.")]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Settings file (default: <config dir>/spendsim/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a year of transactions and write them to CSV.
    Generate(GenerateArgs),
    /// Summarize a previously generated CSV file.
    Summary {
        /// Path to the CSV file
        file: PathBuf,
    },
    /// Write a settings file populated with defaults.
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<String>,
    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of synthetic users
    #[arg(long)]
    pub users: Option<u32>,
    /// Calendar year to simulate
    #[arg(long)]
    pub year: Option<i32>,
    /// Spend-range table: per-tier or one flat table
    #[arg(long, value_enum)]
    pub profile: Option<SpendProfile>,
    /// Upper bound on ordinary purchases per user per day
    #[arg(long = "max-daily")]
    pub max_daily: Option<u32>,
    /// Rows to print after writing (0 disables)
    #[arg(long)]
    pub preview: Option<usize>,
    /// Keep rows in generation order
    #[arg(long = "no-shuffle")]
    pub no_shuffle: bool,
    /// Print per-category totals after writing
    #[arg(long)]
    pub summary: bool,
}
