/// Command-line interface definitions.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "maintenance-advisor")]
#[command(about = "Rule-based vehicle maintenance advice")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing advisor.toml
    #[arg(short, long, global = true, default_value = ".")]
    pub config: PathBuf,

    /// Verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a vehicle and print the advice report as JSON
    Advise {
        /// Request JSON file, or "-" for stdin
        #[arg(short, long, conflicts_with = "demo")]
        request: Option<PathBuf>,

        /// Use the built-in demo vehicle
        #[arg(long)]
        demo: bool,

        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// List the rule set
    Rules,

    /// Write a default advisor.toml into the config directory
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
