use clap::{Parser, Subcommand};
use regionmatch_core::{Axis, RegionGroup};
use std::path::PathBuf;

/// CLI arguments for regionmatch
#[derive(Debug, Parser)]
#[command(
    name = "regionmatch",
    version,
    about = "Find the European countries most like a US state, and vice versa"
)]
pub struct CliArgs {
    /// Custom dataset (.json, .json.gz, .bin or .bin.gz); defaults to the bundled one
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Settings file (JSON) with defaults for axis, gdp_mode, land_unit and candidates
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Display and ranking options shared by `show` and `compare`.
#[derive(Debug, Clone, clap::Args)]
pub struct ViewArgs {
    /// Show and rank GDP per person
    #[arg(long = "per-capita")]
    pub per_capita: bool,

    /// Show land area in square kilometres instead of square miles
    #[arg(long = "metric")]
    pub metric: bool,

    /// Pool to search the name in (us or eu); needed for names both pools share
    #[arg(short = 'g', long = "group")]
    pub group: Option<RegionGroup>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List all regions, optionally of one pool
    List {
        /// us or eu
        #[arg(short = 'g', long = "group")]
        group: Option<RegionGroup>,
    },

    /// Show the stats of one region
    Show {
        name: String,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Compare a region with its nearest regions from the other pool
    Compare {
        name: String,

        /// Ranking axis: land, pop, gdp or hdi
        #[arg(short = 'b', long = "by")]
        by: Option<Axis>,

        /// Number of regions to show next to the selected one
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,

        /// Print the table as JSON
        #[arg(long = "json")]
        json: bool,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Suggest region names for a prefix (case-insensitive)
    Suggest {
        text: String,
    },

    /// Write the loaded dataset as a binary snapshot (.bin or .bin.gz)
    Export {
        out: PathBuf,
    },

    /// Start an interactive session on stdin
    Interactive,
}
