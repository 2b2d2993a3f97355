use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{DivisionMode, Radix, ReconstructConfig, Selection};

/// Validates a radix argument (must be at least 2)
fn validate_radix(s: &str) -> Result<Radix, String> {
    Radix::parse(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "shamir-recover")]
#[command(about = "Recover Shamir secrets from shares encoded in arbitrary bases")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconstruct the secret of one or more share documents
    Reconstruct {
        /// JSON share documents (reads one document from stdin when omitted)
        files: Vec<PathBuf>,

        /// Use exact rational arithmetic instead of truncating division
        #[arg(long)]
        exact: bool,

        /// Interpolate through every share instead of the first k by index
        #[arg(long)]
        all_points: bool,

        /// Print one JSON summary per document instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Decode a value written in the given base
    Decode {
        /// Base the value is written in
        #[arg(short, long, value_parser = validate_radix)]
        base: Radix,

        /// Digits of the value
        digits: String,
    },
    /// Encode a decimal value in the given base (2-36)
    Encode {
        /// Target base
        #[arg(short, long, value_parser = validate_radix)]
        base: Radix,

        /// Non-negative decimal value
        value: String,
    },
}

/// Builds the reconstruction settings selected by `reconstruct` flags
#[must_use]
pub fn reconstruct_config(exact: bool, all_points: bool) -> ReconstructConfig {
    let division = if exact {
        DivisionMode::Exact
    } else {
        DivisionMode::Truncating
    };
    let selection = if all_points {
        Selection::All
    } else {
        Selection::LowestIndices
    };
    ReconstructConfig::new(division, selection)
}
