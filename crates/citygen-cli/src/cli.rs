//! CLI argument definitions using clap.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use citygen::LookupField;

/// Example invocation shown after a usage mistake.
pub const USAGE_EXAMPLE: &str = "Example: citygen convert cities.csv city_data.h";

/// citygen: compile city coordinate tables into firmware lookup sources
#[derive(Debug, Parser)]
#[command(name = "citygen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a city table into a header and lookup implementation
    Convert {
        /// Path to the city table (CSV)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Path of the generated header; the implementation is written beside it
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Cell delimiter: a single character, "tab", or "auto"
        #[arg(short, long, default_value = ",")]
        delimiter: String,

        /// Number of skipped rows to list before suppressing the rest
        #[arg(long, default_value = "10")]
        max_diagnostics: usize,
    },

    /// Validate a city table and summarize it without writing anything
    Check {
        /// Path to the city table (CSV)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Cell delimiter: a single character, "tab", or "auto"
        #[arg(short, long, default_value = ",")]
        delimiter: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Query a city table the way the generated lookup functions will
    Lookup {
        /// Path to the city table (CSV)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Name to search for
        #[arg(value_name = "QUERY")]
        query: String,

        /// Field to match against (city or admin)
        #[arg(long, default_value = "city")]
        by: LookupField,

        /// Cell delimiter: a single character, "tab", or "auto"
        #[arg(short, long, default_value = ",")]
        delimiter: String,
    },
}

/// Whether an argument error is a usage mistake (wrong arity, unknown flag,
/// bad value) rather than requested help or version output.
///
/// Neither case is a failure: the process prints what clap reports and
/// exits 0. Usage mistakes are followed by [`USAGE_EXAMPLE`].
pub fn is_usage_mistake(kind: ErrorKind) -> bool {
    !matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}
