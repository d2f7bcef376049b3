//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// suggest-fix: clean up grammar-engine replacement suggestions
#[derive(Parser)]
#[command(name = "suggest-fix")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file (e.g. to disable rules)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite a single suggestion
    Fix {
        /// Rule id reported by the grammar engine
        #[arg(short, long)]
        rule: String,

        /// Raw suggestion text
        #[arg(value_name = "SUGGESTION", allow_hyphen_values = true)]
        suggestion: String,
    },

    /// Rewrite a JSON array of {"rule_id", "suggestion"} objects
    Batch {
        /// Path to the JSON input, or "-" for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered fix rules
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
