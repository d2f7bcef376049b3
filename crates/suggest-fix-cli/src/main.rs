//! suggest-fix CLI - rewrite grammar-engine suggestions from the command line.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use suggest_fix::{FixerConfig, SuggestionFixer};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            FixerConfig::load(path)?
        }
        None => FixerConfig::default(),
    };
    let fixer = SuggestionFixer::new().with_config(config);

    match cli.command {
        Commands::Fix { rule, suggestion } => commands::fix::run(&fixer, &rule, &suggestion),
        Commands::Batch { file, json } => commands::batch::run(&fixer, file, json, cli.verbose),
        Commands::Rules { json } => commands::rules::run(&fixer, json),
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` turns on library debug logs.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("suggest_fix=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
