//! projgen CLI - inspect the products of an extracted build graph

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("projgen=debug")
    } else {
        EnvFilter::new("projgen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Products(args) => commands::products::execute(args),
        Commands::Inputs(args) => commands::inputs::execute(args),
        Commands::Check(args) => commands::check::execute(args, cli.no_color),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
