//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// projgen - IDE project generation from an extracted build graph
#[derive(Parser)]
#[command(name = "projgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble and show the Products group
    Products(ProductsArgs),

    /// List each target's input files
    Inputs(InputsArgs),

    /// Check a project spec for dangling references and duplicate products
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ProductsArgs {
    /// Project spec (JSON) produced by the build-graph extractor
    pub file: PathBuf,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct InputsArgs {
    /// Project spec (JSON) produced by the build-graph extractor
    pub file: PathBuf,

    /// Only list this target
    #[arg(long)]
    pub target: Option<String>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Project spec (JSON) produced by the build-graph extractor
    pub file: PathBuf,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
