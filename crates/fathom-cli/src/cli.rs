use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the fathom CLI
#[derive(Debug, Parser)]
#[command(name = "fathom")]
#[command(version, about = "Route prompts to a strong or weak model by estimated complexity", long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Router configuration (TOML) overriding threshold, weights or ceilings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Route a single prompt
    Route {
        /// Prompt text; several arguments are joined with spaces
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Show how each feature contributed to the score
        #[arg(short, long)]
        explain: bool,
    },

    /// Evaluate the router against a labelled corpus
    Evaluate {
        /// Corpus TOML file; defaults to the built-in corpus
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Only evaluate cases whose prompt, category or reason contains this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Only list mismatched cases
        #[arg(long)]
        failures_only: bool,
    },
}
