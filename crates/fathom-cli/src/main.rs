//! Fathom CLI - route prompts and calibrate the complexity router

use anyhow::Result;
use clap::Parser as _;
use cli::{Cli, Commands};
use console::Term;
use std::io;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod handlers;

/// Log to stderr so stdout stays clean for reports and JSON.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let router = handlers::load_router(cli.config.as_deref())?;
    let term = Term::stdout();

    match cli.command {
        Commands::Route {
            prompt,
            json,
            explain,
        } => handlers::handle_route(&term, &router, &prompt, json, explain),
        Commands::Evaluate {
            corpus,
            filter,
            failures_only,
        } => handlers::handle_evaluate(
            &term,
            &router,
            corpus.as_deref(),
            filter.as_deref(),
            failures_only,
        ),
    }
}
