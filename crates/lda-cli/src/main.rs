//! LDA CLI - Legal Document Analyzer
//!
//! Runs the mock analysis backend or analyzes a single document offline.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod extract;

use commands::{Cli, Commands};

/// Initialize tracing.
///
/// `RUST_LOG` takes precedence. Otherwise debug mode raises the workspace
/// crates and request tracing to debug level. When `stdout_reserved` is true
/// all output goes to stderr without ANSI codes so piped JSON stays clean.
fn init_tracing(debug: bool, stdout_reserved: bool) {
    let default_filter = if debug {
        "lda=debug,lda_web=debug,lda_core=debug,tower_http=debug"
    } else {
        "lda=info,lda_web=info,lda_core=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if stdout_reserved {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let debug = match &cli.command {
        Commands::Serve(args) => args.debug || cli.verbose,
        Commands::Analyze(_) => cli.verbose,
    };
    let stdout_reserved = matches!(&cli.command, Commands::Analyze(_));
    init_tracing(debug, stdout_reserved);

    cli.execute().await
}
