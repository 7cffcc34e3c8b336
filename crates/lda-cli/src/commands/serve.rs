//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use lda_web::server::{ServerConfig, DEFAULT_HOST};
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on; the next port is tried once if this one is taken
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "LDA_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Debug mode: enabled only when the value is "true" (any case)
    #[arg(
        long,
        env = "DEBUG",
        default_value = "True",
        value_parser = parse_flag,
        action = clap::ArgAction::Set
    )]
    pub debug: bool,

    /// HTML file served at /
    #[arg(long, env = "LDA_FRONTEND", default_value = "index.html")]
    pub frontend: PathBuf,
}

/// Truthy only for a case-insensitive "true"; everything else is false.
fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(value.eq_ignore_ascii_case("true"))
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    println!();
    println!(
        "  {} {}",
        "Legal Document Analyzer".cyan().bold(),
        "Backend".bold()
    );
    println!();
    println!("  {}       {}", "Port".green(), args.port);
    println!(
        "  {} {}",
        "Debug mode".green(),
        if args.debug { "on".yellow() } else { "off".dimmed() }
    );
    println!("  {}        http://{}:{}", "URL".green(), args.host, args.port);
    println!(
        "  {}     http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        frontend_path: args.frontend,
    };
    lda_web::run_server(config).await?;

    Ok(())
}
