//! # lei CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lei_cli::authority::{run_authority, AuthorityArgs};
use lei_cli::checksum::{run_checksum, run_complete, ChecksumArgs, CompleteArgs};
use lei_cli::generate::{run_generate, GenerateArgs};
use lei_cli::validate::{run_validate, ValidateArgs};
use lei_cli::OutputFormat;

/// Legal Entity Identifier toolkit.
///
/// Validates LEIs and their ISO 7064 check digits, classifies registration
/// authority codes, and generates random LEIs for test fixtures. Nothing is
/// looked up against GLEIF.
#[derive(Parser, Debug)]
#[command(name = "lei", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, global = true)]
    json_logs: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one or more LEIs.
    Validate(ValidateArgs),

    /// Generate random, checksum-valid LEIs for testing.
    Generate(GenerateArgs),

    /// Compute the ISO 7064 Mod 97-10 residue of a string.
    Checksum(ChecksumArgs),

    /// Append check digits to an 18-character LEI base.
    Complete(CompleteArgs),

    /// Check or list registration authority codes.
    Authority(AuthorityArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout carries only results.
    if cli.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "lei CLI starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, cli.format, &mut out),
        Commands::Generate(args) => run_generate(args, cli.format, &mut out),
        Commands::Checksum(args) => run_checksum(args, cli.format, &mut out),
        Commands::Complete(args) => run_complete(args, cli.format, &mut out),
        Commands::Authority(args) => run_authority(args, cli.format, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
