//! # Authority Subcommand
//!
//! Registration authority lookups against the compiled-in table.

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use lei_core::{registration_authorities, RegistrationAuthority};

use crate::{exit_code, write_json, OutputFormat};

/// Arguments for the `lei authority` subcommand.
#[derive(Args, Debug)]
pub struct AuthorityArgs {
    #[command(subcommand)]
    pub command: AuthorityCommand,
}

/// Authority subcommands.
#[derive(Subcommand, Debug)]
pub enum AuthorityCommand {
    /// Check whether codes are listed registration authorities.
    Check {
        /// Codes of the form RA followed by six digits.
        #[arg(value_name = "CODE", required = true)]
        codes: Vec<String>,
    },

    /// List every known registration authority code in ascending order.
    List,
}

#[derive(Debug, Serialize)]
struct AuthorityReport<'a> {
    input: &'a str,
    authority: RegistrationAuthority,
    known: bool,
    placeholder: bool,
}

/// Execute the authority subcommand.
pub fn run_authority(args: &AuthorityArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    match &args.command {
        AuthorityCommand::Check { codes } => cmd_check(codes, format, out),
        AuthorityCommand::List => cmd_list(format, out),
    }
}

fn cmd_check(codes: &[String], format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let reports: Vec<AuthorityReport<'_>> = codes
        .iter()
        .map(|code| {
            let authority = RegistrationAuthority::classify(code);
            AuthorityReport {
                input: code,
                authority,
                known: authority.is_known(),
                placeholder: authority.is_placeholder(),
            }
        })
        .collect();
    let failures = reports.iter().filter(|r| !r.known).count();

    match format {
        OutputFormat::Text => {
            for report in &reports {
                if report.known {
                    writeln!(out, "OK: {}", report.authority)?;
                } else {
                    tracing::warn!(code = report.input, "unknown registration authority");
                    writeln!(out, "FAIL: unknown registration authority: {}", report.input)?;
                }
            }
        }
        OutputFormat::Json => write_json(out, &reports)?,
    }

    Ok(exit_code(failures))
}

fn cmd_list(format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let table = registration_authorities();
    tracing::debug!(count = table.len(), "listing registration authorities");

    match format {
        OutputFormat::Text => {
            for code in table {
                writeln!(out, "{code}")?;
            }
        }
        OutputFormat::Json => write_json(out, table)?,
    }

    Ok(0)
}
