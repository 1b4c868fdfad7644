//! # Validate Subcommand
//!
//! Parses each argument as an LEI and reports the outcome. Inputs are
//! taken verbatim; no trimming or case folding.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use lei_core::Lei;

use crate::{exit_code, write_json, OutputFormat};

/// Arguments for the `lei validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// LEIs to validate.
    #[arg(value_name = "LEI", required = true)]
    pub leis: Vec<String>,
}

/// Outcome of validating a single input.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// The input exactly as given.
    pub input: String,
    /// Whether the input is a valid LEI.
    pub valid: bool,
    /// LOU prefix of a valid LEI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lou_prefix: Option<String>,
    /// Rendered error for an invalid input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    fn for_input(input: &str) -> Self {
        match Lei::parse(input) {
            Ok(lei) => Self {
                input: input.to_string(),
                valid: true,
                lou_prefix: Some(lei.lou_prefix().to_string()),
                error: None,
            },
            Err(e) => {
                tracing::warn!(input, error = %e, "LEI rejected");
                Self {
                    input: input.to_string(),
                    valid: false,
                    lou_prefix: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    tracing::debug!(count = args.leis.len(), "validating LEIs");

    let reports: Vec<ValidationReport> = args
        .leis
        .iter()
        .map(|input| ValidationReport::for_input(input))
        .collect();
    let failures = reports.iter().filter(|r| !r.valid).count();

    match format {
        OutputFormat::Text => {
            for report in &reports {
                match &report.error {
                    None => writeln!(out, "OK: {}", report.input)?,
                    Some(e) => writeln!(out, "FAIL: {}: {e}", report.input)?,
                }
            }
        }
        OutputFormat::Json => write_json(out, &reports)?,
    }

    Ok(exit_code(failures))
}
