//! # Checksum and Complete Subcommands
//!
//! `lei checksum` prints the raw Mod 97-10 residue of any alphanumeric
//! string. `lei complete` turns an 18-character base into a full LEI.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use lei_core::{mod97, Lei};

use crate::{write_json, OutputFormat};

/// Arguments for the `lei checksum` subcommand.
#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// String of digits and uppercase letters.
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: String,
}

/// Arguments for the `lei complete` subcommand.
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// The first 18 characters of an LEI.
    #[arg(value_name = "BASE", allow_hyphen_values = true)]
    pub base: String,
}

#[derive(Debug, Serialize)]
struct ChecksumReport<'a> {
    input: &'a str,
    residue: u32,
}

/// Execute the checksum subcommand.
pub fn run_checksum(args: &ChecksumArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let residue = mod97(&args.input)
        .with_context(|| format!("cannot compute checksum of {:?}", args.input))?;

    match format {
        OutputFormat::Text => writeln!(out, "{residue}")?,
        OutputFormat::Json => write_json(
            out,
            &ChecksumReport {
                input: &args.input,
                residue,
            },
        )?,
    }

    Ok(0)
}

/// Execute the complete subcommand.
pub fn run_complete(args: &CompleteArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let lei = Lei::from_base(&args.base)
        .with_context(|| format!("cannot complete LEI base {:?}", args.base))?;
    tracing::debug!(%lei, "completed LEI");

    match format {
        OutputFormat::Text => writeln!(out, "{lei}")?,
        OutputFormat::Json => write_json(out, &lei)?,
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_residue() {
        let args = ChecksumArgs {
            input: "9799".to_string(),
        };
        let mut out = Vec::new();
        run_checksum(&args, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\n");
    }

    #[test]
    fn checksum_json() {
        let args = ChecksumArgs {
            input: "2594007XIACKNMUAW223".to_string(),
        };
        let mut out = Vec::new();
        run_checksum(&args, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["residue"], 1);
    }

    #[test]
    fn checksum_invalid_char_is_error() {
        let args = ChecksumArgs {
            input: "123#".to_string(),
        };
        let mut out = Vec::new();
        let err = run_checksum(&args, OutputFormat::Text, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("invalid character at position 3: #"));
    }

    #[test]
    fn completes_base() {
        let args = CompleteArgs {
            base: "5493000IBP32UQZ0KL".to_string(),
        };
        let mut out = Vec::new();
        run_complete(&args, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "5493000IBP32UQZ0KL24\n");
    }

    #[test]
    fn complete_rejects_full_lei() {
        let args = CompleteArgs {
            base: "5493000IBP32UQZ0KL24".to_string(),
        };
        let mut out = Vec::new();
        let err = run_complete(&args, OutputFormat::Text, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("invalid base length: 20, expected 18"));
    }
}
