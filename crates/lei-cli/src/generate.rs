//! # Generate Subcommand
//!
//! Emits random, checksum-valid LEIs for test fixtures. With `--seed` the
//! output is reproducible across runs.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lei_core::Lei;

use crate::{write_json, OutputFormat};

/// Arguments for the `lei generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of LEIs to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    if args.count == 0 {
        bail!("--count must be at least 1");
    }

    let leis = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, count = args.count, "generating seeded LEIs");
            generate(&mut StdRng::seed_from_u64(seed), args.count)
        }
        None => {
            tracing::debug!(count = args.count, "generating LEIs");
            generate(&mut rand::thread_rng(), args.count)
        }
    };

    match format {
        OutputFormat::Text => {
            for lei in &leis {
                writeln!(out, "{lei}")?;
            }
        }
        OutputFormat::Json => write_json(out, &leis)?,
    }

    Ok(0)
}

fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Lei> {
    (0..count).map(|_| Lei::random_with(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(count: usize, seed: Option<u64>, format: OutputFormat) -> String {
        let args = GenerateArgs { count, seed };
        let mut out = Vec::new();
        assert_eq!(run_generate(&args, format, &mut out).unwrap(), 0);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn emits_requested_count_of_valid_leis() {
        let out = run(5, None, OutputFormat::Text);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert!(Lei::check(line).is_ok(), "{line}");
        }
    }

    #[test]
    fn seeded_output_is_reproducible() {
        assert_eq!(
            run(3, Some(11), OutputFormat::Text),
            run(3, Some(11), OutputFormat::Text)
        );
    }

    #[test]
    fn json_is_array_of_strings() {
        let out = run(2, Some(3), OutputFormat::Json);
        let leis: Vec<Lei> = serde_json::from_str(&out).unwrap();
        assert_eq!(leis.len(), 2);
    }

    #[test]
    fn zero_count_rejected() {
        let args = GenerateArgs {
            count: 0,
            seed: None,
        };
        let mut out = Vec::new();
        assert!(run_generate(&args, OutputFormat::Text, &mut out).is_err());
    }
}
