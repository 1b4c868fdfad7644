//! # lei-cli: Command-Line Interface for lei-core
//!
//! Provides the `lei` binary. Handlers parse arguments, delegate to
//! `lei-core`, and render results; no validation logic lives here.
//!
//! ## Subcommands
//!
//! - `lei validate`: Validate one or more LEIs.
//! - `lei generate`: Generate random LEIs for test fixtures.
//! - `lei checksum`: Compute the Mod 97-10 residue of a string.
//! - `lei complete`: Append check digits to an 18-character base.
//! - `lei authority`: Check or list registration authority codes.
//!
//! ```bash
//! lei validate 2594007XIACKNMUAW223 5493000IBP32UQZ0KL24
//! lei generate --count 10 --seed 7
//! lei --format json authority check RA000001 RA100001
//! ```
//!
//! Every handler writes to a caller-supplied sink and returns the process
//! exit code: 0 on success, 1 if any input was rejected.

pub mod authority;
pub mod checksum;
pub mod generate;
pub mod validate;

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Output rendering selected by the global `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Exit code for a batch in which `failures` inputs were rejected.
pub(crate) fn exit_code(failures: usize) -> u8 {
    u8::from(failures > 0)
}
