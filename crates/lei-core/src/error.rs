//! # Error Types
//!
//! Every failure in this crate is a [`LeiError`]. The variants are pure
//! validation failures: nothing is retried and nothing is swallowed.
//!
//! Callers that only care about the category of failure can compare
//! [`LeiError::kind`] against an [`ErrorKind`] without matching payloads.

use thiserror::Error;

/// Validation errors for LEIs, checksums, and registration authority codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeiError {
    /// The candidate LEI is not exactly 20 characters long.
    #[error("invalid length: {0}, expected 20")]
    InvalidLength(usize),

    /// The base passed to [`Lei::from_base`](crate::Lei::from_base) is not
    /// exactly 18 characters long.
    #[error("invalid base length: {0}, expected 18")]
    InvalidBaseLength(usize),

    /// A character outside `0-9A-Z` was found while computing a checksum.
    #[error("invalid character at position {position}: {character}")]
    InvalidChar {
        /// Zero-based character index into the scanned string.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The string is well formed but its Mod 97-10 residue is not 1.
    #[error("invalid checksum")]
    InvalidChecksum,

    /// The code is not listed in the registration authority table.
    #[error("unknown registration authority: {0}")]
    UnknownRa(String),
}

/// Payload-free discriminant of a [`LeiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`LeiError::InvalidLength`] and [`LeiError::InvalidBaseLength`].
    InvalidLength,
    /// See [`LeiError::InvalidChar`].
    InvalidChar,
    /// See [`LeiError::InvalidChecksum`].
    InvalidChecksum,
    /// See [`LeiError::UnknownRa`].
    UnknownRa,
}

impl LeiError {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength(_) | Self::InvalidBaseLength(_) => ErrorKind::InvalidLength,
            Self::InvalidChar { .. } => ErrorKind::InvalidChar,
            Self::InvalidChecksum => ErrorKind::InvalidChecksum,
            Self::UnknownRa(_) => ErrorKind::UnknownRa,
        }
    }
}
