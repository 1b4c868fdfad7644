//! # Legal Entity Identifier
//!
//! [`Lei`] is a validated ISO 17442 identifier. A value of this type always
//! holds exactly 20 characters from `0-9A-Z` whose Mod 97-10 residue is 1.
//!
//! ## Structure
//!
//! | Characters | Meaning                                   |
//! |------------|-------------------------------------------|
//! | 0-3        | LOU prefix of the issuing organization    |
//! | 4-5        | Reserved, `00` in current allocations     |
//! | 4-17       | Entity-specific part                      |
//! | 18-19      | ISO 7064 Mod 97-10 check digits           |
//!
//! The LOU prefix is informational. It is not looked up in the registration
//! authority table.
//!
//! ## Validation
//!
//! Input is not normalized: lowercase letters or surrounding whitespace are
//! rejected rather than corrected. Checks run in a fixed order and the first
//! failure wins:
//!
//! 1. Length must be 20 bytes ([`LeiError::InvalidLength`]). A valid LEI is
//!    ASCII, so any multi-byte character makes the input too long.
//! 2. Every character must be `0-9A-Z` ([`LeiError::InvalidChar`]).
//! 3. The residue must be 1 ([`LeiError::InvalidChecksum`]).

use serde::Serialize;

use crate::checksum;
use crate::error::LeiError;

/// Number of characters in an LEI.
pub const LEI_LENGTH: usize = 20;

/// Number of characters preceding the check digits.
const BASE_LENGTH: usize = LEI_LENGTH - 2;

/// A validated Legal Entity Identifier.
///
/// Immutable once constructed. Compares, hashes, orders, and serializes as
/// its plain string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Lei(pub(crate) String);

impl_validating_deserialize!(Lei);

impl Lei {
    /// Create an LEI from an owned or borrowed string, validating it.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as described in the module docs.
    pub fn new(value: impl Into<String>) -> Result<Self, LeiError> {
        let s = value.into();
        Self::check(&s)?;
        Ok(Self(s))
    }

    /// Parse a borrowed string into an LEI.
    ///
    /// Shorthand for [`Lei::new`] on a `&str`, matching `str::parse` call
    /// sites. [`FromStr`](std::str::FromStr) and both `TryFrom` impls also
    /// route through [`Lei::new`].
    ///
    /// # Errors
    ///
    /// Same as [`Lei::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lei_core::{Lei, LeiError};
    ///
    /// assert!(Lei::parse("5493000IBP32UQZ0KL24").is_ok());
    /// assert_eq!(
    ///     Lei::parse("5493000IBP32UQZ0KL2"),
    ///     Err(LeiError::InvalidLength(19))
    /// );
    /// ```
    pub fn parse(s: &str) -> Result<Self, LeiError> {
        Self::new(s)
    }

    /// Validate a candidate LEI without constructing a value.
    ///
    /// # Errors
    ///
    /// - [`LeiError::InvalidLength`] with the observed byte length.
    /// - [`LeiError::InvalidChar`] from the checksum scan, positioned in `s`.
    /// - [`LeiError::InvalidChecksum`] if the residue is not 1.
    pub fn check(s: &str) -> Result<(), LeiError> {
        if s.len() != LEI_LENGTH {
            return Err(LeiError::InvalidLength(s.len()));
        }

        if checksum::mod97(s)? != 1 {
            return Err(LeiError::InvalidChecksum);
        }

        Ok(())
    }

    /// Complete an 18-character base with its two check digits.
    ///
    /// # Errors
    ///
    /// Returns [`LeiError::InvalidBaseLength`] if the base is not 18
    /// bytes, or [`LeiError::InvalidChar`] for a character
    /// outside `0-9A-Z`.
    pub fn from_base(base: &str) -> Result<Self, LeiError> {
        if base.len() != BASE_LENGTH {
            return Err(LeiError::InvalidBaseLength(base.len()));
        }
        let digits = checksum::check_digits(base)?;
        Ok(Self(format!("{base}{digits:02}")))
    }

    /// Access the LEI string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the LEI, returning the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The four-character prefix identifying the issuing LOU.
    pub fn lou_prefix(&self) -> &str {
        &self.0[..4]
    }

    /// The two reserved characters following the LOU prefix.
    pub fn reserved(&self) -> &str {
        &self.0[4..6]
    }

    /// The fourteen-character entity-specific part, reserved characters
    /// included.
    pub fn entity_code(&self) -> &str {
        &self.0[4..BASE_LENGTH]
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[BASE_LENGTH..]
    }
}

impl std::fmt::Display for Lei {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Lei {
    type Err = LeiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Lei {
    type Error = LeiError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Lei {
    type Error = LeiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Lei {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Lei> for String {
    fn from(lei: Lei) -> Self {
        lei.0
    }
}
