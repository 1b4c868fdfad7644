//! # ISO 7064 Mod 97-10 Checksum
//!
//! Streaming Mod 97-10 over an alphanumeric string. Letters `A`-`Z` expand
//! to the two-digit codes `10`-`35`, digits stand for themselves, and the
//! resulting decimal number is reduced modulo 97 without ever being
//! materialized.
//!
//! ## Contract
//!
//! - Only `0-9` and `A-Z` are accepted. Scanning stops at the first other
//!   character and reports its zero-based character index.
//! - The empty string has residue 0 and is not an error. Check digit
//!   computation relies on this.
//! - A valid LEI has residue exactly 1; any residue is a valid result of
//!   [`mod97`] itself.

use crate::error::LeiError;

/// The Mod 97-10 modulus.
const MODULUS: u32 = 97;

/// The running buffer is reduced once it exceeds this value. Appending a
/// letter multiplies by 100 and adds at most 35, so the buffer stays well
/// inside `u32`.
const REDUCE_ABOVE: u32 = 10_000_000;

/// Numeric value of an LEI character, or `None` if it is not `0-9A-Z`.
fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Compute the ISO 7064 Mod 97-10 residue of `input`.
///
/// # Errors
///
/// Returns [`LeiError::InvalidChar`] for the first character that is not an
/// ASCII digit or uppercase ASCII letter.
///
/// # Examples
///
/// ```
/// use lei_core::mod97;
///
/// assert_eq!(mod97("98").unwrap(), 1);
/// assert_eq!(mod97("").unwrap(), 0);
/// assert!(mod97("12a").is_err());
/// ```
pub fn mod97(input: &str) -> Result<u32, LeiError> {
    let mut buffer: u32 = 0;

    for (position, character) in input.chars().enumerate() {
        let value = char_value(character).ok_or(LeiError::InvalidChar {
            position,
            character,
        })?;

        buffer = if value >= 10 {
            buffer * 100 + value
        } else {
            buffer * 10 + value
        };

        if buffer > REDUCE_ABOVE {
            buffer %= MODULUS;
        }
    }

    Ok(buffer % MODULUS)
}

/// Whether `input` consists of valid characters and has residue 1.
pub fn is_valid_mod97(input: &str) -> bool {
    matches!(mod97(input), Ok(1))
}

/// Compute the two ISO 7064 check digits for `base`.
///
/// The result is `98 - mod97(base + "00")`, always in `2..=98`. Appending it
/// to `base` as two zero-padded decimal digits yields a string with residue 1.
///
/// # Errors
///
/// Returns [`LeiError::InvalidChar`] if `base` contains a character outside
/// `0-9A-Z`.
pub fn check_digits(base: &str) -> Result<u8, LeiError> {
    // Two placeholder zeros shift the base residue by 100.
    let shifted = mod97(base)? * 100 % MODULUS;
    let digits = 98 - shifted;
    Ok(digits as u8)
}
