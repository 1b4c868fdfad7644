#![deny(missing_docs)]

//! # lei-core: Legal Entity Identifier Primitives
//!
//! Validation and generation of Legal Entity Identifiers as defined by
//! ISO 17442. An LEI is a 20-character alphanumeric code whose last two
//! characters are ISO 7064 Mod 97-10 check digits.
//!
//! This crate checks structure and checksums only. It does not verify that
//! an LEI is registered with GLEIF and does not resolve an LEI to an entity
//! name. It performs no I/O.
//!
//! ## Design Principles
//!
//! 1. **Validated newtypes.** A [`Lei`] or a known [`RegistrationAuthority`]
//!    can only be obtained through a validating constructor. Deserialization
//!    routes through the same constructors.
//!
//! 2. **One checksum path.** [`checksum::mod97`] is the only Mod 97-10
//!    implementation. Validation and generation both call into it.
//!
//! 3. **Separate lookups.** The first four characters of an LEI identify the
//!    issuing LOU, but they are never looked up in the registration authority
//!    table. RA classification operates on standalone `RA######` codes.
//!
//! 4. **[`LeiError`] carries full context.** Every failure names exactly one
//!    root cause with the data needed to render it (length, position,
//!    offending code). No `.unwrap()` outside tests.
//!
//! ## Example
//!
//! ```
//! use lei_core::{Lei, RegistrationAuthority};
//!
//! let lei = Lei::parse("2594007XIACKNMUAW223").unwrap();
//! assert_eq!(lei.lou_prefix(), "2594");
//!
//! let ra = RegistrationAuthority::classify("RA999999");
//! assert!(ra.is_known());
//! ```

/// Implements `Deserialize` for string newtypes that must validate their
/// contents. Deserializes a plain `String`, then routes it through the
/// type's `TryFrom<String>` so invalid values are rejected at the boundary.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::try_from(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod authority;
pub mod checksum;
pub mod error;
pub mod lei;
pub mod random;

// Re-export primary types at crate root for ergonomic imports.
pub use authority::{registration_authorities, RegistrationAuthority};
pub use checksum::{check_digits, is_valid_mod97, mod97};
pub use error::{ErrorKind, LeiError};
pub use lei::{Lei, LEI_LENGTH};
