//! # Random LEI Generation
//!
//! Produces syntactically valid, checksum-correct LEIs for test fixtures.
//! Generated values are not registered anywhere and their LOU prefix is
//! random; they must never be used as real identifiers.
//!
//! [`Lei::random`] draws from `rand::thread_rng()`, which is lazily seeded
//! from the operating system once per thread and is safe to use from any
//! number of threads. [`Lei::random_with`] takes an explicit generator, so a
//! seeded `StdRng` gives reproducible fixtures.

use rand::Rng;

use crate::checksum;
use crate::lei::Lei;

/// Characters an LEI may contain.
const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const PREFIX_LENGTH: usize = 4;
const INFIX_LENGTH: usize = 12;

/// Placeholder for the two reserved characters after the prefix.
const RESERVED: &str = "00";

/// Append `n` characters drawn uniformly from [`ALPHABET`].
fn push_random<R: Rng + ?Sized>(rng: &mut R, out: &mut String, n: usize) {
    for _ in 0..n {
        let idx = rng.gen_range(0..ALPHABET.len());
        out.push(char::from(ALPHABET[idx]));
    }
}

impl Lei {
    /// Generate a random LEI using the thread-local generator.
    ///
    /// For testing purposes only.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Generate a random LEI from the supplied generator.
    ///
    /// Layout is a 4-character prefix, `00`, a 12-character infix, then the
    /// two Mod 97-10 check digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use lei_core::Lei;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let a = Lei::random_with(&mut StdRng::seed_from_u64(7));
    /// let b = Lei::random_with(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut base = String::with_capacity(crate::LEI_LENGTH);
        push_random(rng, &mut base, PREFIX_LENGTH);
        base.push_str(RESERVED);
        push_random(rng, &mut base, INFIX_LENGTH);

        let digits = checksum::check_digits(&base).expect("random alphabet is 0-9A-Z");
        base.push_str(&format!("{digits:02}"));
        Self(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn random_values_validate() {
        for _ in 0..100 {
            let lei = Lei::random();
            assert_eq!(Lei::check(lei.as_str()), Ok(()), "{lei}");
        }
    }

    #[test]
    fn random_values_are_distinct() {
        let made: HashSet<Lei> = (0..100).map(|_| Lei::random()).collect();
        assert_eq!(made.len(), 100);
    }

    #[test]
    fn random_layout() {
        let lei = Lei::random();
        assert_eq!(lei.as_str().len(), crate::LEI_LENGTH);
        assert_eq!(lei.reserved(), "00");
        assert!(lei
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
        assert!(lei.check_digits().bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(Lei::random_with(&mut a), Lei::random_with(&mut b));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = Lei::random_with(&mut StdRng::seed_from_u64(1));
        let b = Lei::random_with(&mut StdRng::seed_from_u64(2));
        assert_ne!(a, b);
    }

    #[test]
    fn random_agrees_with_from_base() {
        let lei = Lei::random_with(&mut StdRng::seed_from_u64(99));
        let rebuilt = Lei::from_base(&lei.as_str()[..18]).unwrap();
        assert_eq!(rebuilt, lei);
    }

    #[test]
    fn works_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..25).map(|_| Lei::random()).collect::<Vec<_>>()))
            .collect();
        let mut all = HashSet::new();
        for handle in handles {
            for lei in handle.join().unwrap() {
                assert!(Lei::check(lei.as_str()).is_ok());
                all.insert(lei);
            }
        }
        assert_eq!(all.len(), 100);
    }

    proptest! {
        /// Every seed yields a checksum-valid LEI.
        #[test]
        fn any_seed_validates(seed in any::<u64>()) {
            let lei = Lei::random_with(&mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(Lei::check(lei.as_str()), Ok(()));
        }
    }
}
