//! DigitField — the per-seed state bundle of the MossPrimeSeed core
//!
//! A digit field is recomputed per seed name and owned by a single caller.
//! It bundles the pulse/ring digit arrays, the folded seed integer, a seeded
//! PRNG, a keyed message hash, and fast Fibonacci/Lucas.

use log::debug;
use num_bigint::BigUint;

use super::fib;
use super::mixer::{self, PulseRng};
use super::sequences::{fixed_sequences, FixedSequence, SEQUENCE_LEN};
use crate::error::CoreError;

/// Per-seed derived identity state.
///
/// Carries mutable PRNG state: one logical owner at a time. `hash()` is
/// stateless with respect to the PRNG and only reads the seed integer.
#[derive(Debug, Clone)]
pub struct DigitField {
    /// The seed name this field was derived from
    pub name: String,
    /// XOR-combined digits of the three fixed sequences, mod 10
    pub pulse: [u8; SEQUENCE_LEN],
    /// Sum-combined digits of the three fixed sequences, mod 10
    pub ring: [u8; SEQUENCE_LEN],
    /// Folded 64-bit seed integer
    pub seed: u64,
    rng: PulseRng,
}

impl DigitField {
    /// Derive a field from a seed name using the shipped fixed sequences
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        let (red, black, blue) = fixed_sequences()?;
        Self::derive(name, &red, &black, &blue)
    }

    /// Derive a field from explicit sequences (the defensive validation path)
    pub fn derive(
        name: &str,
        red: &FixedSequence,
        black: &FixedSequence,
        blue: &FixedSequence,
    ) -> Result<Self, CoreError> {
        let mut pulse = [0u8; SEQUENCE_LEN];
        let mut ring = [0u8; SEQUENCE_LEN];
        for i in 0..SEQUENCE_LEN {
            let (r, k, b) = (red.digits()[i], black.digits()[i], blue.digits()[i]);
            pulse[i] = (r ^ k ^ b) % 10;
            ring[i] = (r + k + b) % 10;
        }

        let seed = fold_seed_integer(name, red, black, blue);
        debug!("derived digit field '{}' seed={:#018x}", name, seed);
        Ok(Self {
            name: name.to_string(),
            pulse,
            ring,
            seed,
            rng: PulseRng::from_seed(seed),
        })
    }

    /// Next pseudo-random value in `[0, 1)`; advances the PRNG state
    pub fn next(&mut self) -> f64 {
        self.rng.next()
    }

    /// Keyed hash of a message, widened for API convenience
    pub fn hash(&self, message: &str) -> BigUint {
        BigUint::from(mixer::message_hash(self.seed, message))
    }

    /// Raw 64-bit form of the message hash
    pub fn hash_u64(&self, message: &str) -> u64 {
        mixer::message_hash(self.seed, message)
    }

    /// F(n) via fast doubling; negative n clamps to 0
    pub fn fib(&self, n: i64) -> BigUint {
        fib::fibonacci(n)
    }

    /// L(n) via fast doubling; L(0) = 2
    pub fn lucas(&self, n: i64) -> BigUint {
        fib::lucas(n)
    }
}

/// Fold the interleaved sequences plus the seed name into a 64-bit integer.
///
/// Per character: `acc = acc*17 + value`, emit nibble `(acc ^ pos*7) & 0xF`;
/// the nibble stream is read as one long hex number, kept mod 2^64. Digit
/// characters contribute their numeric value, anything else its code point.
/// Deterministic and seed-sensitive, nothing more.
fn fold_seed_integer(
    name: &str,
    red: &FixedSequence,
    black: &FixedSequence,
    blue: &FixedSequence,
) -> u64 {
    let mut text = String::with_capacity(SEQUENCE_LEN * 3 + name.len());
    for i in 0..SEQUENCE_LEN {
        text.push(red.char_at(i));
        text.push(black.char_at(i));
        text.push(blue.char_at(i));
    }
    text.push_str(name);

    let mut acc: u64 = 0;
    let mut seed: u64 = 0;
    for (i, ch) in text.chars().enumerate() {
        let value = ch.to_digit(10).unwrap_or(ch as u32) as u64;
        acc = acc.wrapping_mul(17).wrapping_add(value);
        let nibble = (acc ^ (i as u64).wrapping_mul(7)) & 0xF;
        seed = (seed << 4) | nibble;
    }
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_ring_shape() {
        let field = DigitField::from_name("mosspet").unwrap();
        assert!(field.pulse.iter().all(|d| *d < 10));
        assert!(field.ring.iter().all(|d| *d < 10));
    }

    #[test]
    fn test_same_name_same_stream() {
        let mut a = DigitField::from_name("fern").unwrap();
        let mut b = DigitField::from_name("fern").unwrap();
        assert_eq!(a.seed, b.seed);
        let sa: Vec<f64> = (0..100).map(|_| a.next()).collect();
        let sb: Vec<f64> = (0..100).map(|_| b.next()).collect();
        assert_eq!(sa, sb);
    }

    #[test]
    fn test_different_names_different_seeds() {
        let a = DigitField::from_name("fern").unwrap();
        let b = DigitField::from_name("moss").unwrap();
        assert_ne!(a.seed, b.seed);
    }

    #[test]
    fn test_hash_is_stateless() {
        let mut field = DigitField::from_name("fern").unwrap();
        let before = field.hash_u64("hello");
        field.next();
        field.next();
        assert_eq!(before, field.hash_u64("hello"));
        assert_eq!(field.hash("hello"), BigUint::from(before));
    }

    #[test]
    fn test_empty_name_is_valid() {
        let a = DigitField::from_name("").unwrap();
        let b = DigitField::from_name("").unwrap();
        assert_eq!(a.seed, b.seed);
        assert_ne!(a.seed, DigitField::from_name("x").unwrap().seed);
    }

    #[test]
    fn test_fib_lucas_delegates() {
        let field = DigitField::from_name("fern").unwrap();
        assert_eq!(field.fib(10), BigUint::from(55u8));
        assert_eq!(field.lucas(10), BigUint::from(123u8));
    }
}
