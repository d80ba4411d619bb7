//! Genome — three 60-digit base-7 strands
//!
//! The durable identity record. A genome is created by keyed derivation
//! (see `encoder`), by random generation from a digit field, or by decoding
//! a human-copyable hepta-code string. Persistence lives elsewhere.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::field::DigitField;

/// Digits per strand
pub const STRAND_LEN: usize = 60;
/// Characters in a hepta-code (three strands back to back)
pub const HEPTA_CODE_LEN: usize = 3 * STRAND_LEN;

/// Three ordered strands of base-7 digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    pub red: Vec<u8>,
    pub blue: Vec<u8>,
    pub black: Vec<u8>,
}

impl Genome {
    /// Build a genome from three strands, validating shape and alphabet
    pub fn new(red: Vec<u8>, blue: Vec<u8>, black: Vec<u8>) -> Result<Self, CoreError> {
        let genome = Self { red, blue, black };
        genome.validate()?;
        Ok(genome)
    }

    /// Draw a genome from a digit field's PRNG: 180 base-7 digits
    pub fn random(field: &mut DigitField) -> Self {
        let mut draw = |n: usize| (0..n).map(|_| (field.next() * 7.0) as u8).collect();
        Self {
            red: draw(STRAND_LEN),
            blue: draw(STRAND_LEN),
            black: draw(STRAND_LEN),
        }
    }

    /// Check the 3×60 base-7 shape invariant
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, strand) in [("red", &self.red), ("blue", &self.blue), ("black", &self.black)] {
            if strand.len() != STRAND_LEN {
                return Err(CoreError::InvalidStrand {
                    strand: name.to_string(),
                    detail: format!("length {}", strand.len()),
                });
            }
            if let Some(d) = strand.iter().find(|d| **d > 6) {
                return Err(CoreError::InvalidStrand {
                    strand: name.to_string(),
                    detail: format!("digit {} out of base-7 range", d),
                });
            }
        }
        Ok(())
    }

    /// All digits in strand order red, blue, black, widened for the aggregates
    pub fn concat(&self) -> Vec<i64> {
        self.red
            .iter()
            .chain(self.blue.iter())
            .chain(self.black.iter())
            .map(|d| *d as i64)
            .collect()
    }

    /// Serialize as a 180-character hepta-code string
    pub fn to_hepta_code(&self) -> String {
        self.red
            .iter()
            .chain(self.blue.iter())
            .chain(self.black.iter())
            .map(|d| (b'0' + d) as char)
            .collect()
    }

    /// Decode a hepta-code, tolerating whitespace and hyphens.
    ///
    /// Rejects anything whose sanitized form is not exactly 180 characters
    /// of '0'..='6'.
    pub fn from_hepta_code(code: &str) -> Result<Self, CoreError> {
        let mut digits = Vec::with_capacity(HEPTA_CODE_LEN);
        for ch in code.chars() {
            if ch.is_whitespace() || ch == '-' {
                continue;
            }
            match ch {
                '0'..='6' => digits.push(ch as u8 - b'0'),
                other => return Err(CoreError::HeptaCodeDigit(other)),
            }
        }
        if digits.len() != HEPTA_CODE_LEN {
            return Err(CoreError::HeptaCodeLength(digits.len()));
        }
        let black = digits.split_off(2 * STRAND_LEN);
        let blue = digits.split_off(STRAND_LEN);
        Ok(Self { red: digits, blue, black })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Genome {
        Genome {
            red: vec![1; STRAND_LEN],
            blue: vec![3; STRAND_LEN],
            black: vec![6; STRAND_LEN],
        }
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_digit() {
        let mut g = sample();
        g.blue[10] = 7;
        assert!(matches!(g.validate(), Err(CoreError::InvalidStrand { .. })));
    }

    #[test]
    fn test_validate_rejects_short_strand() {
        let mut g = sample();
        g.red.pop();
        assert!(matches!(g.validate(), Err(CoreError::InvalidStrand { .. })));
    }

    #[test]
    fn test_hepta_code_round_trip() {
        let g = sample();
        let code = g.to_hepta_code();
        assert_eq!(code.len(), HEPTA_CODE_LEN);
        assert_eq!(Genome::from_hepta_code(&code).unwrap(), g);
    }

    #[test]
    fn test_hepta_code_sanitizes_separators() {
        let g = sample();
        let pretty = g
            .to_hepta_code()
            .as_bytes()
            .chunks(20)
            .map(|c| std::str::from_utf8(c).unwrap())
            .collect::<Vec<_>>()
            .join("-");
        assert_eq!(Genome::from_hepta_code(&pretty).unwrap(), g);
    }

    #[test]
    fn test_hepta_code_rejects_bad_length() {
        let err = Genome::from_hepta_code("0123456").unwrap_err();
        assert!(matches!(err, CoreError::HeptaCodeLength(7)));
    }

    #[test]
    fn test_hepta_code_rejects_bad_alphabet() {
        let code = "7".repeat(HEPTA_CODE_LEN);
        assert!(matches!(
            Genome::from_hepta_code(&code),
            Err(CoreError::HeptaCodeDigit('7'))
        ));
    }

    #[test]
    fn test_random_genome_shape() {
        let mut field = DigitField::from_name("shapes").unwrap();
        let g = Genome::random(&mut field);
        assert!(g.validate().is_ok());
        // same seed, same genome
        let mut field2 = DigitField::from_name("shapes").unwrap();
        assert_eq!(g, Genome::random(&mut field2));
    }

    #[test]
    fn test_concat_order() {
        let g = sample();
        let all = g.concat();
        assert_eq!(all.len(), HEPTA_CODE_LEN);
        assert_eq!(all[0], 1);
        assert_eq!(all[STRAND_LEN], 3);
        assert_eq!(all[2 * STRAND_LEN], 6);
    }
}
