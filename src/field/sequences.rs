//! Fixed sequences — the three constant digit strands of the MossPrimeSeed core
//!
//! Three 60-character decimal strings, constant for the life of the program.
//! Every digit field is derived from these plus a caller-supplied seed name,
//! so they are the shared "soil" all identities grow from.

use crate::error::CoreError;

/// First 60 fractional digits of π
pub const RED_SEQUENCE: &str =
    "141592653589793238462643383279502884197169399375105820974944";

/// First 60 fractional digits of e
pub const BLACK_SEQUENCE: &str =
    "718281828459045235360287471352662497757247093699959574966967";

/// First 60 fractional digits of φ
pub const BLUE_SEQUENCE: &str =
    "618033988749894848204586834365638117720309179805762862135448";

/// Length every fixed sequence (and genome strand) must have
pub const SEQUENCE_LEN: usize = 60;

/// A validated 60-digit decimal sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSequence {
    name: &'static str,
    digits: [u8; SEQUENCE_LEN],
}

impl FixedSequence {
    /// Validate a raw digit string into a sequence.
    ///
    /// The three shipped constants always pass; the check guards against a
    /// corrupted constant rather than expected runtime input.
    pub fn new(name: &'static str, raw: &str) -> Result<Self, CoreError> {
        if raw.len() != SEQUENCE_LEN {
            return Err(CoreError::InvalidSequence {
                name: name.to_string(),
                detail: format!("length {}", raw.len()),
            });
        }
        let mut digits = [0u8; SEQUENCE_LEN];
        for (i, ch) in raw.chars().enumerate() {
            match ch.to_digit(10) {
                Some(d) => digits[i] = d as u8,
                None => {
                    return Err(CoreError::InvalidSequence {
                        name: name.to_string(),
                        detail: format!("non-digit '{}' at index {}", ch, i),
                    })
                }
            }
        }
        Ok(Self { name, digits })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn digits(&self) -> &[u8; SEQUENCE_LEN] {
        &self.digits
    }

    /// Digit character at index, for interleaving into the seed text
    pub fn char_at(&self, i: usize) -> char {
        (b'0' + self.digits[i]) as char
    }
}

/// The three process-wide sequences, validated
pub fn fixed_sequences() -> Result<(FixedSequence, FixedSequence, FixedSequence), CoreError> {
    Ok((
        FixedSequence::new("red", RED_SEQUENCE)?,
        FixedSequence::new("black", BLACK_SEQUENCE)?,
        FixedSequence::new("blue", BLUE_SEQUENCE)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_valid() {
        let (red, black, blue) = fixed_sequences().unwrap();
        assert_eq!(red.digits().len(), 60);
        assert_eq!(black.name(), "black");
        assert_eq!(blue.char_at(0), '6');
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = FixedSequence::new("short", "12345").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSequence { .. }));
    }

    #[test]
    fn test_rejects_non_digit() {
        let mut raw = RED_SEQUENCE.to_string();
        raw.replace_range(10..11, "x");
        let err = FixedSequence::new("red", &raw).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSequence { .. }));
    }
}
