//! Core error taxonomy
//!
//! Nothing here fails under normal operation. Validation variants mark a
//! contract violation by the caller (or a corrupted constant), and the
//! adapter variant carries a failure from the pluggable crypto primitive
//! through unchanged. Verification mismatches are booleans, never errors.

/// Errors raised by the identity engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A fixed sequence was not exactly 60 decimal digits
    #[error("fixed sequence '{name}' must be 60 decimal digits, got {detail}")]
    InvalidSequence { name: String, detail: String },

    /// Factorizing Z relative to 60 left a unit outside the coprime group
    #[error("factorization of Z={z} left unit {unit}, not in the group of units mod 60")]
    UnitOutOfGroup { z: u32, unit: u32 },

    /// A hepta-code had the wrong length after sanitization
    #[error("hepta code must be exactly 180 digits, got {0}")]
    HeptaCodeLength(usize),

    /// A hepta-code contained a character outside '0'..='6'
    #[error("hepta code contains invalid character '{0}'")]
    HeptaCodeDigit(char),

    /// A genome strand violated the 60-digit base-7 shape
    #[error("genome strand '{strand}' invalid: {detail}")]
    InvalidStrand { strand: String, detail: String },

    /// Failure raised by the pluggable cryptographic adapter, propagated as-is
    #[error("crypto adapter failure: {0}")]
    Adapter(String),
}
