//! MossPrimeSeed core — per-seed digit fields
//!
//! Derives everything a seed name grows into: pulse/ring digit arrays, a
//! folded seed integer, a seeded PRNG, a keyed message hash, and fast
//! Fibonacci/Lucas. Depends only on the three fixed sequences.

mod digit_field;
mod fib;
mod mixer;
mod sequences;

pub use digit_field::DigitField;
pub use fib::{fibonacci, lucas};
pub use mixer::{avalanche, message_hash, PulseRng};
pub use sequences::{
    fixed_sequences, FixedSequence, BLACK_SEQUENCE, BLUE_SEQUENCE, RED_SEQUENCE, SEQUENCE_LEN,
};
