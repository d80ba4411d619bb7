//! Meta-Pet Core — deterministic identity engine
//!
//! A textual seed grows into a reproducible identity: a per-seed digit field
//! (pulse/ring digits, PRNG, keyed hash, fast Fibonacci/Lucas), a keyed
//! three-strand base-7 genome with integrity verification, and number-theoretic
//! trait metrics read off a fixed 60-slot element residue table. Everything is
//! bit-exact, synchronous, and free of I/O; rendering, vitals decay and
//! persistence live in other crates.

pub mod error;
pub mod field;
pub mod genome;
pub mod residue;

pub use error::CoreError;
pub use field::{fibonacci, lucas, DigitField};
pub use genome::{encode_genome, hash_genome, verify_genome, Genome, GenomeHash, Sha256Adapter};
pub use residue::{residue_table, GenomeTraits, ResidueTable};
