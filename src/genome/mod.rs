//! Genome encoder & verifier
//!
//! A genome = three 60-digit base-7 strands derived from two input strings
//! through a pluggable keyed-hash/digest primitive. Independent of the
//! digit field's derivation path, same design vocabulary.

mod adapter;
mod encoder;
mod strand;

pub use adapter::{CryptoAdapter, Sha256Adapter};
pub use encoder::{encode_genome, hash_genome, verify_genome, GenomeHash};
pub use strand::{Genome, HEPTA_CODE_LEN, STRAND_LEN};
