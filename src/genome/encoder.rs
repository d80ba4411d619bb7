//! Keyed genome encoder and integrity verifier
//!
//! Three keyed seeds (prime input, tail input, their concatenation — each
//! under its own fixed label) are stream-expanded into exactly 60 base-7
//! digits apiece: digest the current seed, consume the output a hex byte at
//! a time as `byte mod 7`, re-digest whenever more digits are needed.
//! Encoding is a pure function of its inputs and the adapter's primitives.

use log::debug;
use serde::{Deserialize, Serialize};

use super::adapter::CryptoAdapter;
use super::strand::{Genome, STRAND_LEN};
use crate::error::CoreError;

const RED_LABEL: &[u8] = b"metapet.strand.red";
const BLUE_LABEL: &[u8] = b"metapet.strand.blue";
const BLACK_LABEL: &[u8] = b"metapet.strand.black";

/// Per-strand content digests; derived, never hand-constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeHash {
    pub red: String,
    pub blue: String,
    pub black: String,
}

/// Derive a genome from two input strings via the adapter's keyed hash.
///
/// Any strings are valid input, including empty ones; only adapter failures
/// propagate.
pub fn encode_genome(
    prime_input: &str,
    tail_input: &str,
    adapter: &dyn CryptoAdapter,
) -> Result<Genome, CoreError> {
    let combined = format!("{}{}", prime_input, tail_input);

    let red_seed = adapter.keyed_hash(prime_input.as_bytes(), RED_LABEL)?;
    let blue_seed = adapter.keyed_hash(tail_input.as_bytes(), BLUE_LABEL)?;
    let black_seed = adapter.keyed_hash(combined.as_bytes(), BLACK_LABEL)?;

    let genome = Genome {
        red: expand_strand(&red_seed, adapter)?,
        blue: expand_strand(&blue_seed, adapter)?,
        black: expand_strand(&black_seed, adapter)?,
    };
    debug!("encoded genome from {} + {} input bytes", prime_input.len(), tail_input.len());
    Ok(genome)
}

/// Expand a seed string into exactly 60 base-7 digits.
///
/// Each digest cycle yields at least one digit, so the loop terminates.
fn expand_strand(seed: &str, adapter: &dyn CryptoAdapter) -> Result<Vec<u8>, CoreError> {
    let mut digits = Vec::with_capacity(STRAND_LEN);
    let mut current = seed.to_string();
    while digits.len() < STRAND_LEN {
        let digest = adapter.digest(current.as_bytes())?;
        let bytes = digest.as_bytes();
        for pair in bytes.chunks_exact(2) {
            let hex_pair = std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok());
            if let Some(byte) = hex_pair {
                digits.push(byte % 7);
                if digits.len() == STRAND_LEN {
                    break;
                }
            }
        }
        current = digest;
    }
    digits.truncate(STRAND_LEN);
    Ok(digits)
}

/// One digest per strand, over the strand's digits joined into a string
pub fn hash_genome(
    genome: &Genome,
    adapter: &dyn CryptoAdapter,
) -> Result<GenomeHash, CoreError> {
    Ok(GenomeHash {
        red: adapter.digest(strand_text(&genome.red).as_bytes())?,
        blue: adapter.digest(strand_text(&genome.blue).as_bytes())?,
        black: adapter.digest(strand_text(&genome.black).as_bytes())?,
    })
}

/// Recompute and compare all three digests; any mismatch is false
pub fn verify_genome(
    genome: &Genome,
    hashes: &GenomeHash,
    adapter: &dyn CryptoAdapter,
) -> Result<bool, CoreError> {
    let fresh = hash_genome(genome, adapter)?;
    Ok(fresh == *hashes)
}

fn strand_text(digits: &[u8]) -> String {
    digits.iter().map(|d| (b'0' + d) as char).collect()
}
