//! Avalanche mixer and pulse PRNG
//!
//! The mixer spreads any single-bit change across all 64 bits: XOR with a
//! fixed odd constant, two shift-XOR/multiply rounds, one final shift-XOR,
//! everything wrapping mod 2^64. It seeds the PRNG state words and steps the
//! message hash. The PRNG itself is xorshift128+: fast, deterministic, and
//! explicitly not cryptographic — it drives flavor and behavior only.
//!
//! The exact constants and bit operations are load-bearing: downstream
//! visuals and behavior are tuned to this output distribution, so do not
//! substitute a "better" hash.

/// Odd salt XORed into the mixer input
const MIX_SALT: u64 = 0x9E37_79B9_7F4A_7C15;
/// First multiply round constant
const MIX_MUL_A: u64 = 0xFF51_AFD7_ED55_8CCD;
/// Second multiply round constant
const MIX_MUL_B: u64 = 0xC4CE_B9FE_1A85_EC53;
/// XORed into the seed before mixing the second PRNG state word
const SECOND_WORD_SALT: u64 = 0x6A09_E667_F3BC_C909;
/// Per-position constant of the message hash
const HASH_STEP: u64 = 1_315_423_911;

/// One pass of avalanche mixing over a 64-bit word
pub fn avalanche(input: u64) -> u64 {
    let mut x = input ^ MIX_SALT;
    x ^= x >> 33;
    x = x.wrapping_mul(MIX_MUL_A);
    x ^= x >> 33;
    x = x.wrapping_mul(MIX_MUL_B);
    x ^= x >> 33;
    x
}

/// Keyed message hash: folds each character of `message` into the running
/// 64-bit value through the avalanche mixer, starting from `seed`.
pub fn message_hash(seed: u64, message: &str) -> u64 {
    let mut hash = seed;
    for (i, ch) in message.chars().enumerate() {
        let salted = (ch as u64).wrapping_add((i as u64).wrapping_mul(HASH_STEP));
        hash = avalanche(hash ^ salted);
    }
    hash
}

/// xorshift128+ generator with explicit state words.
///
/// Single-writer: callers own an instance exclusively; `next()` mutates both
/// words, so sharing across threads without synchronization interleaves the
/// state unpredictably.
#[derive(Debug, Clone)]
pub struct PulseRng {
    s0: u64,
    s1: u64,
}

impl PulseRng {
    /// Derive both state words from a seed integer via the avalanche mixer
    pub fn from_seed(seed: u64) -> Self {
        Self {
            s0: avalanche(seed),
            s1: avalanche(seed ^ SECOND_WORD_SALT),
        }
    }

    /// Next value in `[0, 1)`
    pub fn next(&mut self) -> f64 {
        let mut x = self.s0;
        let y = self.s1;
        self.s0 = y;
        x ^= x << 23;
        x ^= x >> 17;
        x ^= y ^ (y >> 26);
        self.s1 = x;
        let combined = self.s0.wrapping_add(self.s1);
        // Keep the top 53 bits so the quotient is exact and strictly < 1;
        // dividing the full u64 would round sums near 2^64 up to 1.0.
        (combined >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Current state words, mainly for diagnostics
    pub fn state(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }
}
