//! Element profiles — atomic numbers factored relative to 60
//!
//! Every atomic number Z carries its residue mod 60, its layer (which
//! 60-wide tier it falls in), a factorization into powers of 2/3/5 plus a
//! unit coprime to 60, and its three base-7 digits.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The modulus the whole residue engine is built around
pub const MODULUS: u32 = 60;

/// The 16 integers in [1,59] coprime to 60 — the group of units mod 60
pub const COPRIME_UNITS: [u32; 16] = [
    1, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 49, 53, 59,
];

/// Powers of 2, 3, 5 dividing Z, and the coprime remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factorization {
    pub alpha: u32,
    pub beta: u32,
    pub gamma: u32,
    pub unit: u32,
}

impl Factorization {
    /// Divide out 2s, 3s, then 5s; what remains must be a unit mod 60.
    ///
    /// The unit check is an invariant assertion — every positive integer
    /// reduces to a number coprime to 30, so a failure means corrupted input
    /// rather than an expected runtime condition. Units above 59 wrap.
    pub fn of(z: u32) -> Result<Self, CoreError> {
        // Zero has no factorization and would never leave the division
        // loops; surface it as the same contract-violation error.
        if z == 0 {
            return Err(CoreError::UnitOutOfGroup { z: 0, unit: 0 });
        }
        let mut rest = z;
        let mut alpha = 0;
        let mut beta = 0;
        let mut gamma = 0;
        while rest % 2 == 0 {
            rest /= 2;
            alpha += 1;
        }
        while rest % 3 == 0 {
            rest /= 3;
            beta += 1;
        }
        while rest % 5 == 0 {
            rest /= 5;
            gamma += 1;
        }
        let unit = rest % MODULUS;
        if !COPRIME_UNITS.contains(&unit) {
            return Err(CoreError::UnitOutOfGroup { z, unit });
        }
        Ok(Self { alpha, beta, gamma, unit })
    }

    /// 2^alpha · 3^beta · 5^gamma, the wave weight of this factorization
    pub fn smooth_weight(&self) -> f64 {
        2f64.powi(self.alpha as i32) * 3f64.powi(self.beta as i32) * 5f64.powi(self.gamma as i32)
    }
}

/// One chemical-element-style profile per atomic number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementProfile {
    /// Atomic number
    pub z: u32,
    /// Z mod 60
    pub residue: u8,
    /// floor(Z / 60)
    pub layer: u32,
    /// Factorization of Z relative to 60
    pub factors: Factorization,
    /// (Z mod 7, floor(Z/7) mod 7, floor(Z/49) mod 7)
    pub hepta: [u8; 3],
}

impl ElementProfile {
    pub fn build(z: u32) -> Result<Self, CoreError> {
        Ok(Self {
            z,
            residue: (z % MODULUS) as u8,
            layer: z / MODULUS,
            factors: Factorization::of(z)?,
            hepta: [(z % 7) as u8, ((z / 7) % 7) as u8, ((z / 49) % 7) as u8],
        })
    }
}
