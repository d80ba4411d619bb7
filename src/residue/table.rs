//! The 60-slot residue table
//!
//! Built once from atomic numbers 1..=max_z grouped by Z mod 60, then
//! treated as read-only shared state. The default table (Z up to 118) lives
//! behind a one-time initialization guard and is safe to share across
//! threads.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use super::element::{ElementProfile, MODULUS};
use crate::error::CoreError;

/// Default upper bound on atomic numbers
pub const DEFAULT_MAX_Z: u32 = 118;

/// All element profiles sharing one residue value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidueEntry {
    /// The residue in [0, 59] this entry keys on
    pub residue: u8,
    /// Occupants sorted by ascending Z; may be empty (a "void" residue)
    pub elements: Vec<ElementProfile>,
    /// high.z - low.z, 0 when fewer than two occupants
    pub delta: u32,
    /// 0 = void, 1 = exactly one occupant, 2 = two or more
    pub bridge_level: u8,
    /// Mean layer across occupants; None when void
    pub average_layer: Option<f64>,
}

impl ResidueEntry {
    fn build(residue: u8, elements: Vec<ElementProfile>) -> Self {
        let delta = match (elements.first(), elements.last()) {
            (Some(low), Some(high)) => high.z - low.z,
            _ => 0,
        };
        let bridge_level = match elements.len() {
            0 => 0,
            1 => 1,
            _ => 2,
        };
        let average_layer = if elements.is_empty() {
            None
        } else {
            Some(elements.iter().map(|e| e.layer as f64).sum::<f64>() / elements.len() as f64)
        };
        Self { residue, elements, delta, bridge_level, average_layer }
    }

    /// Occupant with the smallest Z
    pub fn low(&self) -> Option<&ElementProfile> {
        self.elements.first()
    }

    /// Occupant with the largest Z
    pub fn high(&self) -> Option<&ElementProfile> {
        self.elements.last()
    }

    pub fn is_void(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Immutable lookup table of 60 residue entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidueTable {
    /// Highest atomic number the table was built from
    pub max_z: u32,
    entries: Vec<ResidueEntry>,
}

impl ResidueTable {
    /// Build the table for atomic numbers 1..=max_z
    pub fn build(max_z: u32) -> Result<Self, CoreError> {
        let mut buckets: Vec<Vec<ElementProfile>> = vec![Vec::new(); MODULUS as usize];
        for z in 1..=max_z {
            let profile = ElementProfile::build(z)?;
            buckets[profile.residue as usize].push(profile);
        }
        let entries = buckets
            .into_iter()
            .enumerate()
            .map(|(r, elements)| ResidueEntry::build(r as u8, elements))
            .collect();
        debug!("built residue table for Z=1..={}", max_z);
        Ok(Self { max_z, entries })
    }

    /// Entry for a residue; negative and oversized inputs wrap into [0, 59]
    pub fn entry(&self, residue: i64) -> &ResidueEntry {
        let idx = residue.rem_euclid(MODULUS as i64) as usize;
        &self.entries[idx]
    }

    pub fn entries(&self) -> &[ResidueEntry] {
        &self.entries
    }
}

lazy_static! {
    static ref DEFAULT_TABLE: ResidueTable = ResidueTable::build(DEFAULT_MAX_Z)
        .expect("default residue table construction is infallible for Z<=118");
}

/// The shared default table (Z up to 118), built on first access
pub fn residue_table() -> &'static ResidueTable {
    &DEFAULT_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residue_one_bridges_layers() {
        let entry = residue_table().entry(1);
        let zs: Vec<u32> = entry.elements.iter().map(|e| e.z).collect();
        assert_eq!(zs, vec![1, 61]);
        assert_eq!(entry.delta, 60);
        assert_eq!(entry.bridge_level, 2);
        assert_eq!(entry.average_layer, Some(0.5));
    }

    #[test]
    fn test_single_occupant_residues() {
        // 119 and 120 exceed the default bound, so 59 and 0 hold one element each
        assert_eq!(residue_table().entry(59).bridge_level, 1);
        assert_eq!(residue_table().entry(0).bridge_level, 1);
        assert_eq!(residue_table().entry(0).low().unwrap().z, 60);
    }

    #[test]
    fn test_negative_residues_wrap() {
        let table = residue_table();
        assert_eq!(table.entry(-59), table.entry(1));
        assert_eq!(table.entry(61), table.entry(1));
    }

    #[test]
    fn test_small_table_has_voids() {
        let table = ResidueTable::build(10).unwrap();
        assert!(table.entry(11).is_void());
        assert_eq!(table.entry(11).bridge_level, 0);
        assert_eq!(table.entry(11).average_layer, None);
        assert_eq!(table.entry(3).bridge_level, 1);
    }

    #[test]
    fn test_every_default_residue_is_populated() {
        for entry in residue_table().entries() {
            assert!(!entry.is_void(), "residue {} unexpectedly void", entry.residue);
        }
    }
}
