//! Element residue engine
//!
//! A static 60-slot lookup table over atomic numbers 1..=118, plus the pure
//! aggregate functions (bridge score, frontier weight, charge vector, hepta
//! signature, element wave) computed over genome digits.

mod aggregate;
mod element;
mod table;

pub use aggregate::{
    default_frontier, genome_bridge_score, genome_charge_vector, genome_element_wave,
    genome_frontier_weight, genome_hepta_signature, genome_residue_usage, AggregateOptions,
    ChargeVector, ElementWave, FrontierSelector, GenomeTraits, HeptaSignature, ResidueUsage,
    SelectionMode,
};
pub use element::{ElementProfile, Factorization, COPRIME_UNITS, MODULUS};
pub use table::{residue_table, ResidueEntry, ResidueTable, DEFAULT_MAX_Z};
