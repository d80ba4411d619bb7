//! Aggregate trait metrics over digit sequences
//!
//! Pure functions from an ordered digit sequence (each digit normalized into
//! [0,59]) to bridge scores, charge vectors, hepta signatures and the
//! complex-valued element wave. Genome-level wrappers run each aggregate over
//! the concatenation red + blue + black against the shared default table.

use serde::{Deserialize, Serialize};

use super::element::ElementProfile;
use super::table::{residue_table, ResidueEntry, ResidueTable};
use crate::genome::Genome;

/// Which occupant of a residue entry an aggregate reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Occupant with the smallest Z
    Low,
    /// Occupant with the largest Z
    High,
    /// Whichever occupant passes the frontier predicate, preferring high;
    /// falls back to whichever occupant exists
    FrontierPreferred,
}

/// Predicate over atomic numbers marking "frontier" elements
pub type FrontierSelector = fn(u32) -> bool;

/// Default frontier predicate: transuranic-style high-Z elements
pub fn default_frontier(z: u32) -> bool {
    z >= 93
}

/// Named options every aggregate accepts.
///
/// Defaults: `Low` selection, frontier at Z >= 93, layer phase factor 0.5.
/// Individual aggregates document their own default mode.
#[derive(Debug, Clone, Copy)]
pub struct AggregateOptions {
    pub mode: SelectionMode,
    pub frontier: FrontierSelector,
    /// λ in the wave phase `2π·residue/60 + λ·averageLayer`
    pub layer_lambda: f64,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Low,
            frontier: default_frontier,
            layer_lambda: 0.5,
        }
    }
}

impl AggregateOptions {
    pub fn low() -> Self {
        Self::default()
    }

    pub fn high() -> Self {
        Self { mode: SelectionMode::High, ..Self::default() }
    }

    pub fn frontier_preferred() -> Self {
        Self { mode: SelectionMode::FrontierPreferred, ..Self::default() }
    }
}

/// Summed exponents of 2, 3, 5 across selected elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeVector {
    pub c2: i64,
    pub c3: i64,
    pub c5: i64,
}

/// Componentwise sums of hepta triples, raw and reduced mod 7
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeptaSignature {
    pub total: [i64; 3],
    pub mod7: [i64; 3],
}

/// Complex-valued sum over the distinct populated residues touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementWave {
    pub real: f64,
    pub imag: f64,
    pub magnitude: f64,
    pub angle: f64,
}

/// Coverage statistics for a digit sequence over the 60-slot space
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResidueUsage {
    /// Distinct populated residues touched, ascending
    pub used: Vec<u8>,
    /// Touched residues holding two or more elements
    pub bridge_hits: Vec<u8>,
    /// Touched residues whose selected element passes the frontier predicate
    pub frontier_hits: Vec<u8>,
    /// Touched residues holding no element
    pub void_hits: Vec<u8>,
    /// Distinct residues touched (populated or void) over 60
    pub coverage: f64,
}

fn select<'a>(entry: &'a ResidueEntry, opts: &AggregateOptions) -> Option<&'a ElementProfile> {
    let low = entry.low();
    let high = entry.high();
    match opts.mode {
        SelectionMode::Low => low.or(high),
        SelectionMode::High => high.or(low),
        SelectionMode::FrontierPreferred => high
            .filter(|e| (opts.frontier)(e.z))
            .or_else(|| low.filter(|e| (opts.frontier)(e.z)))
            .or(high)
            .or(low),
    }
}

impl ResidueTable {
    /// Sum of per-residue bridge levels (0/1/2 per digit).
    ///
    /// Void residues contribute 0; digits wrap into [0,59] first.
    pub fn bridge_score(&self, digits: &[i64]) -> i64 {
        digits
            .iter()
            .map(|d| self.entry(*d).bridge_level as i64)
            .sum()
    }

    /// Count of digits whose selected element passes the frontier predicate.
    ///
    /// Default mode: `FrontierPreferred`.
    pub fn frontier_weight(&self, digits: &[i64], opts: &AggregateOptions) -> i64 {
        digits
            .iter()
            .filter_map(|d| select(self.entry(*d), opts))
            .filter(|e| (opts.frontier)(e.z))
            .count() as i64
    }

    /// Componentwise sum of (alpha, beta, gamma) across selected elements.
    ///
    /// Default mode: `Low`.
    pub fn charge_vector(&self, digits: &[i64], opts: &AggregateOptions) -> ChargeVector {
        let mut charge = ChargeVector::default();
        for d in digits {
            if let Some(e) = select(self.entry(*d), opts) {
                charge.c2 += e.factors.alpha as i64;
                charge.c3 += e.factors.beta as i64;
                charge.c5 += e.factors.gamma as i64;
            }
        }
        charge
    }

    /// Componentwise sum of hepta triples, raw and mod 7.
    ///
    /// Default mode: `High`.
    pub fn hepta_signature(&self, digits: &[i64], opts: &AggregateOptions) -> HeptaSignature {
        let mut total = [0i64; 3];
        for d in digits {
            if let Some(e) = select(self.entry(*d), opts) {
                for (slot, h) in total.iter_mut().zip(e.hepta.iter()) {
                    *slot += *h as i64;
                }
            }
        }
        HeptaSignature {
            total,
            mod7: [total[0] % 7, total[1] % 7, total[2] % 7],
        }
    }

    /// Complex sum over the distinct populated residues touched by `digits`.
    ///
    /// Per residue: weight = 2^α·3^β·5^γ of the selected element, phase =
    /// 2π·residue/60 + λ·averageLayer. Empty or all-void input yields the
    /// all-zero wave. Default mode: `Low`.
    pub fn element_wave(&self, digits: &[i64], opts: &AggregateOptions) -> ElementWave {
        let mut touched = [false; 60];
        for d in digits {
            touched[d.rem_euclid(60) as usize] = true;
        }

        let mut real = 0.0;
        let mut imag = 0.0;
        let mut any = false;
        for residue in 0..60i64 {
            if !touched[residue as usize] {
                continue;
            }
            let entry = self.entry(residue);
            let (element, layer) = match (select(entry, opts), entry.average_layer) {
                (Some(e), Some(l)) => (e, l),
                _ => continue,
            };
            any = true;
            let weight = element.factors.smooth_weight();
            let phase = 2.0 * std::f64::consts::PI * residue as f64 / 60.0
                + opts.layer_lambda * layer;
            real += weight * phase.cos();
            imag += weight * phase.sin();
        }

        if !any {
            return ElementWave::default();
        }
        ElementWave {
            real,
            imag,
            magnitude: real.hypot(imag),
            angle: imag.atan2(real),
        }
    }

    /// Which residues a digit sequence actually exercises
    pub fn residue_usage(&self, digits: &[i64], opts: &AggregateOptions) -> ResidueUsage {
        let mut touched = [false; 60];
        for d in digits {
            touched[d.rem_euclid(60) as usize] = true;
        }

        let mut usage = ResidueUsage::default();
        let mut distinct = 0usize;
        for residue in 0..60i64 {
            if !touched[residue as usize] {
                continue;
            }
            distinct += 1;
            let entry = self.entry(residue);
            let r = residue as u8;
            if entry.is_void() {
                usage.void_hits.push(r);
                continue;
            }
            usage.used.push(r);
            if entry.bridge_level == 2 {
                usage.bridge_hits.push(r);
            }
            if select(entry, opts).map(|e| (opts.frontier)(e.z)).unwrap_or(false) {
                usage.frontier_hits.push(r);
            }
        }
        usage.coverage = distinct as f64 / 60.0;
        usage
    }
}

/// Bridge score over a genome's concatenated strands
pub fn genome_bridge_score(genome: &Genome) -> i64 {
    residue_table().bridge_score(&genome.concat())
}

/// Frontier weight over a genome, frontier-preferred selection
pub fn genome_frontier_weight(genome: &Genome) -> i64 {
    residue_table().frontier_weight(&genome.concat(), &AggregateOptions::frontier_preferred())
}

/// Charge vector over a genome, low selection
pub fn genome_charge_vector(genome: &Genome) -> ChargeVector {
    residue_table().charge_vector(&genome.concat(), &AggregateOptions::low())
}

/// Hepta signature over a genome, high selection
pub fn genome_hepta_signature(genome: &Genome) -> HeptaSignature {
    residue_table().hepta_signature(&genome.concat(), &AggregateOptions::high())
}

/// Element wave over a genome, low selection
pub fn genome_element_wave(genome: &Genome) -> ElementWave {
    residue_table().element_wave(&genome.concat(), &AggregateOptions::low())
}

/// Residue usage over a genome, frontier-preferred selection
pub fn genome_residue_usage(genome: &Genome) -> ResidueUsage {
    residue_table().residue_usage(&genome.concat(), &AggregateOptions::frontier_preferred())
}

/// Every genome-level aggregate in one record — the boundary object external
/// trait-derivation consumers read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeTraits {
    pub bridge_score: i64,
    pub frontier_weight: i64,
    pub charge: ChargeVector,
    pub hepta: HeptaSignature,
    pub wave: ElementWave,
    pub usage: ResidueUsage,
}

impl GenomeTraits {
    pub fn of(genome: &Genome) -> Self {
        Self {
            bridge_score: genome_bridge_score(genome),
            frontier_weight: genome_frontier_weight(genome),
            charge: genome_charge_vector(genome),
            hepta: genome_hepta_signature(genome),
            wave: genome_element_wave(genome),
            usage: genome_residue_usage(genome),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "bridge={} frontier={} charge=({},{},{}) hepta={:?} |wave|={:.3}∠{:.3} coverage={:.1}%",
            self.bridge_score,
            self.frontier_weight,
            self.charge.c2,
            self.charge.c3,
            self.charge.c5,
            self.hepta.mod7,
            self.wave.magnitude,
            self.wave.angle,
            self.usage.coverage * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loose_genome(red: Vec<u8>, blue: Vec<u8>, black: Vec<u8>) -> Genome {
        Genome { red, blue, black }
    }

    #[test]
    fn test_bridge_score_counts_levels() {
        let table = residue_table();
        // residues 1, 33, 2 each hold two elements under the default bound
        assert_eq!(table.bridge_score(&[1, 33, 2]), 6);
        // residue 59 holds only Z=59
        assert_eq!(table.bridge_score(&[59]), 1);
    }

    #[test]
    fn test_bridge_score_wraps_negative_digits() {
        let table = residue_table();
        assert_eq!(table.bridge_score(&[-59]), table.bridge_score(&[1]));
    }

    #[test]
    fn test_charge_vector_of_thirty() {
        let table = residue_table();
        let charge = table.charge_vector(&[30], &AggregateOptions::low());
        assert_eq!(charge, ChargeVector { c2: 1, c3: 1, c5: 1 });
    }

    #[test]
    fn test_hepta_signature_high_selection() {
        let table = residue_table();
        let sig = table.hepta_signature(&[1, 33], &AggregateOptions::high());
        assert_eq!(sig.total, [7, 7, 2]);
        assert_eq!(sig.mod7, [0, 0, 2]);
    }

    #[test]
    fn test_frontier_selection_modes_disagree() {
        let table = residue_table();
        // Residue 33: low occupant Z=33 (not frontier), high Z=93 (frontier)
        let low = table.frontier_weight(&[33], &AggregateOptions::low());
        let preferred = table.frontier_weight(&[33], &AggregateOptions::frontier_preferred());
        assert_eq!(low, 0);
        assert_eq!(preferred, 1);
    }

    #[test]
    fn test_frontier_preferred_falls_back() {
        let table = residue_table();
        // Residue 1: neither Z=1 nor Z=61 is frontier, but selection still lands
        assert_eq!(table.frontier_weight(&[1], &AggregateOptions::frontier_preferred()), 0);
        let charge = table.charge_vector(&[1], &AggregateOptions::frontier_preferred());
        assert_eq!(charge, ChargeVector { c2: 0, c3: 0, c5: 0 });
    }

    #[test]
    fn test_custom_frontier_selector() {
        let table = residue_table();
        fn everything(_z: u32) -> bool {
            true
        }
        let opts = AggregateOptions {
            mode: SelectionMode::FrontierPreferred,
            frontier: everything,
            layer_lambda: 0.5,
        };
        assert_eq!(table.frontier_weight(&[1, 2, 3], &opts), 3);
    }

    #[test]
    fn test_element_wave_of_hydrogen_residue() {
        let table = residue_table();
        let wave = table.element_wave(&[1], &AggregateOptions::low());
        assert!((wave.real - 0.9376).abs() < 1e-3, "real={}", wave.real);
        assert!((wave.imag - 0.3476).abs() < 1e-3, "imag={}", wave.imag);
        assert!((wave.magnitude - 1.0).abs() < 1e-3);
        assert!((wave.angle - 0.3547).abs() < 1e-3);
    }

    #[test]
    fn test_element_wave_counts_residues_once() {
        let table = residue_table();
        let once = table.element_wave(&[1], &AggregateOptions::low());
        let thrice = table.element_wave(&[1, 1, 61], &AggregateOptions::low());
        assert_eq!(once, thrice);
    }

    #[test]
    fn test_element_wave_empty_input() {
        let table = residue_table();
        assert_eq!(table.element_wave(&[], &AggregateOptions::low()), ElementWave::default());
    }

    #[test]
    fn test_element_wave_all_void_input() {
        let small = ResidueTable::build(5).unwrap();
        let wave = small.element_wave(&[40, 41], &AggregateOptions::low());
        assert_eq!(wave, ElementWave::default());
    }

    #[test]
    fn test_genome_level_scenario() {
        let genome = loose_genome(vec![1], vec![33], vec![2]);
        assert_eq!(genome_bridge_score(&genome), 6);
        assert_eq!(genome_charge_vector(&genome), ChargeVector { c2: 1, c3: 1, c5: 0 });
        let sig = genome_hepta_signature(&genome);
        assert_eq!(sig.total, [13, 8, 3]);
        assert_eq!(sig.mod7, [6, 1, 3]);
    }

    #[test]
    fn test_residue_usage_tracks_voids() {
        let small = ResidueTable::build(10).unwrap();
        let usage = small.residue_usage(&[1, 1, 40], &AggregateOptions::frontier_preferred());
        assert_eq!(usage.used, vec![1]);
        assert_eq!(usage.void_hits, vec![40]);
        assert!(usage.bridge_hits.is_empty());
        assert!((usage.coverage - 2.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_genome_traits_bundle() {
        let genome = loose_genome(vec![1], vec![33], vec![2]);
        let traits = GenomeTraits::of(&genome);
        assert_eq!(traits.bridge_score, 6);
        assert_eq!(traits.usage.used, vec![1, 2, 33]);
        assert_eq!(traits.usage.frontier_hits, vec![33]);
        println!("{}", traits.summary());
    }
}
