use std::collections::BTreeSet;

use super::cell::Species;
use super::genome::{Code, Genome};
use crate::error::SimError;

/// Set of neighbor counts in 1..=8.
///
/// Parsed from comma-separated lists with ranges, e.g. "3", "2-3,6".
/// Counts outside 1..=8 and unparsable tokens are dropped, not rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountSet(BTreeSet<u8>);

impl CountSet {
    pub fn parse(text: &str) -> Self {
        let mut set = BTreeSet::new();
        for token in text.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if let Some((lo, hi)) = token.split_once('-') {
                if let (Ok(lo), Ok(hi)) = (lo.trim().parse::<u8>(), hi.trim().parse::<u8>()) {
                    set.extend(lo..=hi);
                }
            } else if let Ok(n) = token.parse::<u8>() {
                set.insert(n);
            }
        }
        set.retain(|n| (1..=8).contains(n));
        Self(set)
    }

    pub fn from_counts(counts: &[u8]) -> Self {
        let mut set: BTreeSet<u8> = counts.iter().copied().collect();
        set.retain(|n| (1..=8).contains(n));
        Self(set)
    }

    pub fn contains(&self, n: u8) -> bool {
        self.0.contains(&n)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build per-bucket codes from manual self/other count sets.
///
/// For each total-count bucket: Either if both sets contain it, SelfOnly or
/// OtherOnly if exactly one does, None otherwise.
pub fn codes_from_counts(self_set: &CountSet, other_set: &CountSet) -> [Code; 8] {
    let mut codes = [Code::None; 8];
    for bucket in 1..=8u8 {
        codes[(bucket - 1) as usize] =
            Code::from_bits(self_set.contains(bucket), other_set.contains(bucket));
    }
    codes
}

/// Rule representation for one species.
///
/// A species uses exactly one form at a time; assigning one form replaces
/// the other.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleSpec {
    /// Classic count sets plus a minimum other-species support requirement,
    /// configured independently for birth and survival.
    Legacy {
        birth: CountSet,
        survival: CountSet,
        birth_threshold: u8,
        survival_threshold: u8,
    },
    /// Genome-derived activation codes indexed by total neighbor count.
    Genome {
        birth: [Code; 8],
        survival: [Code; 8],
    },
}

impl RuleSpec {
    /// Classic B3/S23 with no cross-species requirement
    pub fn classic_life() -> Self {
        RuleSpec::Legacy {
            birth: CountSet::from_counts(&[3]),
            survival: CountSet::from_counts(&[2, 3]),
            birth_threshold: 0,
            survival_threshold: 0,
        }
    }

    /// Build the genome form from a bundle record
    pub fn from_genome(genome: &Genome) -> Result<Self, SimError> {
        let (birth, survival) = genome.decode()?;
        Ok(RuleSpec::Genome { birth, survival })
    }

    pub fn permits_birth(&self, n_self: u8, n_other: u8) -> bool {
        match self {
            RuleSpec::Legacy {
                birth,
                birth_threshold,
                ..
            } => birth.contains(n_self) && n_other >= *birth_threshold,
            RuleSpec::Genome { birth, .. } => {
                bucket_code(birth, n_self + n_other).allows(n_self, n_other)
            }
        }
    }

    pub fn permits_survival(&self, n_self: u8, n_other: u8) -> bool {
        match self {
            RuleSpec::Legacy {
                survival,
                survival_threshold,
                ..
            } => survival.contains(n_self) && n_other >= *survival_threshold,
            RuleSpec::Genome { survival, .. } => {
                bucket_code(survival, n_self + n_other).allows(n_self, n_other)
            }
        }
    }
}

/// Code for a total neighbor count; totals without a bucket deny
fn bucket_code(codes: &[Code; 8], total: u8) -> Code {
    if (1..=8).contains(&total) {
        codes[(total - 1) as usize]
    } else {
        Code::None
    }
}

/// Active rule representations for both species.
///
/// A species with no representation behaves as "always deny": its cells
/// all die and it gets no births. The two species may use different
/// representations simultaneously.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    a: Option<RuleSpec>,
    b: Option<RuleSpec>,
}

impl RuleSet {
    /// Both species unconfigured (always deny)
    pub fn new() -> Self {
        Self::default()
    }

    /// Both species on classic B3/S23
    pub fn classic() -> Self {
        Self {
            a: Some(RuleSpec::classic_life()),
            b: Some(RuleSpec::classic_life()),
        }
    }

    pub fn for_species(&self, species: Species) -> Option<&RuleSpec> {
        match species {
            Species::A => self.a.as_ref(),
            Species::B => self.b.as_ref(),
        }
    }

    /// Assign a rule representation, replacing whichever form was active
    pub fn assign(&mut self, species: Species, spec: RuleSpec) {
        let slot = match species {
            Species::A => &mut self.a,
            Species::B => &mut self.b,
        };
        *slot = Some(spec);
    }

    /// Decode and assign a genome, clearing any manual rules for the species
    pub fn assign_genome(&mut self, species: Species, genome: &Genome) -> Result<(), SimError> {
        let spec = RuleSpec::from_genome(genome)?;
        self.assign(species, spec);
        Ok(())
    }

    /// Assign legacy count sets with cross-species thresholds,
    /// clearing any genome for the species
    pub fn set_legacy(
        &mut self,
        species: Species,
        birth: CountSet,
        survival: CountSet,
        birth_threshold: u8,
        survival_threshold: u8,
    ) {
        self.assign(
            species,
            RuleSpec::Legacy {
                birth,
                survival,
                birth_threshold,
                survival_threshold,
            },
        );
    }

    /// Build genome codes from manual self/other count sets and assign them
    pub fn set_manual_codes(
        &mut self,
        species: Species,
        birth_self: &CountSet,
        birth_other: &CountSet,
        survival_self: &CountSet,
        survival_other: &CountSet,
    ) {
        self.assign(
            species,
            RuleSpec::Genome {
                birth: codes_from_counts(birth_self, birth_other),
                survival: codes_from_counts(survival_self, survival_other),
            },
        );
    }

    /// Remove the species' rule representation entirely
    pub fn remove(&mut self, species: Species) {
        match species {
            Species::A => self.a = None,
            Species::B => self.b = None,
        }
    }

    pub fn permits_birth(&self, species: Species, n_self: u8, n_other: u8) -> bool {
        self.for_species(species)
            .is_some_and(|spec| spec.permits_birth(n_self, n_other))
    }

    pub fn permits_survival(&self, species: Species, n_self: u8, n_other: u8) -> bool {
        self.for_species(species)
            .is_some_and(|spec| spec.permits_survival(n_self, n_other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::genome::decode_genome;

    #[test]
    fn test_parse_single_count() {
        let set = CountSet::parse("3");
        assert!(set.contains(3));
        assert!(!set.contains(2));
    }

    #[test]
    fn test_parse_ranges_and_lists() {
        let set = CountSet::parse("2-3,6");
        assert!(set.contains(2));
        assert!(set.contains(3));
        assert!(set.contains(6));
        assert!(!set.contains(4));
    }

    #[test]
    fn test_parse_drops_out_of_range_and_junk() {
        let set = CountSet::parse("0,9,x,3");
        assert!(set.contains(3));
        assert!(!set.contains(0));
        assert!(!set.contains(9));

        assert!(CountSet::parse("").is_empty());
        assert!(CountSet::parse("abc").is_empty());
    }

    #[test]
    fn test_codes_from_counts_table() {
        let self_set = CountSet::from_counts(&[2, 3]);
        let other_set = CountSet::from_counts(&[3, 4]);
        let codes = codes_from_counts(&self_set, &other_set);

        assert_eq!(codes[1], Code::SelfOnly); // bucket 2
        assert_eq!(codes[2], Code::Either); // bucket 3
        assert_eq!(codes[3], Code::OtherOnly); // bucket 4
        assert_eq!(codes[4], Code::None); // bucket 5
    }

    #[test]
    fn test_legacy_threshold_gates_birth() {
        let spec = RuleSpec::Legacy {
            birth: CountSet::from_counts(&[3]),
            survival: CountSet::from_counts(&[2, 3]),
            birth_threshold: 2,
            survival_threshold: 0,
        };
        // three own neighbors, but the other-species requirement is unmet
        assert!(!spec.permits_birth(3, 0));
        assert!(!spec.permits_birth(3, 1));
        assert!(spec.permits_birth(3, 2));
        // survival has its own independent threshold
        assert!(spec.permits_survival(2, 0));
    }

    #[test]
    fn test_legacy_ignores_buckets() {
        // nSelf=3 qualifies regardless of how many other-species neighbors
        // push the total past 8
        let spec = RuleSpec::classic_life();
        assert!(spec.permits_birth(3, 5));
        assert!(spec.permits_survival(3, 5));
    }

    #[test]
    fn test_genome_spec_uses_total_bucket() {
        let spec = RuleSpec::Genome {
            birth: decode_genome("0000110000000000").unwrap(), // Either at bucket 3
            survival: decode_genome("0000000000000000").unwrap(),
        };
        assert!(spec.permits_birth(3, 0));
        assert!(spec.permits_birth(1, 2));
        assert!(!spec.permits_birth(2, 0)); // total 2, no code
        assert!(!spec.permits_survival(3, 0));
    }

    #[test]
    fn test_unconfigured_species_denies() {
        let rules = RuleSet::new();
        assert!(!rules.permits_birth(Species::A, 3, 0));
        assert!(!rules.permits_survival(Species::B, 2, 0));
    }

    #[test]
    fn test_assignment_is_exclusive() {
        let mut rules = RuleSet::classic();
        let genome = Genome {
            id: "g".into(),
            birth: "0000110000000000".into(),
            survival: "0000110000000000".into(),
        };
        rules.assign_genome(Species::A, &genome).unwrap();
        assert!(matches!(
            rules.for_species(Species::A),
            Some(RuleSpec::Genome { .. })
        ));

        // manual edit replaces the genome again
        rules.set_legacy(
            Species::A,
            CountSet::from_counts(&[3]),
            CountSet::from_counts(&[2, 3]),
            0,
            0,
        );
        assert!(matches!(
            rules.for_species(Species::A),
            Some(RuleSpec::Legacy { .. })
        ));
        // species B untouched throughout
        assert!(matches!(
            rules.for_species(Species::B),
            Some(RuleSpec::Legacy { .. })
        ));
    }

    #[test]
    fn test_manual_codes_assignment() {
        let mut rules = RuleSet::new();
        rules.set_manual_codes(
            Species::B,
            &CountSet::from_counts(&[3]),
            &CountSet::from_counts(&[3, 4]),
            &CountSet::from_counts(&[2, 3]),
            &CountSet::from_counts(&[]),
        );
        // bucket 3 birth is Either, bucket 4 is OtherOnly
        assert!(rules.permits_birth(Species::B, 3, 0));
        assert!(rules.permits_birth(Species::B, 0, 4));
        assert!(!rules.permits_birth(Species::B, 2, 2));
        // survival came out SelfOnly
        assert!(rules.permits_survival(Species::B, 2, 0));
        assert!(!rules.permits_survival(Species::B, 1, 1));
    }

    #[test]
    fn test_bad_genome_leaves_rules_untouched() {
        let mut rules = RuleSet::classic();
        let bad = Genome {
            id: "bad".into(),
            birth: "101".into(),
            survival: "0000110000000000".into(),
        };
        assert!(rules.assign_genome(Species::A, &bad).is_err());
        assert!(matches!(
            rules.for_species(Species::A),
            Some(RuleSpec::Legacy { .. })
        ));
    }
}
