//! Compact genome encoding of a species' rule table.
//!
//! A genome is two 16-character binary strings (birth and survival). Each
//! string packs 8 two-bit activation codes, one per total-neighbor-count
//! bucket 1..=8: bit 0 says same-species support qualifies, bit 1 says
//! other-species support qualifies.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Length of one genome strand in bits.
pub const GENOME_BITS: usize = 16;

/// Per-bucket activation code.
///
/// Decides whether a given mix of supporting neighbors activates birth or
/// survival, given that their total selects this bucket.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Code {
    /// "00" - never activates
    #[default]
    None,
    /// "10" - activates only when all supporting neighbors are same-species
    SelfOnly,
    /// "01" - activates only when all supporting neighbors are other-species
    OtherOnly,
    /// "11" - activates for any mixture summing to the bucket total
    Either,
}

impl Code {
    /// Build a code from its (self, other) qualifier bits
    pub const fn from_bits(self_bit: bool, other_bit: bool) -> Self {
        match (self_bit, other_bit) {
            (false, false) => Code::None,
            (true, false) => Code::SelfOnly,
            (false, true) => Code::OtherOnly,
            (true, true) => Code::Either,
        }
    }

    /// The (self, other) qualifier bits of this code
    pub const fn bits(self) -> (bool, bool) {
        match self {
            Code::None => (false, false),
            Code::SelfOnly => (true, false),
            Code::OtherOnly => (false, true),
            Code::Either => (true, true),
        }
    }

    /// Whether this code activates for the given neighbor mix.
    ///
    /// Codes are defined only for totals in 1..=8; anything outside denies.
    pub fn allows(self, n_self: u8, n_other: u8) -> bool {
        let total = n_self + n_other;
        if !(1..=8).contains(&total) {
            return false;
        }
        match self {
            Code::None => false,
            Code::SelfOnly => n_self == total && n_other == 0,
            Code::OtherOnly => n_other == total && n_self == 0,
            Code::Either => true,
        }
    }
}

/// Decode a 16-character '0'/'1' string into 8 per-bucket codes.
///
/// Index 0 of the result is the code for total-neighbor-count 1, index 7
/// for count 8.
pub fn decode_genome(bits: &str) -> Result<[Code; 8], SimError> {
    if bits.len() != GENOME_BITS {
        return Err(SimError::InvalidGenomeFormat {
            reason: format!("expected {GENOME_BITS} characters, got {}", bits.len()),
        });
    }
    let mut digits = [false; GENOME_BITS];
    for (i, ch) in bits.chars().enumerate() {
        digits[i] = match ch {
            '0' => false,
            '1' => true,
            other => {
                return Err(SimError::InvalidGenomeFormat {
                    reason: format!("non-binary character '{other}'"),
                });
            }
        };
    }
    let mut codes = [Code::None; 8];
    for (bucket, code) in codes.iter_mut().enumerate() {
        *code = Code::from_bits(digits[bucket * 2], digits[bucket * 2 + 1]);
    }
    Ok(codes)
}

/// Encode 8 per-bucket codes back into a 16-character bit string.
/// Exact inverse of [`decode_genome`].
pub fn encode_genome(codes: &[Code; 8]) -> String {
    let mut bits = String::with_capacity(GENOME_BITS);
    for code in codes {
        let (self_bit, other_bit) = code.bits();
        bits.push(if self_bit { '1' } else { '0' });
        bits.push(if other_bit { '1' } else { '0' });
    }
    bits
}

/// One record of a genome bundle.
///
/// Bundles are JSON arrays of these records; each record is validated
/// individually when decoded or assigned to a species.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    pub id: String,
    pub birth: String,
    pub survival: String,
}

impl Genome {
    /// Decode both strands, validating the record.
    /// Returns (birth codes, survival codes).
    pub fn decode(&self) -> Result<([Code; 8], [Code; 8]), SimError> {
        Ok((decode_genome(&self.birth)?, decode_genome(&self.survival)?))
    }
}

/// Parse a JSON genome bundle into its records.
///
/// Only the shape is checked here; bit strings are validated per record
/// at decode/assignment time.
pub fn parse_bundle(json: &str) -> Result<Vec<Genome>, SimError> {
    Ok(serde_json::from_str(json)?)
}
