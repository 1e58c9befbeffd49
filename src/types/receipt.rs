//! Match receipt summarizing a completed run.
//!
//! The receipt carries the headline counts of a run together with a digest
//! of the final assignment, so two runs can be compared without diffing
//! their full reports.

use sha2::{Digest, Sha256};

/// Marker written in place of a program id for unmatched residents
const UNMATCHED_TAG: u8 = 0xFF;

/// Summary of a completed matching run.
///
/// ## Digest
///
/// The 32-byte digest is a SHA-256 hash over the canonical encoding of the
/// assignment (see [`MatchReceipt::compute_digest`]). Identical inputs
/// always produce identical digests.
///
/// ## Example
///
/// ```
/// use residency_match::types::MatchReceipt;
///
/// let receipt = MatchReceipt::new(
///     10,         // residents
///     3,          // programs
///     8,          // matched
///     2,          // unmatched
///     1,          // positions_available
///     14,         // proposals
///     4,          // evictions
///     [0u8; 32],  // digest (would be computed)
/// );
///
/// assert_eq!(receipt.match_rate(), Some(0.8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchReceipt {
    /// Number of residents in the run
    pub residents: u64,

    /// Number of programs in the run
    pub programs: u64,

    /// Residents holding a program at the end
    pub matched: u64,

    /// Residents left without a program
    pub unmatched: u64,

    /// Sum over programs of quota minus matched count
    pub positions_available: u64,

    /// Number of program considerations made while walking preference lists
    pub proposals: u64,

    /// Number of residents displaced by a preferred proposer
    pub evictions: u64,

    /// SHA-256 of the canonical assignment encoding
    pub digest: [u8; 32],
}

impl MatchReceipt {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        residents: u64,
        programs: u64,
        matched: u64,
        unmatched: u64,
        positions_available: u64,
        proposals: u64,
        evictions: u64,
        digest: [u8; 32],
    ) -> Self {
        Self {
            residents,
            programs,
            matched,
            unmatched,
            positions_available,
            proposals,
            evictions,
            digest,
        }
    }

    /// Hash an assignment into a 32-byte digest.
    ///
    /// `matches` must be ordered by resident id and `unmatched` in the order
    /// the engine rejected them; both orders are deterministic for a given
    /// input. Each match is encoded as the little-endian resident id, the
    /// program id bytes and a zero terminator. Each unmatched resident is
    /// encoded as its little-endian id followed by `0xFF`.
    pub fn compute_digest<'a, M, U>(matches: M, unmatched: U) -> [u8; 32]
    where
        M: IntoIterator<Item = (u64, &'a str)>,
        U: IntoIterator<Item = u64>,
    {
        let mut hasher = Sha256::new();

        for (resident_id, program_id) in matches {
            hasher.update(resident_id.to_le_bytes());
            hasher.update(program_id.as_bytes());
            hasher.update([0u8]);
        }

        for resident_id in unmatched {
            hasher.update(resident_id.to_le_bytes());
            hasher.update([UNMATCHED_TAG]);
        }

        let result = hasher.finalize();

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&result);
        digest
    }

    /// Get the digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Check if the run had no residents
    pub fn is_empty(&self) -> bool {
        self.residents == 0
    }

    /// Fraction of residents that ended matched
    ///
    /// Returns None if the run had no residents.
    pub fn match_rate(&self) -> Option<f64> {
        if self.residents == 0 {
            None
        } else {
            Some(self.matched as f64 / self.residents as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
