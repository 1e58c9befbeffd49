//! Result of a completed matching run.
//!
//! `MatchResult` pairs each matched resident with its program and lists
//! the residents left unmatched. It borrows the engine's registries rather
//! than copying them, so every read observes the final matching state and
//! the engine cannot be mutated while a result is alive.

use std::collections::BTreeMap;

use crate::engine::MatchStats;
use crate::roster::{ProgramRegistry, ResidentRegistry};
use crate::types::{MatchReceipt, Program, ProgramId, Resident, ResidentId};

/// Final (or in-progress) assignment of a matching run.
///
/// Matches are keyed by resident id. The registries are borrowed from the
/// engine that produced the result.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// Matched resident id -> program id, ordered by resident id
    matches: BTreeMap<ResidentId, ProgramId>,

    /// Residents whose walk ended without admission, in rejection order
    unmatched: Vec<ResidentId>,

    residents: &'a ResidentRegistry,
    programs: &'a ProgramRegistry,
    stats: MatchStats,
}

impl<'a> MatchResult<'a> {
    /// Collect every assigned resident from the registry.
    pub fn new(
        residents: &'a ResidentRegistry,
        programs: &'a ProgramRegistry,
        unmatched: Vec<ResidentId>,
        stats: MatchStats,
    ) -> Self {
        let matches = residents
            .residents()
            .filter_map(|r| r.matched_program().map(|p| (r.id, p.clone())))
            .collect();

        Self {
            matches,
            unmatched,
            residents,
            programs,
            stats,
        }
    }

    // ========================================================================
    // Assignment
    // ========================================================================

    #[inline]
    pub fn matches(&self) -> &BTreeMap<ResidentId, ProgramId> {
        &self.matches
    }

    #[inline]
    pub fn unmatched(&self) -> &[ResidentId] {
        &self.unmatched
    }

    /// Program holding a resident, if matched
    pub fn program_of(&self, resident_id: ResidentId) -> Option<&'a Program> {
        let program_id = self.matches.get(&resident_id)?;
        self.programs.get(program_id).map(|roster| roster.program())
    }

    /// Matched residents with their programs, ordered by resident id
    pub fn matched_pairs(&self) -> impl Iterator<Item = (&'a Resident, &'a Program)> + '_ {
        let residents = self.residents;
        let programs = self.programs;

        self.matches.iter().filter_map(move |(&resident_id, program_id)| {
            let resident = residents.get_by_id(resident_id)?;
            let roster = programs.get(program_id)?;
            Some((resident, roster.program()))
        })
    }

    /// Unmatched residents, in rejection order
    pub fn unmatched_residents(&self) -> impl Iterator<Item = &'a Resident> + '_ {
        let residents = self.residents;
        self.unmatched
            .iter()
            .filter_map(move |&resident_id| residents.get_by_id(resident_id))
    }

    // ========================================================================
    // Registries and statistics
    // ========================================================================

    #[inline]
    pub fn residents(&self) -> &'a ResidentRegistry {
        self.residents
    }

    #[inline]
    pub fn programs(&self) -> &'a ProgramRegistry {
        self.programs
    }

    #[inline]
    pub fn stats(&self) -> MatchStats {
        self.stats
    }

    #[inline]
    pub fn matched_count(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    /// Open positions left in one program
    pub fn remaining_capacity(&self, program_id: &str) -> Option<usize> {
        self.programs
            .get(program_id)
            .map(|roster| roster.remaining_capacity())
    }

    /// Open positions left across all programs
    #[inline]
    pub fn positions_available(&self) -> usize {
        self.programs.positions_available()
    }

    /// Resident/program pairs that would both rather be matched together.
    ///
    /// A pair blocks when the resident ranks the program above its current
    /// placement (or is unmatched), the program ranks the resident, and the
    /// program either has room or prefers the resident to one of its
    /// current matches. An empty list means the assignment is stable.
    pub fn blocking_pairs(&self) -> Vec<(ResidentId, ProgramId)> {
        let mut pairs = Vec::new();

        for resident in self.residents.residents() {
            let preferences = resident.preferences();
            let cutoff = resident
                .matched_program()
                .and_then(|held| preferences.iter().position(|p| p == held))
                .unwrap_or(preferences.len());

            for program_id in &preferences[..cutoff] {
                let Some(roster) = self.programs.get(program_id) else {
                    continue;
                };
                if !roster.is_acceptable(resident.id) {
                    continue;
                }
                if !roster.is_full() || roster.prefers_over_worst(resident.id) {
                    pairs.push((resident.id, program_id.clone()));
                }
            }
        }

        pairs
    }

    /// Summarize the run with a digest of the assignment
    pub fn receipt(&self) -> MatchReceipt {
        let digest = MatchReceipt::compute_digest(
            self.matches.iter().map(|(&r, p)| (r, p.as_str())),
            self.unmatched.iter().copied(),
        );

        MatchReceipt::new(
            self.residents.len() as u64,
            self.programs.len() as u64,
            self.matched_count() as u64,
            self.unmatched_count() as u64,
            self.positions_available() as u64,
            self.stats.proposals,
            self.stats.evictions,
            digest,
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::engine::MatchingEngine;
    use crate::types::{Program, Resident, ResidentId};

    fn resident(id: ResidentId, prefs: &[&str]) -> Resident {
        Resident::new(
            id,
            format!("first{id}"),
            format!("last{id}"),
            prefs.iter().map(|p| p.to_string()).collect(),
        )
    }

    fn engine() -> MatchingEngine {
        MatchingEngine::new(
            vec![
                resident(1, &["A", "B"]),
                resident(2, &["A"]),
                resident(3, &["A", "B"]),
                resident(4, &["C"]),
            ],
            vec![
                Program::new("A", "Alpha", 1, vec![3, 1, 2]),
                Program::new("B", "Beta", 2, vec![1, 3]),
                Program::new("C", "Gamma", 1, vec![]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_result_assignment() {
        let mut engine = engine();
        let result = engine.run();

        assert_eq!(result.matched_count(), 2);
        assert_eq!(result.program_of(3).map(|p| p.id.as_str()), Some("A"));
        assert_eq!(result.program_of(1).map(|p| p.id.as_str()), Some("B"));
        assert!(result.program_of(2).is_none());
        assert_eq!(result.unmatched(), &[2, 4]);
        assert_eq!(result.unmatched_count(), 2);
    }

    #[test]
    fn test_result_statistics() {
        let mut engine = engine();
        let result = engine.run();

        assert_eq!(result.remaining_capacity("A"), Some(0));
        assert_eq!(result.remaining_capacity("B"), Some(1));
        assert_eq!(result.remaining_capacity("C"), Some(1));
        assert_eq!(result.remaining_capacity("Z"), None);
        assert_eq!(result.positions_available(), 2);
        assert_eq!(result.residents().len(), 4);
        assert_eq!(result.programs().len(), 3);
    }

    #[test]
    fn test_matched_pairs_ordered_by_resident() {
        let mut engine = engine();
        let result = engine.run();

        let pairs: Vec<_> = result
            .matched_pairs()
            .map(|(r, p)| (r.id, p.id.clone()))
            .collect();
        assert_eq!(pairs, vec![(1, "B".to_string()), (3, "A".to_string())]);

        let unmatched: Vec<_> = result.unmatched_residents().map(|r| r.id).collect();
        assert_eq!(unmatched, vec![2, 4]);
    }

    #[test]
    fn test_result_has_no_blocking_pairs() {
        let mut engine = engine();
        let result = engine.run();
        assert!(result.blocking_pairs().is_empty());
    }

    #[test]
    fn test_blocking_pairs_detected_before_run() {
        // Nobody has proposed yet, so every mutually acceptable pair blocks
        let engine = engine();
        let result = engine.result();

        let pairs = result.blocking_pairs();
        assert!(pairs.contains(&(1, "A".to_string())));
        assert!(pairs.contains(&(3, "B".to_string())));
        assert!(!pairs.iter().any(|(r, _)| *r == 4));
    }

    #[test]
    fn test_receipt_counts() {
        let mut engine = engine();
        let receipt = engine.run().receipt();

        assert_eq!(receipt.residents, 4);
        assert_eq!(receipt.programs, 3);
        assert_eq!(receipt.matched, 2);
        assert_eq!(receipt.unmatched, 2);
        assert_eq!(receipt.positions_available, 2);
        assert_eq!(receipt.match_rate(), Some(0.5));
    }
}
