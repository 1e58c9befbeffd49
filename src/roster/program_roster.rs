//! Per-program matching state.
//!
//! ## Design
//!
//! A `ProgramRoster` wraps an immutable [`Program`] with the seats it has
//! filled so far. Seats are kept in admission order.
//!
//! ## Ranking
//!
//! [`ProgramRoster::rank_of`] is the only source of preference order. It is
//! backed by an id-to-position index built once from the program's own
//! preference list, so lookups are O(1). When an id appears more than once
//! the first position wins.
//!
//! ## Capacity
//!
//! The roster does not enforce its quota. [`ProgramRoster::admit`] always
//! succeeds; the engine checks [`ProgramRoster::is_full`] and
//! [`ProgramRoster::prefers_over_worst`] before admitting.

use std::collections::HashMap;

use crate::roster::Seat;
use crate::types::{Program, ProgramId, ResidentId};

/// A program together with the residents it currently holds.
#[derive(Debug, Clone)]
pub struct ProgramRoster {
    /// The program record (immutable for the run)
    program: Program,

    /// Resident id -> position in the program's preference list
    ranks: HashMap<ResidentId, usize>,

    /// Currently seated residents, in admission order
    seats: Vec<Seat>,
}

impl ProgramRoster {
    /// Create an empty roster for a program
    ///
    /// # Example
    ///
    /// ```
    /// use residency_match::roster::ProgramRoster;
    /// use residency_match::types::Program;
    ///
    /// let roster = ProgramRoster::new(Program::new("A", "Anesthesia", 1, vec![2, 1]));
    ///
    /// assert_eq!(roster.rank_of(2), Some(0));
    /// assert_eq!(roster.rank_of(1), Some(1));
    /// assert_eq!(roster.rank_of(9), None);
    /// ```
    pub fn new(program: Program) -> Self {
        let mut ranks = HashMap::with_capacity(program.preferences().len());
        for (rank, &resident_id) in program.preferences().iter().enumerate() {
            ranks.entry(resident_id).or_insert(rank);
        }

        // Only ranked residents can ever be seated
        let capacity = program.quota.min(program.preferences().len());

        Self {
            seats: Vec::with_capacity(capacity),
            program,
            ranks,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn program(&self) -> &Program {
        &self.program
    }

    #[inline]
    pub fn id(&self) -> &ProgramId {
        &self.program.id
    }

    #[inline]
    pub fn quota(&self) -> usize {
        self.program.quota
    }

    /// Currently seated residents, in admission order
    #[inline]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    #[inline]
    pub fn matched_count(&self) -> usize {
        self.seats.len()
    }

    /// Check if every position is taken
    #[inline]
    pub fn is_full(&self) -> bool {
        self.seats.len() >= self.program.quota
    }

    /// Positions still open (quota minus matched count)
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        self.program.quota.saturating_sub(self.seats.len())
    }

    /// Check if a resident currently holds a seat here
    pub fn holds(&self, resident_id: ResidentId) -> bool {
        self.seats.iter().any(|s| s.resident_id == resident_id)
    }

    // ========================================================================
    // Preference queries
    // ========================================================================

    /// Check if the program ranks this resident at all
    #[inline]
    pub fn is_acceptable(&self, resident_id: ResidentId) -> bool {
        self.ranks.contains_key(&resident_id)
    }

    /// Position of a resident in the program's preference list
    ///
    /// # Returns
    ///
    /// `Some(0)` for the most preferred resident, `None` if unranked
    #[inline]
    pub fn rank_of(&self, resident_id: ResidentId) -> Option<usize> {
        self.ranks.get(&resident_id).copied()
    }

    /// Rank used for comparisons; unranked residents sort last
    #[inline]
    fn standing(&self, resident_id: ResidentId) -> usize {
        self.rank_of(resident_id).unwrap_or(usize::MAX)
    }

    /// Check if at least one seated resident ranks below `resident_id`
    ///
    /// Does not modify the roster. An unranked candidate is never preferred,
    /// even over an unranked incumbent; unranked ids do not sort ahead of
    /// ranked ones the way a `-1` rank would.
    ///
    /// # Example
    ///
    /// ```
    /// use residency_match::roster::ProgramRoster;
    /// use residency_match::types::Program;
    ///
    /// let mut roster = ProgramRoster::new(Program::new("A", "Anesthesia", 1, vec![2, 1]));
    /// roster.admit(0, 1);
    ///
    /// assert!(roster.prefers_over_worst(2));
    /// assert!(!roster.prefers_over_worst(1));
    /// ```
    pub fn prefers_over_worst(&self, resident_id: ResidentId) -> bool {
        let Some(rank) = self.rank_of(resident_id) else {
            return false;
        };

        self.seats
            .iter()
            .any(|seat| self.standing(seat.resident_id) > rank)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Seat a resident without any capacity or preference check
    #[inline]
    pub fn admit(&mut self, key: usize, resident_id: ResidentId) {
        self.seats.push(Seat::new(key, resident_id));
    }

    /// Remove and return the least preferred seated resident
    ///
    /// An incumbent the program does not rank counts as worse than every
    /// ranked one and goes first. Ties keep the earliest admitted seat.
    ///
    /// # Returns
    ///
    /// The evicted seat, or None if nothing is seated
    pub fn evict_worst(&mut self) -> Option<Seat> {
        let (index, _) = self
            .seats
            .iter()
            .enumerate()
            .max_by_key(|(_, seat)| self.standing(seat.resident_id))?;

        Some(self.seats.remove(index))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(quota: usize, prefs: &[ResidentId]) -> ProgramRoster {
        ProgramRoster::new(Program::new("A", "Program A", quota, prefs.to_vec()))
    }

    #[test]
    fn test_roster_new() {
        let roster = roster(2, &[3, 1, 2]);

        assert_eq!(roster.id(), "A");
        assert_eq!(roster.quota(), 2);
        assert_eq!(roster.matched_count(), 0);
        assert_eq!(roster.remaining_capacity(), 2);
        assert!(!roster.is_full());
        assert!(roster.seats().is_empty());
    }

    #[test]
    fn test_is_acceptable() {
        let roster = roster(1, &[3, 1]);

        assert!(roster.is_acceptable(3));
        assert!(roster.is_acceptable(1));
        assert!(!roster.is_acceptable(2));
    }

    #[test]
    fn test_rank_of() {
        let roster = roster(1, &[3, 1, 2]);

        assert_eq!(roster.rank_of(3), Some(0));
        assert_eq!(roster.rank_of(1), Some(1));
        assert_eq!(roster.rank_of(2), Some(2));
        assert_eq!(roster.rank_of(4), None);
    }

    #[test]
    fn test_rank_of_duplicate_uses_first_position() {
        let roster = roster(1, &[5, 6, 5]);
        assert_eq!(roster.rank_of(5), Some(0));
    }

    #[test]
    fn test_prefers_over_worst_empty_roster() {
        let roster = roster(1, &[1, 2]);
        assert!(!roster.prefers_over_worst(1));
    }

    #[test]
    fn test_prefers_over_worst_needs_one_worse_incumbent() {
        let mut roster = roster(2, &[1, 2, 3]);
        roster.admit(0, 1);
        roster.admit(1, 3);

        // 2 beats 3 even though it loses to 1
        assert!(roster.prefers_over_worst(2));
        // 3 beats nobody
        assert!(!roster.prefers_over_worst(3));
    }

    #[test]
    fn test_prefers_over_worst_unranked_candidate() {
        let mut roster = roster(1, &[1, 2]);
        roster.admit(0, 2);
        assert!(!roster.prefers_over_worst(9));
    }

    #[test]
    fn test_prefers_over_worst_does_not_mutate() {
        let mut roster = roster(1, &[2, 1]);
        roster.admit(0, 1);

        assert!(roster.prefers_over_worst(2));
        assert_eq!(roster.matched_count(), 1);
        assert!(roster.holds(1));
    }

    #[test]
    fn test_admit_ignores_capacity() {
        let mut roster = roster(1, &[1, 2]);
        roster.admit(0, 1);
        roster.admit(1, 2);

        assert_eq!(roster.matched_count(), 2);
        assert!(roster.is_full());
        assert_eq!(roster.remaining_capacity(), 0);
    }

    #[test]
    fn test_evict_worst_removes_least_preferred() {
        let mut roster = roster(3, &[4, 2, 7]);
        roster.admit(10, 7);
        roster.admit(11, 4);
        roster.admit(12, 2);

        let evicted = roster.evict_worst().unwrap();
        assert_eq!(evicted, Seat::new(10, 7));
        assert_eq!(roster.matched_count(), 2);
        assert!(!roster.holds(7));

        // Admission order of the remaining seats is preserved
        assert_eq!(roster.seats(), &[Seat::new(11, 4), Seat::new(12, 2)]);
    }

    #[test]
    fn test_evict_worst_empty() {
        let mut roster = roster(1, &[1]);
        assert!(roster.evict_worst().is_none());
    }

    #[test]
    fn test_evict_worst_prefers_unranked_incumbent() {
        let mut roster = roster(2, &[1, 2]);
        roster.admit(0, 2);
        roster.admit(1, 99);

        let evicted = roster.evict_worst().unwrap();
        assert_eq!(evicted.resident_id, 99);
    }

    #[test]
    fn test_zero_quota_is_always_full() {
        let roster = roster(0, &[1]);
        assert!(roster.is_full());
        assert_eq!(roster.remaining_capacity(), 0);
    }
}
