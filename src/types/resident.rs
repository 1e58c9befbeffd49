//! Resident record for the residency-match engine.
//!
//! ## Identity
//!
//! A resident is identified solely by its integer id. Equality and hashing
//! ignore the display names, the preference list and the matching state, so
//! a resident can key a map no matter where the run currently stands.
//!
//! ## Matching State
//!
//! The program a resident holds and the rank it was accepted at live in a
//! single [`Assignment`]. Both are set together by the engine and cleared
//! together on eviction.

use std::hash::{Hash, Hasher};

use crate::types::ProgramId;

/// Unique resident identifier
pub type ResidentId = u64;

// ============================================================================
// Assignment
// ============================================================================

/// A resident's provisional (or, after the run, final) placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    /// Program currently holding the resident
    pub program_id: ProgramId,

    /// Zero-based position of the resident in that program's preference list
    pub rank: usize,
}

// ============================================================================
// Resident struct
// ============================================================================

/// A resident applying to programs.
///
/// ## Example
///
/// ```
/// use residency_match::types::Resident;
///
/// let resident = Resident::new(
///     574,                                    // id
///     "Ada",                                  // first name
///     "Lovelace",                             // last name
///     vec!["NRS".to_string(), "HEP".to_string()], // most preferred first
/// );
///
/// assert_eq!(resident.preferences().len(), 2);
/// assert!(!resident.is_matched());
/// ```
#[derive(Debug, Clone)]
pub struct Resident {
    /// Unique resident identifier
    pub id: ResidentId,

    /// Display only, opaque to the algorithm
    pub first_name: String,

    /// Display only, opaque to the algorithm
    pub last_name: String,

    /// Program ids, most preferred first
    preferences: Vec<ProgramId>,

    /// Current placement, if any
    assignment: Option<Assignment>,
}

impl Resident {
    /// Create an unmatched resident
    pub fn new(
        id: ResidentId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        preferences: Vec<ProgramId>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            preferences,
            assignment: None,
        }
    }

    /// Ranked program ids, most preferred first
    #[inline]
    pub fn preferences(&self) -> &[ProgramId] {
        &self.preferences
    }

    /// Current placement
    #[inline]
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// Id of the program currently holding this resident
    #[inline]
    pub fn matched_program(&self) -> Option<&ProgramId> {
        self.assignment.as_ref().map(|a| &a.program_id)
    }

    /// Rank at which the holding program accepted this resident
    #[inline]
    pub fn matched_rank(&self) -> Option<usize> {
        self.assignment.as_ref().map(|a| a.rank)
    }

    #[inline]
    pub fn is_matched(&self) -> bool {
        self.assignment.is_some()
    }

    /// Record a placement, replacing any previous one
    pub(crate) fn assign(&mut self, program_id: ProgramId, rank: usize) {
        self.assignment = Some(Assignment { program_id, rank });
    }

    /// Clear the placement, returning what was held
    pub(crate) fn release(&mut self) -> Option<Assignment> {
        self.assignment.take()
    }
}

impl PartialEq for Resident {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Resident {}

impl Hash for Resident {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
