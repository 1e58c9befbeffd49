//! Program record for the residency-match engine.
//!
//! A `Program` is the immutable half of a program: identity, display name,
//! capacity and ranked preferences. The mutable matched collection lives in
//! [`ProgramRoster`](crate::roster::ProgramRoster), which wraps a `Program`
//! for the duration of a run.

use std::hash::{Hash, Hasher};

use crate::types::ResidentId;

/// Unique program identifier
pub type ProgramId = String;

/// A program offering a fixed number of positions.
///
/// ## Example
///
/// ```
/// use residency_match::types::Program;
///
/// let program = Program::new("NRS", "Neurosurgery", 2, vec![8, 3, 5]);
///
/// assert_eq!(program.quota, 2);
/// assert_eq!(program.preferences(), &[8, 3, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct Program {
    /// Unique program identifier
    pub id: ProgramId,

    /// Display only
    pub name: String,

    /// Number of positions
    pub quota: usize,

    /// Resident ids, most preferred first
    preferences: Vec<ResidentId>,
}

impl Program {
    pub fn new(
        id: impl Into<ProgramId>,
        name: impl Into<String>,
        quota: usize,
        preferences: Vec<ResidentId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quota,
            preferences,
        }
    }

    /// Ranked resident ids, most preferred first
    #[inline]
    pub fn preferences(&self) -> &[ResidentId] {
        &self.preferences
    }
}

impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Program {}

impl Hash for Program {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
