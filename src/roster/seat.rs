//! Seat held by a resident in a program roster.
//!
//! ## Slab Integration
//!
//! Residents live in the [`ResidentRegistry`](crate::roster::ResidentRegistry)
//! slab. A seat stores the resident's slab key next to its id, so a roster
//! can rank its occupants by id and the engine can reach the full record by
//! key without a second lookup.

use crate::types::ResidentId;

/// A filled position in a program.
///
/// ## Example
///
/// ```
/// use residency_match::roster::Seat;
///
/// let seat = Seat::new(0, 574);
///
/// assert_eq!(seat.key, 0);
/// assert_eq!(seat.resident_id, 574);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seat {
    /// Slab key of the resident in the registry
    pub key: usize,

    /// Resident id, used for preference ranking
    pub resident_id: ResidentId,
}

impl Seat {
    #[inline]
    pub fn new(key: usize, resident_id: ResidentId) -> Self {
        Self { key, resident_id }
    }
}
