//! Resident and program registries.
//!
//! ## Architecture
//!
//! - **Slab**: residents live in a `Slab<Resident>`; rosters and the engine's
//!   pool refer to them by slab key
//! - **HashMap**: id to slab key (residents) or id to position (programs)
//!   for O(1) lookup
//! - **Vec**: programs kept in input order so iteration is deterministic
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - O(1) insert and lookup
//!
//! Nothing is removed during a run, so keys follow insertion order and
//! iterating the slab visits residents in input order.

use std::collections::HashMap;

use slab::Slab;

use crate::error::MalformedInput;
use crate::roster::ProgramRoster;
use crate::types::{Program, ProgramId, Resident, ResidentId};

// ============================================================================
// ResidentRegistry
// ============================================================================

/// All residents taking part in a run, addressable by slab key or id.
#[derive(Debug, Default)]
pub struct ResidentRegistry {
    /// Resident storage
    /// Key: slab index, Value: Resident
    residents: Slab<Resident>,

    /// Resident id to slab key
    index: HashMap<ResidentId, usize>,
}

impl ResidentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            residents: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Add a resident
    ///
    /// # Returns
    ///
    /// The slab key for the resident, or an error if its id is taken
    ///
    /// # Example
    ///
    /// ```
    /// use residency_match::roster::ResidentRegistry;
    /// use residency_match::types::Resident;
    ///
    /// let mut registry = ResidentRegistry::new();
    /// let key = registry.insert(Resident::new(1, "a", "b", vec![])).unwrap();
    ///
    /// assert_eq!(registry.key_of(1), Some(key));
    /// assert!(registry.insert(Resident::new(1, "c", "d", vec![])).is_err());
    /// ```
    pub fn insert(&mut self, resident: Resident) -> Result<usize, MalformedInput> {
        if self.index.contains_key(&resident.id) {
            return Err(MalformedInput::DuplicateResident {
                resident_id: resident.id,
            });
        }

        let id = resident.id;
        let key = self.residents.insert(resident);
        self.index.insert(id, key);
        Ok(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.residents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// Get a resident by slab key
    #[inline]
    pub fn get(&self, key: usize) -> Option<&Resident> {
        self.residents.get(key)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, key: usize) -> Option<&mut Resident> {
        self.residents.get_mut(key)
    }

    /// Get a resident by id
    pub fn get_by_id(&self, resident_id: ResidentId) -> Option<&Resident> {
        self.key_of(resident_id).and_then(|key| self.residents.get(key))
    }

    /// Get the slab key for a resident id
    #[inline]
    pub fn key_of(&self, resident_id: ResidentId) -> Option<usize> {
        self.index.get(&resident_id).copied()
    }

    /// Iterate residents with their slab keys, in input order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Resident)> {
        self.residents.iter()
    }

    /// Iterate residents in input order
    pub fn residents(&self) -> impl Iterator<Item = &Resident> {
        self.residents.iter().map(|(_, resident)| resident)
    }
}

// ============================================================================
// ProgramRegistry
// ============================================================================

/// All programs taking part in a run, each wrapped in its roster.
#[derive(Debug, Default)]
pub struct ProgramRegistry {
    /// Rosters in input order
    rosters: Vec<ProgramRoster>,

    /// Program id to position in `rosters`
    index: HashMap<ProgramId, usize>,
}

impl ProgramRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rosters: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Add a program with an empty roster
    pub fn insert(&mut self, program: Program) -> Result<(), MalformedInput> {
        if self.index.contains_key(&program.id) {
            return Err(MalformedInput::DuplicateProgram {
                program_id: program.id,
            });
        }

        self.index.insert(program.id.clone(), self.rosters.len());
        self.rosters.push(ProgramRoster::new(program));
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rosters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rosters.is_empty()
    }

    #[inline]
    pub fn contains(&self, program_id: &str) -> bool {
        self.index.contains_key(program_id)
    }

    /// Get a roster by program id
    pub fn get(&self, program_id: &str) -> Option<&ProgramRoster> {
        self.index.get(program_id).map(|&i| &self.rosters[i])
    }

    pub(crate) fn get_mut(&mut self, program_id: &str) -> Option<&mut ProgramRoster> {
        let i = *self.index.get(program_id)?;
        self.rosters.get_mut(i)
    }

    /// Iterate rosters in input order
    pub fn iter(&self) -> impl Iterator<Item = &ProgramRoster> {
        self.rosters.iter()
    }

    /// Sum over all programs of quota minus matched count
    pub fn positions_available(&self) -> usize {
        self.rosters.iter().map(ProgramRoster::remaining_capacity).sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn resident(id: ResidentId) -> Resident {
        Resident::new(id, "first", "last", vec!["A".to_string()])
    }

    #[test]
    fn test_resident_registry_new() {
        let registry = ResidentRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_resident_registry_insert_and_lookup() {
        let mut registry = ResidentRegistry::with_capacity(4);
        let k1 = registry.insert(resident(10)).unwrap();
        let k2 = registry.insert(resident(20)).unwrap();

        assert_eq!(registry.len(), 2);
        assert_ne!(k1, k2);
        assert_eq!(registry.key_of(10), Some(k1));
        assert_eq!(registry.get(k2).map(|r| r.id), Some(20));
        assert_eq!(registry.get_by_id(10).map(|r| r.id), Some(10));
        assert!(registry.get_by_id(30).is_none());
    }

    #[test]
    fn test_resident_registry_rejects_duplicate() {
        let mut registry = ResidentRegistry::new();
        registry.insert(resident(1)).unwrap();

        let err = registry.insert(resident(1)).unwrap_err();
        assert_eq!(err, MalformedInput::DuplicateResident { resident_id: 1 });
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resident_registry_iterates_in_input_order() {
        let mut registry = ResidentRegistry::new();
        for id in [5, 3, 9] {
            registry.insert(resident(id)).unwrap();
        }

        let ids: Vec<_> = registry.residents().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[test]
    fn test_program_registry_insert_and_lookup() {
        let mut registry = ProgramRegistry::new();
        registry.insert(Program::new("A", "Alpha", 1, vec![1])).unwrap();
        registry.insert(Program::new("B", "Beta", 2, vec![])).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("A"));
        assert!(!registry.contains("C"));
        assert_eq!(registry.get("B").map(|r| r.quota()), Some(2));
        assert!(registry.get("C").is_none());
    }

    #[test]
    fn test_program_registry_rejects_duplicate() {
        let mut registry = ProgramRegistry::new();
        registry.insert(Program::new("A", "Alpha", 1, vec![])).unwrap();

        let err = registry
            .insert(Program::new("A", "Again", 3, vec![]))
            .unwrap_err();
        assert_eq!(
            err,
            MalformedInput::DuplicateProgram { program_id: "A".to_string() }
        );
    }

    #[test]
    fn test_program_registry_positions_available() {
        let mut registry = ProgramRegistry::new();
        registry.insert(Program::new("A", "Alpha", 2, vec![1, 2])).unwrap();
        registry.insert(Program::new("B", "Beta", 3, vec![1])).unwrap();
        assert_eq!(registry.positions_available(), 5);

        registry.get_mut("A").unwrap().admit(0, 1);
        assert_eq!(registry.positions_available(), 4);
    }

    #[test]
    fn test_program_registry_iterates_in_input_order() {
        let mut registry = ProgramRegistry::new();
        for id in ["Z", "M", "A"] {
            registry.insert(Program::new(id, id, 1, vec![])).unwrap();
        }

        let ids: Vec<_> = registry.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["Z", "M", "A"]);
    }
}
