//! Resident-proposing deferred acceptance.
//!
//! ## Algorithm
//!
//! ```text
//! pool <- every resident, in input order
//! while pool not empty:
//!     R <- pool.pop_front()
//!     for P in R.preferences:
//!         skip if P unknown or R unranked by P
//!         if P has room:            admit R, stop
//!         if P prefers R to worst:  evict worst to pool back, admit R, stop
//!     if no admission: R is unmatched
//! ```
//!
//! An evicted resident restarts from the top of its own list on its next
//! turn. Each program's check-evict-admit sequence runs under one `&mut`
//! borrow of its roster.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use tracing::{debug, info, trace, warn};

use crate::engine::MatchResult;
use crate::error::{MalformedInput, Result};
use crate::roster::{ProgramRegistry, ResidentRegistry};
use crate::types::{Program, ProgramId, Resident, ResidentId};

// ============================================================================
// Run statistics
// ============================================================================

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Programs considered while walking preference lists
    pub proposals: u64,

    /// Residents seated (including re-seats after eviction)
    pub admissions: u64,

    /// Residents displaced by a preferred proposer
    pub evictions: u64,
}

// ============================================================================
// ProposalOutcome
// ============================================================================

/// What happened when one resident took its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalOutcome {
    /// Resident that walked its preference list
    pub resident_id: ResidentId,

    /// Program that admitted it, if any
    pub admitted_to: Option<ProgramId>,

    /// Resident displaced to make room, if any
    pub evicted: Option<ResidentId>,
}

impl ProposalOutcome {
    /// Check if the resident ended its turn holding a program
    #[inline]
    pub fn is_admitted(&self) -> bool {
        self.admitted_to.is_some()
    }
}

/// Program chosen during a walk, before any mutation.
struct Placement {
    program_id: ProgramId,
    rank: usize,
    displaces: bool,
}

// ============================================================================
// MatchingEngine
// ============================================================================

/// Owns both populations for the duration of a run.
///
/// ## Example
///
/// ```
/// use residency_match::engine::MatchingEngine;
/// use residency_match::types::{Program, Resident};
///
/// let programs = vec![Program::new("A", "Anesthesia", 1, vec![2, 1])];
/// let residents = vec![
///     Resident::new(1, "Ada", "Lovelace", vec!["A".to_string()]),
///     Resident::new(2, "Alan", "Turing", vec!["A".to_string()]),
/// ];
///
/// let mut engine = MatchingEngine::new(residents, programs).unwrap();
/// let result = engine.run();
///
/// assert_eq!(result.program_of(2).map(|p| p.id.as_str()), Some("A"));
/// assert_eq!(result.unmatched(), &[1]);
/// ```
#[derive(Debug)]
pub struct MatchingEngine {
    residents: ResidentRegistry,
    programs: ProgramRegistry,

    /// Slab keys of residents waiting for a turn
    pool: VecDeque<usize>,

    /// Slab keys of residents whose walk ended without admission
    unmatched: Vec<usize>,

    stats: MatchStats,
}

impl MatchingEngine {
    /// Build an engine over two populations.
    ///
    /// Every resident enters the pool in input order.
    ///
    /// # Errors
    ///
    /// [`MatchError::MalformedInput`](crate::MatchError::MalformedInput) for
    /// duplicate resident or program ids, or for any preference list that
    /// names the same entry twice.
    pub fn new(residents: Vec<Resident>, programs: Vec<Program>) -> Result<Self> {
        let mut program_registry = ProgramRegistry::with_capacity(programs.len());
        for program in programs {
            if let Some(resident_id) = first_repeat(program.preferences()) {
                return Err(MalformedInput::RepeatedResidentPreference {
                    program_id: program.id,
                    resident_id,
                }
                .into());
            }
            program_registry.insert(program)?;
        }

        let mut resident_registry = ResidentRegistry::with_capacity(residents.len());
        let mut pool = VecDeque::with_capacity(residents.len());
        for resident in residents {
            if let Some(program_id) = first_repeat(resident.preferences()) {
                return Err(MalformedInput::RepeatedProgramPreference {
                    resident_id: resident.id,
                    program_id,
                }
                .into());
            }
            pool.push_back(resident_registry.insert(resident)?);
        }

        Ok(Self {
            residents: resident_registry,
            programs: program_registry,
            pool,
            unmatched: Vec::new(),
            stats: MatchStats::default(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn residents(&self) -> &ResidentRegistry {
        &self.residents
    }

    #[inline]
    pub fn programs(&self) -> &ProgramRegistry {
        &self.programs
    }

    #[inline]
    pub fn stats(&self) -> MatchStats {
        self.stats
    }

    /// Number of residents still waiting for a turn
    #[inline]
    pub fn pending(&self) -> usize {
        self.pool.len()
    }

    /// Check if the pool has drained
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.pool.is_empty()
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Give the resident at the front of the pool one turn.
    ///
    /// # Returns
    ///
    /// The outcome of the turn, or None once the pool is empty
    pub fn step(&mut self) -> Option<ProposalOutcome> {
        let (key, resident) = loop {
            let key = self.pool.pop_front()?;
            match self.residents.get(key) {
                Some(resident) => break (key, resident),
                None => warn!(key, "dropping pool key with no resident"),
            }
        };
        let resident_id = resident.id;

        let mut placement = None;
        for program_id in resident.preferences() {
            self.stats.proposals += 1;

            let Some(roster) = self.programs.get(program_id) else {
                trace!(resident_id, program_id = %program_id, "skipping unknown program");
                continue;
            };

            let Some(rank) = roster.rank_of(resident_id) else {
                trace!(resident_id, program_id = %program_id, "not ranked by program");
                continue;
            };

            if !roster.is_full() {
                placement = Some(Placement {
                    program_id: program_id.clone(),
                    rank,
                    displaces: false,
                });
                break;
            }

            if roster.prefers_over_worst(resident_id) {
                placement = Some(Placement {
                    program_id: program_id.clone(),
                    rank,
                    displaces: true,
                });
                break;
            }

            trace!(resident_id, program_id = %program_id, "rejected by full program");
        }

        let Some(placement) = placement else {
            debug!(resident_id, "preference list exhausted, resident unmatched");
            return Some(self.reject(key, resident_id));
        };

        let Some(roster) = self.programs.get_mut(&placement.program_id) else {
            warn!(resident_id, program_id = %placement.program_id, "placement lost its program");
            return Some(self.reject(key, resident_id));
        };

        let evicted = if placement.displaces {
            roster.evict_worst()
        } else {
            None
        };
        roster.admit(key, resident_id);
        self.stats.admissions += 1;

        if let Some(seat) = evicted {
            if let Some(displaced) = self.residents.get_mut(seat.key) {
                displaced.release();
            }
            self.pool.push_back(seat.key);
            self.stats.evictions += 1;
            debug!(
                evicted = seat.resident_id,
                by = resident_id,
                program_id = %placement.program_id,
                "resident evicted and re-queued"
            );
        }

        if let Some(resident) = self.residents.get_mut(key) {
            resident.assign(placement.program_id.clone(), placement.rank);
        }

        Some(ProposalOutcome {
            resident_id,
            admitted_to: Some(placement.program_id),
            evicted: evicted.map(|seat| seat.resident_id),
        })
    }

    /// Record a resident whose turn ended without admission
    fn reject(&mut self, key: usize, resident_id: ResidentId) -> ProposalOutcome {
        self.unmatched.push(key);
        ProposalOutcome {
            resident_id,
            admitted_to: None,
            evicted: None,
        }
    }

    /// Drain the pool and assemble the result.
    ///
    /// Running again after completion does no further matching and returns
    /// the same result.
    pub fn run(&mut self) -> MatchResult<'_> {
        info!(
            residents = self.residents.len(),
            programs = self.programs.len(),
            pending = self.pool.len(),
            "starting match run"
        );

        while self.step().is_some() {}

        let result = self.result();
        info!(
            matched = result.matched_count(),
            unmatched = result.unmatched_count(),
            positions_available = result.positions_available(),
            proposals = self.stats.proposals,
            evictions = self.stats.evictions,
            "match run complete"
        );
        result
    }

    /// Snapshot the current assignment as a result.
    pub fn result(&self) -> MatchResult<'_> {
        let unmatched = self
            .unmatched
            .iter()
            .filter_map(|&key| self.residents.get(key))
            .map(|resident| resident.id)
            .collect();

        MatchResult::new(&self.residents, &self.programs, unmatched, self.stats)
    }
}

/// First element that appears twice in `items`
fn first_repeat<T: Eq + Hash + Clone>(items: &[T]) -> Option<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(*item)).cloned()
}

// ============================================================================
// Unit Tests
// ============================================================================
