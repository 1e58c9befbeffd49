//! # residency-match
//!
//! Stable matching of residents to programs with the resident-proposing
//! deferred-acceptance (Gale-Shapley) algorithm.
//!
//! ## Architecture
//!
//! - **Types**: Preference records (Resident, Program, MatchReceipt)
//! - **Roster**: Per-program seats plus the slab-backed registries
//! - **Engine**: The proposal/eviction loop and its result
//! - **IO**: CSV loading and report formatting around the engine
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical inputs produce identical matches and digests
//! 2. **Stability**: No resident/program pair would rather be matched together
//! 3. **Synchronous Execution**: No async, no I/O inside the matching loop
//! 4. **Fail Fast**: Malformed input is rejected before any matching starts

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Resident, Program, MatchReceipt
pub mod types;

/// Program rosters and registries
pub mod roster;

/// Matching engine: Deferred acceptance
pub mod engine;

/// CSV input and report output
pub mod io;

/// Error types
pub mod error;

/// Logging setup
pub mod logger;

/// Command-line configuration
#[cfg(feature = "cli")]
pub mod config;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Assignment, MatchReceipt, Program, ProgramId, Resident, ResidentId};
pub use roster::{ProgramRegistry, ProgramRoster, ResidentRegistry, Seat};
pub use engine::{MatchResult, MatchStats, MatchingEngine, ProposalOutcome};
pub use error::{MalformedInput, MatchError};

#[cfg(feature = "cli")]
pub use config::CliConfig;
