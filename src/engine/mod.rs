//! Matching engine module for residency-match.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same input always produces same output
//! 2. **Sequential Proposals**: One resident's turn at a time
//! 3. **Explicit Worklist**: Evicted residents rejoin a FIFO pool, no recursion
//! 4. **Rank by Program**: Every comparison goes through `rank_of`
//!
//! ## Matching Rules
//!
//! - Residents propose in preference order, most preferred first
//! - A program with room admits any resident it ranks
//! - A full program admits a resident it prefers to its worst match,
//!   evicting that match back into the pool
//! - A resident whose list runs out ends unmatched
//!
//! ## Example
//!
//! ```
//! use residency_match::engine::MatchingEngine;
//! use residency_match::types::{Program, Resident};
//!
//! let programs = vec![Program::new("A", "Anesthesia", 1, vec![1, 2])];
//! let residents = vec![
//!     Resident::new(1, "Ada", "Lovelace", vec!["A".to_string()]),
//!     Resident::new(2, "Alan", "Turing", vec!["A".to_string()]),
//! ];
//!
//! let mut engine = MatchingEngine::new(residents, programs).unwrap();
//! let result = engine.run();
//!
//! assert_eq!(result.matched_count(), 1);
//! assert_eq!(result.unmatched(), &[2]);
//! assert!(result.blocking_pairs().is_empty());
//! ```

pub mod matcher;
pub mod result;

pub use matcher::{MatchStats, MatchingEngine, ProposalOutcome};
pub use result::MatchResult;
