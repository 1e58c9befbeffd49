//! Program rosters and the registries that own a run's entities.
//!
//! ## Components
//!
//! - [`Seat`]: A filled position, pointing at a resident by slab key
//! - [`ProgramRoster`]: A program's seats with rank/compare/evict/admit
//! - [`ResidentRegistry`]: Slab-backed resident storage with an id index
//! - [`ProgramRegistry`]: Rosters in input order with an id index
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `rank_of` / `is_acceptable` | O(1) |
//! | `prefers_over_worst` | O(seats) |
//! | `evict_worst` | O(seats) |
//! | `admit` | O(1) amortized |
//! | Resident lookup by key or id | O(1) |
//!
//! ## Example
//!
//! ```
//! use residency_match::roster::ProgramRoster;
//! use residency_match::types::Program;
//!
//! let mut roster = ProgramRoster::new(Program::new("A", "Anesthesia", 1, vec![2, 1]));
//! roster.admit(0, 1);
//!
//! assert!(roster.is_full());
//! assert!(roster.prefers_over_worst(2));
//!
//! let evicted = roster.evict_worst().unwrap();
//! assert_eq!(evicted.resident_id, 1);
//! ```

pub mod seat;
pub mod program_roster;
pub mod registry;

pub use seat::Seat;
pub use program_roster::ProgramRoster;
pub use registry::{ProgramRegistry, ResidentRegistry};
