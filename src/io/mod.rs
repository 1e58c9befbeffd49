//! CSV collaborators around the matching engine.
//!
//! The engine never reads files. [`loader`] turns delimited files into
//! [`Resident`](crate::types::Resident) and [`Program`](crate::types::Program)
//! records, and [`report`] formats a
//! [`MatchResult`](crate::engine::MatchResult) back into delimited text.

pub mod loader;
pub mod report;

pub use loader::{load_programs, load_residents, read_programs, read_residents};
pub use report::{render_report, write_report, UNMATCHED_PROGRAM_ID, UNMATCHED_PROGRAM_NAME};
