//! Core data types for residency-match
//!
//! ## Types
//!
//! - [`Resident`]: An applicant with ranked program preferences
//! - [`Assignment`]: The program and rank a resident currently holds
//! - [`Program`]: A program with a quota and ranked resident preferences
//! - [`MatchReceipt`]: Run summary with an assignment digest
//!
//! ## Identity
//!
//! Residents and programs compare and hash by id alone.

mod resident;
mod program;
mod receipt;

// Re-export all types at module level
pub use resident::{Assignment, Resident, ResidentId};
pub use program::{Program, ProgramId};
pub use receipt::MatchReceipt;
