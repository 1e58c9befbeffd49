//! Error types for matching, loading, reporting and CLI configuration.
//!
//! Only [`MatchError`] can come out of the engine itself; the rest belong to
//! the CSV collaborators and the binary.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{ProgramId, ResidentId};

pub type Result<T> = std::result::Result<T, MatchError>;

/// Precondition violations found in the engine's input collections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("duplicate resident id {resident_id}")]
    DuplicateResident { resident_id: ResidentId },
    #[error("duplicate program id {program_id}")]
    DuplicateProgram { program_id: ProgramId },
    #[error("resident {resident_id} ranks program {program_id} more than once")]
    RepeatedProgramPreference {
        resident_id: ResidentId,
        program_id: ProgramId,
    },
    #[error("program {program_id} ranks resident {resident_id} more than once")]
    RepeatedResidentPreference {
        program_id: ProgramId,
        resident_id: ResidentId,
    },
}

/// Errors returned by the matching engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(transparent)]
    MalformedInput(#[from] MalformedInput),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected {expected} fields, found {found}")]
    InvalidRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report")]
    Csv(#[from] csv::Error),
    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} does not exist: {path}")]
    MissingFile { field: &'static str, path: PathBuf },
    #[error("{field} is not a regular file: {path}")]
    NotAFile { field: &'static str, path: PathBuf },
    #[error("output directory does not exist: {path}")]
    MissingOutputDir { path: PathBuf },
}

// ============================================================================
// Unit Tests
// ============================================================================
