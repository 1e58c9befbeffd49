//! CSV loading for residents and programs.
//!
//! ## File Layout
//!
//! ```text
//! residentID,firstname,lastname,rol
//! 574,Ada,Lovelace,"[NRS,HEP]"
//!
//! programID,name,quota,rol
//! NRS,Neurosurgery,2,"[574,312]"
//! ```
//!
//! The first row is a header and is skipped. The ranked list is the last
//! column, wrapped in brackets. It may be quoted as one CSV field or left
//! unquoted, in which case the trailing fields are joined back together.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::LoadError;
use crate::types::{Program, Resident, ResidentId};

/// Fixed columns before the ranked list
const FIXED_COLUMNS: usize = 3;

/// Load residents from a CSV file
pub fn load_residents(path: impl AsRef<Path>) -> Result<Vec<Resident>, LoadError> {
    let path = path.as_ref();
    let residents = read_residents(open(path)?)?;
    debug!(count = residents.len(), path = %path.display(), "loaded residents");
    Ok(residents)
}

/// Load programs from a CSV file
pub fn load_programs(path: impl AsRef<Path>) -> Result<Vec<Program>, LoadError> {
    let path = path.as_ref();
    let programs = read_programs(open(path)?)?;
    debug!(count = programs.len(), path = %path.display(), "loaded programs");
    Ok(programs)
}

/// Parse residents from any reader
pub fn read_residents<R: Read>(reader: R) -> Result<Vec<Resident>, LoadError> {
    let mut residents = Vec::new();

    for row in rows(reader) {
        let Row { line, record } = row?;
        let list = ranked_list(&record, line)?;

        let id = parse_number(&record[0], line, "residentID")?;
        let preferences = split_list(&list).map(str::to_string).collect();

        residents.push(Resident::new(id, &record[1], &record[2], preferences));
    }

    Ok(residents)
}

/// Parse programs from any reader
pub fn read_programs<R: Read>(reader: R) -> Result<Vec<Program>, LoadError> {
    let mut programs = Vec::new();

    for row in rows(reader) {
        let Row { line, record } = row?;
        let list = ranked_list(&record, line)?;

        let quota = parse_number(&record[2], line, "quota")?;
        let preferences = split_list(&list)
            .map(|id| parse_number::<ResidentId>(id, line, "resident id"))
            .collect::<Result<Vec<_>, _>>()?;

        programs.push(Program::new(&record[0], &record[1], quota, preferences));
    }

    Ok(programs)
}

// ============================================================================
// Helpers
// ============================================================================

struct Row {
    line: u64,
    record: StringRecord,
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn rows<R: Read>(reader: R) -> impl Iterator<Item = Result<Row, LoadError>> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
        .into_records()
        .map(|record| -> Result<Row, LoadError> {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            Ok(Row { line, record })
        })
}

/// Rejoin everything after the fixed columns into the raw ranked list
fn ranked_list(record: &StringRecord, line: u64) -> Result<String, LoadError> {
    if record.len() <= FIXED_COLUMNS {
        return Err(LoadError::InvalidRow {
            line,
            expected: FIXED_COLUMNS + 1,
            found: record.len(),
        });
    }

    Ok(record
        .iter()
        .skip(FIXED_COLUMNS)
        .collect::<Vec<_>>()
        .join(","))
}

/// Split `[a,b,c]` into its trimmed, non-empty entries
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    let inner = raw.trim().trim_matches('"');
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    line: u64,
    field: &'static str,
) -> Result<T, LoadError> {
    value.trim().parse().map_err(|_| LoadError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
