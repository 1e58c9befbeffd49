//! CSV report of a matching run.
//!
//! ## Layout
//!
//! ```text
//! lastname,firstname,residentID,programID,name
//! Lovelace,Ada,574,NRS,Neurosurgery
//! Turing,Alan,312,XXX,NOT_MATCHED
//!
//! Number of unmatched residents: 1
//! Number of positions available: 1
//! ```
//!
//! Matched residents come first, ordered by resident id, followed by the
//! unmatched residents in the order the engine rejected them.

use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use crate::engine::MatchResult;
use crate::error::ReportError;
use crate::types::ResidentId;

/// Program id column for unmatched residents
pub const UNMATCHED_PROGRAM_ID: &str = "XXX";

/// Program name column for unmatched residents
pub const UNMATCHED_PROGRAM_NAME: &str = "NOT_MATCHED";

const HEADER: [&str; 5] = ["lastname", "firstname", "residentID", "programID", "name"];

#[derive(Debug, Serialize)]
struct ReportRow<'r> {
    lastname: &'r str,
    firstname: &'r str,
    resident_id: ResidentId,
    program_id: &'r str,
    name: &'r str,
}

/// Write the report for a completed run
pub fn write_report<W: Write>(result: &MatchResult<'_>, writer: W) -> Result<(), ReportError> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(HEADER)?;

    for (resident, program) in result.matched_pairs() {
        csv.serialize(ReportRow {
            lastname: &resident.last_name,
            firstname: &resident.first_name,
            resident_id: resident.id,
            program_id: &program.id,
            name: &program.name,
        })?;
    }

    for resident in result.unmatched_residents() {
        csv.serialize(ReportRow {
            lastname: &resident.last_name,
            firstname: &resident.first_name,
            resident_id: resident.id,
            program_id: UNMATCHED_PROGRAM_ID,
            name: UNMATCHED_PROGRAM_NAME,
        })?;
    }

    let mut writer = csv.into_inner().map_err(|e| e.into_error())?;

    writeln!(writer)?;
    writeln!(
        writer,
        "Number of unmatched residents: {}",
        result.unmatched_count()
    )?;
    writeln!(
        writer,
        "Number of positions available: {}",
        result.positions_available()
    )?;
    writer.flush()?;

    Ok(())
}

/// Render the report into a string
pub fn render_report(result: &MatchResult<'_>) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    write_report(result, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

// ============================================================================
// Unit Tests
// ============================================================================
