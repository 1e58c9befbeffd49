//! Tests that drive the `residency-match` binary end to end.
//!
//! These pin the command-line contract: the report on stdout, the receipt
//! on stderr, and the exit codes (0 success, 1 bad arguments or input
//! files, 2 input rejected by the engine).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const RESIDENTS: &str = "residentID,firstname,lastname,rol\n\
                         1,Ada,Lovelace,[A]\n\
                         2,Alan,Turing,[A]\n";

const PROGRAMS: &str = "programID,name,quota,rol\n\
                        A,Anesthesia,1,\"[2,1]\"\n";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn write_inputs(dir: &TempDir, residents: &str, programs: &str) -> (PathBuf, PathBuf) {
    let residents_path = dir.path().join("residents.csv");
    let programs_path = dir.path().join("programs.csv");
    fs::write(&residents_path, residents).unwrap();
    fs::write(&programs_path, programs).unwrap();
    (residents_path, programs_path)
}

fn run_cli(residents: &Path, programs: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_residency-match"))
        .arg(residents)
        .arg(programs)
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn cli_success_writes_report_to_stdout() {
    let dir = TempDir::new().unwrap();
    let (residents, programs) = write_inputs(&dir, RESIDENTS, PROGRAMS);

    let output = run_cli(&residents, &programs, &[]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "lastname,firstname,residentID,programID,name\n\
         Turing,Alan,2,A,Anesthesia\n\
         Lovelace,Ada,1,XXX,NOT_MATCHED\n\
         \n\
         Number of unmatched residents: 1\n\
         Number of positions available: 0\n"
    );
}

#[test]
fn cli_output_file() {
    let dir = TempDir::new().unwrap();
    let (residents, programs) = write_inputs(&dir, RESIDENTS, PROGRAMS);
    let report = dir.path().join("matches.csv");

    let output = run_cli(&residents, &programs, &["-o", report.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(output.stdout.is_empty());
    let written = fs::read_to_string(&report).unwrap();
    assert!(written.starts_with("lastname,firstname,residentID,programID,name\n"));
}

#[test]
fn cli_receipt_printed_without_verbose() {
    let dir = TempDir::new().unwrap();
    let (residents, programs) = write_inputs(&dir, RESIDENTS, PROGRAMS);

    let output = run_cli(&residents, &programs, &["--receipt"]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = stderr_of(&output);
    for line in [
        "residents: 2",
        "programs: 1",
        "matched: 1",
        "unmatched: 1",
        "positions available: 0",
        "proposals: 3",
        "evictions: 1",
    ] {
        assert!(stderr.lines().any(|l| l == line), "missing {line:?} in {stderr}");
    }
    assert_eq!(stderr.matches("digest: ").count(), 1, "{stderr}");
}

#[test]
fn cli_receipt_printed_once_with_verbose() {
    let dir = TempDir::new().unwrap();
    let (residents, programs) = write_inputs(&dir, RESIDENTS, PROGRAMS);

    let output = run_cli(&residents, &programs, &["--receipt", "-v"]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = stderr_of(&output);
    assert_eq!(stderr.matches("digest: ").count(), 1, "{stderr}");
}

#[test]
fn cli_malformed_input_exits_2() {
    let dir = TempDir::new().unwrap();
    let residents_csv = "residentID,firstname,lastname,rol\n\
                         1,Ada,Lovelace,[A]\n\
                         1,Alan,Turing,[A]\n";
    let (residents, programs) = write_inputs(&dir, residents_csv, PROGRAMS);

    let output = run_cli(&residents, &programs, &[]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert_eq!(stderr.matches("duplicate resident id 1").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("Error:").count(), 1, "{stderr}");
}

#[test]
fn cli_missing_file_exits_1() {
    let dir = TempDir::new().unwrap();
    let (_, programs) = write_inputs(&dir, RESIDENTS, PROGRAMS);
    let missing = dir.path().join("nope.csv");

    let output = run_cli(&missing, &programs, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("does not exist"));
}

#[test]
fn cli_unparsable_quota_exits_1() {
    let dir = TempDir::new().unwrap();
    let programs_csv = "programID,name,quota,rol\n\
                        A,Anesthesia,many,\"[2,1]\"\n";
    let (residents, programs) = write_inputs(&dir, RESIDENTS, programs_csv);

    let output = run_cli(&residents, &programs, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
