//! residency-match - Binary Entry Point
//!
//! Loads residents and programs from CSV, runs the matching engine, and
//! writes the report to stdout or the requested file.

use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use residency_match::io::{load_programs, load_residents, write_report};
use residency_match::{logger, CliConfig, MatchReceipt, MatchingEngine};

/// Exit code when the engine rejects its input
const EXIT_MALFORMED_INPUT: u8 = 2;

fn main() -> ExitCode {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);
    tracing::debug!(?config, "parsed CLI config");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if e.chain().any(|cause| cause.is::<residency_match::MatchError>()) {
                ExitCode::from(EXIT_MALFORMED_INPUT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate().context("invalid arguments")?;

    let residents = load_residents(&config.residents_file)
        .with_context(|| format!("loading {}", config.residents_file.display()))?;
    let programs = load_programs(&config.programs_file)
        .with_context(|| format!("loading {}", config.programs_file.display()))?;

    let mut engine = MatchingEngine::new(residents, programs)?;
    let result = engine.run();

    if config.receipt {
        print_receipt(&result.receipt());
    }

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_report(&result, BufWriter::new(file))?;
        }
        None => write_report(&result, io::stdout().lock())?,
    }

    Ok(())
}

/// Receipt goes to stderr regardless of log level; stdout is the report
fn print_receipt(receipt: &MatchReceipt) {
    eprintln!("residents: {}", receipt.residents);
    eprintln!("programs: {}", receipt.programs);
    eprintln!("matched: {}", receipt.matched);
    eprintln!("unmatched: {}", receipt.unmatched);
    eprintln!("positions available: {}", receipt.positions_available);
    eprintln!("proposals: {}", receipt.proposals);
    eprintln!("evictions: {}", receipt.evictions);
    eprintln!("digest: {}", receipt.digest_hex());
}
