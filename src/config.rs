use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::ConfigError;

/// Match residents to programs and print the assignment as CSV.
#[derive(Parser, Debug, Clone)]
#[command(name = "residency-match", version, about)]
pub struct CliConfig {
    /// Residents CSV (residentID,firstname,lastname,rol)
    pub residents_file: PathBuf,

    /// Programs CSV (programID,name,quota,rol)
    pub programs_file: PathBuf,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the match receipt (counts and assignment digest) to stderr
    #[arg(long)]
    pub receipt: bool,
}

impl CliConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_input("residents file", &self.residents_file)?;
        validate_input("programs file", &self.programs_file)?;

        if let Some(output) = &self.output {
            let parent = output.parent().filter(|p| !p.as_os_str().is_empty());
            if let Some(dir) = parent {
                if !dir.is_dir() {
                    return Err(ConfigError::MissingOutputDir {
                        path: dir.to_path_buf(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn validate_input(field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            field,
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(ConfigError::NotAFile {
            field,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
