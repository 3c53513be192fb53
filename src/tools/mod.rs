use crate::error::{ToolError, TrackingValidationError};
use crate::models::{Symbology, ValidCode};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Split a code list into entries, one per line.
///
/// Blank lines and lines starting with `#` are skipped. Lines are otherwise
/// kept verbatim; whitespace inside a code is handled by validation.
pub fn parse_code_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(str::to_string)
        .collect()
}

/// Read a code list from disk.
pub fn load_codes<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ToolError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ToolError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_code_list(&contents))
}

/// Counts over a batch of validation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Codes checked.
    pub total: usize,
    /// Codes accepted.
    pub valid: usize,
    /// Codes rejected.
    pub invalid: usize,
    /// Accepted as USS-128.
    pub uss128: usize,
    /// Accepted as USS-39.
    pub uss39: usize,
}

/// Tally a batch of results.
pub fn summarize(results: &[Result<ValidCode, TrackingValidationError>]) -> BatchSummary {
    let mut summary = BatchSummary {
        total: results.len(),
        ..BatchSummary::default()
    };
    for result in results {
        match result {
            Ok(code) => {
                summary.valid += 1;
                match code.symbology() {
                    Symbology::Uss128 => summary.uss128 += 1,
                    Symbology::Uss39 => summary.uss39 += 1,
                }
            }
            Err(_) => summary.invalid += 1,
        }
    }
    summary
}

/// Render a summary as pretty JSON.
pub fn summary_json(summary: &BatchSummary) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(summary)?)
}
