//! Human-readable rendering of an [`AnalysisResult`]
//!
//! ```text
//! Correct variable declaration
//! ```
//!
//! or, on failure,
//!
//! ```text
//! Error: <message>
//! At line <line>, position <column + 1>
//! Duplicate variable: <name>
//! ```
//!
//! The location line is omitted when no line applies, the duplicate line
//! when the failure is not a re-declaration.

use crate::scanner::AnalysisResult;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Render the report as individual lines (without terminators).
pub fn render(result: &AnalysisResult) -> Vec<String> {
    if result.is_success() {
        return vec![result.message().to_string()];
    }

    let mut lines = vec![format!("Error: {}", result.message())];
    if result.line() > 0 {
        lines.push(format!(
            "At line {}, position {}",
            result.line(),
            result.position() + 1
        ));
    }
    if !result.duplicate_name().is_empty() {
        lines.push(format!("Duplicate variable: {}", result.duplicate_name()));
    }
    lines
}

/// Write the rendered report to `out`, one line per report line.
pub fn write_report<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    for line in render(result) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write the report to the file at `path` and echo it to stdout.
pub fn emit(result: &AnalysisResult, path: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_report(&mut file, result)?;
    file.flush()?;
    debug!(path = %path.display(), "report written");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, result)
}
