//! Error taxonomy for a declaration scan
//!
//! Every variant is terminal: the scanner stops at the first one it detects
//! and never resynchronizes. Apart from [`ScanError::IoError`], which is
//! raised before the scanner runs, each variant carries the [`ScanCursor`]
//! where the failure was detected.

use super::cursor::ScanCursor;
use super::state::ScannerState;
use thiserror::Error;

/// Errors that end a scan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The source could not be opened or read; the scanner was not invoked
    #[error("Cannot open input file '{path}': {reason}")]
    IoError { path: String, reason: String },

    /// An identifier was declared a second time
    #[error("Duplicate variable '{name}' at {location}")]
    DuplicateVariable { name: String, location: ScanCursor },

    /// A character the automaton cannot accept in its current state
    #[error("Syntax error at {location}: unexpected {}, expected {}", describe_char(.found), .state.expectation())]
    SyntaxError {
        found: char,
        state: ScannerState,
        location: ScanCursor,
    },

    /// A line with content ended in the middle of a declaration
    #[error("Missing semicolon at end of line {}", .location.line)]
    MissingTerminator { location: ScanCursor },

    /// The input ended in the middle of a declaration
    #[error("Unexpected end of input at {location}")]
    UnexpectedEndOfInput { location: ScanCursor },
}

impl ScanError {
    /// Where the failure was detected, if it happened inside the source.
    pub fn location(&self) -> Option<&ScanCursor> {
        match self {
            ScanError::IoError { .. } => None,
            ScanError::DuplicateVariable { location, .. } => Some(location),
            ScanError::SyntaxError { location, .. } => Some(location),
            ScanError::MissingTerminator { location } => Some(location),
            ScanError::UnexpectedEndOfInput { location } => Some(location),
        }
    }

    /// The short message printed in the report after `Error: `.
    pub fn message(&self) -> &'static str {
        match self {
            ScanError::IoError { .. } => "Cannot open input file",
            ScanError::DuplicateVariable { .. } => "Duplicate variable name",
            ScanError::SyntaxError { .. } => "Syntax error",
            ScanError::MissingTerminator { .. } => "Missing semicolon at end of line",
            ScanError::UnexpectedEndOfInput { .. } => "Unexpected end of input",
        }
    }

    pub fn duplicate_name(&self) -> Option<&str> {
        match self {
            ScanError::DuplicateVariable { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Malformed text as opposed to a semantic or I/O problem.
    pub fn is_syntax_class(&self) -> bool {
        matches!(
            self,
            ScanError::SyntaxError { .. } | ScanError::MissingTerminator { .. }
        )
    }
}

fn describe_char(c: &char) -> String {
    match *c {
        '\n' => "end of line".to_string(),
        '\t' => "tab".to_string(),
        ' ' => "space".to_string(),
        c if c.is_ascii_graphic() => format!("'{}'", c),
        c => format!("'\\u{{{:04x}}}'", c as u32),
    }
}
