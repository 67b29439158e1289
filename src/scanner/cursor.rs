//! Line/column bookkeeping for the scanner

use std::fmt;

/// Position of the scanner in the source.
///
/// `line` is 1-based. `column` is the 0-based index of the character within
/// its physical line; reports add one when displaying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanCursor {
    pub line: usize,
    pub column: usize,
}

impl ScanCursor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Cursor at the first character of the first line.
    pub fn start() -> Self {
        Self::new(1, 0)
    }

    /// Column as shown to users (1-based).
    pub fn display_column(&self) -> usize {
        self.column + 1
    }

    pub(crate) fn advance_column(&mut self) {
        self.column += 1;
    }

    /// Move to the next line. The column keeps its value until the next
    /// line starts being consumed, so end-of-input errors point just past
    /// the last character read.
    pub(crate) fn next_line(&mut self) {
        self.line += 1;
    }
}

impl fmt::Display for ScanCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, position {}", self.line, self.display_column())
    }
}
