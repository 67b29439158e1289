//! The declaration automaton
//!
//! [`DeclarationScanner`] consumes its input one character at a time, one
//! physical line at a time. After the characters of a line it applies the
//! end-of-line rule (a line with content must leave the automaton in an
//! accepting state) and then feeds a synthetic `'\n'` so that a completed
//! declaration can hand over to the next one. After the last line the
//! end-of-input rule is applied once more.
//!
//! Duplicate detection is interleaved with the transitions: the identifier
//! being read is checked against the declared names at the character that
//! ends it, and recorded only once the declaration is confirmed by `;` or
//! `=`.
//!
//! # Example
//!
//! ```
//! use declcheck::scanner::DeclarationScanner;
//!
//! let mut scanner = DeclarationScanner::new();
//! let result = scanner.scan_str("int x;\nint x;\n");
//! assert!(!result.is_success());
//! assert_eq!(result.duplicate_name(), "x");
//! ```

use super::cursor::ScanCursor;
use super::errors::ScanError;
use super::result::AnalysisResult;
use super::state::{is_whitespace, CharClass, ScannerState};
use rustc_hash::FxHashSet;
use std::mem;
use tracing::{debug, info, trace};

/// Character-by-character validator for variable declarations.
///
/// One instance runs one scan at a time; [`scan`](Self::scan) resets it
/// first, so it may be reused for later inputs.
#[derive(Debug, Default)]
pub struct DeclarationScanner {
    state: ScannerState,
    cursor: ScanCursor,
    pending_type: String,
    pending_identifier: String,
    declared: FxHashSet<String>,
    failure: Option<ScanError>,
}

impl DeclarationScanner {
    pub fn new() -> Self {
        let mut scanner = Self::default();
        scanner.reset();
        scanner
    }

    /// Return every field to its initial value.
    pub fn reset(&mut self) {
        self.state = ScannerState::AwaitingType;
        self.cursor = ScanCursor::start();
        self.pending_type.clear();
        self.pending_identifier.clear();
        self.declared.clear();
        self.failure = None;
    }

    /// Scan a whole source given as physical lines (terminators stripped).
    pub fn scan<I, S>(&mut self, lines: I) -> AnalysisResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset();

        let outcome = self.run(lines);

        match &outcome {
            Ok(()) => info!(
                declarations = self.declared.len(),
                lines = self.cursor.line - 1,
                "scan succeeded"
            ),
            Err(err) => info!(error = %err, "scan failed"),
        }

        AnalysisResult::from(outcome)
    }

    fn run<I, S>(&mut self, lines: I) -> Result<(), ScanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed_line(line.as_ref())?;
        }
        self.finish()
    }

    /// Scan text held in memory.
    ///
    /// Lines are split on `'\n'` the way a line reader does: a trailing
    /// terminator does not produce an extra empty line, and a `'\r'` before
    /// it stays in the line as ordinary whitespace.
    pub fn scan_str(&mut self, text: &str) -> AnalysisResult {
        self.scan(text.split_terminator('\n'))
    }

    /// Feed one physical line, then the synthetic line terminator.
    ///
    /// Once the scanner has failed, every further call returns the same
    /// error without consuming anything.
    pub fn feed_line(&mut self, line: &str) -> Result<(), ScanError> {
        self.check_not_failed()?;

        self.cursor.column = 0;
        let mut has_content = false;

        for ch in line.chars() {
            if !is_whitespace(ch) {
                has_content = true;
            }
            self.step(ch)?;
            self.cursor.advance_column();
        }

        self.end_of_line(has_content)?;
        self.step('\n')?;
        self.cursor.next_line();
        Ok(())
    }

    /// Apply the end-of-input rule.
    pub fn finish(&mut self) -> Result<(), ScanError> {
        self.check_not_failed()?;

        if self.state.is_accepting() {
            Ok(())
        } else {
            self.fail(ScanError::UnexpectedEndOfInput {
                location: self.cursor,
            })
        }
    }

    pub fn state(&self) -> ScannerState {
        self.state
    }

    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    /// Names of every declaration confirmed so far.
    pub fn declared_names(&self) -> &FxHashSet<String> {
        &self.declared
    }

    pub fn pending_type(&self) -> &str {
        &self.pending_type
    }

    pub fn pending_identifier(&self) -> &str {
        &self.pending_identifier
    }

    /// The error that stopped the scan, if any.
    pub fn failure(&self) -> Option<&ScanError> {
        self.failure.as_ref()
    }

    fn check_not_failed(&self) -> Result<(), ScanError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// A line with content may only end where a declaration may end.
    fn end_of_line(&mut self, has_content: bool) -> Result<(), ScanError> {
        debug!(
            line = self.cursor.line,
            state = ?self.state,
            has_content,
            "end of line"
        );

        if has_content && !self.state.is_accepting() {
            return self.fail(ScanError::MissingTerminator {
                location: self.cursor,
            });
        }
        Ok(())
    }

    /// Consume one character.
    fn step(&mut self, ch: char) -> Result<(), ScanError> {
        let from = self.state;
        let outcome = self.transition(ch, CharClass::of(ch));
        trace!(
            line = self.cursor.line,
            column = self.cursor.column,
            ch = ?ch,
            ?from,
            to = ?self.state,
            "step"
        );
        outcome
    }

    fn transition(&mut self, ch: char, class: CharClass) -> Result<(), ScanError> {
        match self.state {
            ScannerState::AwaitingType => match class {
                CharClass::Whitespace | CharClass::Newline => Ok(()),
                CharClass::NameStart => {
                    self.start_type(ch);
                    Ok(())
                }
                _ => self.unexpected(ch),
            },

            ScannerState::ReadingType => match class {
                CharClass::Whitespace => {
                    self.state = ScannerState::AwaitingIdentifier;
                    Ok(())
                }
                c if c.continues_name() => {
                    self.pending_type.push(ch);
                    Ok(())
                }
                // A type cannot end directly on ';' or '='
                _ => self.unexpected(ch),
            },

            ScannerState::AwaitingIdentifier => match class {
                CharClass::Whitespace => Ok(()),
                CharClass::NameStart => {
                    self.pending_identifier.clear();
                    self.pending_identifier.push(ch);
                    self.state = ScannerState::ReadingIdentifier;
                    Ok(())
                }
                _ => self.unexpected(ch),
            },

            ScannerState::ReadingIdentifier => match class {
                c if c.continues_name() => {
                    self.pending_identifier.push(ch);
                    Ok(())
                }
                CharClass::Whitespace | CharClass::Newline => {
                    self.check_duplicate()?;
                    self.state = ScannerState::AwaitingTerminatorOrAssign;
                    Ok(())
                }
                CharClass::Terminator => {
                    self.check_duplicate()?;
                    self.commit_identifier();
                    self.complete_declaration();
                    Ok(())
                }
                CharClass::Assign => {
                    self.check_duplicate()?;
                    self.commit_identifier();
                    self.state = ScannerState::ReadingExpression;
                    Ok(())
                }
                _ => self.unexpected(ch),
            },

            ScannerState::AwaitingTerminatorOrAssign => match class {
                CharClass::Whitespace => Ok(()),
                CharClass::Terminator => {
                    self.commit_identifier();
                    self.complete_declaration();
                    Ok(())
                }
                CharClass::Assign => {
                    self.commit_identifier();
                    self.state = ScannerState::ReadingExpression;
                    Ok(())
                }
                _ => self.unexpected(ch),
            },

            // Expressions are opaque up to ';' but may not cross a line break
            ScannerState::ReadingExpression => match class {
                CharClass::Terminator => {
                    self.complete_declaration();
                    Ok(())
                }
                CharClass::Newline => self.unexpected(ch),
                _ => Ok(()),
            },

            ScannerState::DeclarationComplete => match class {
                CharClass::Whitespace => Ok(()),
                CharClass::Newline => {
                    self.state = ScannerState::AwaitingType;
                    Ok(())
                }
                CharClass::NameStart => {
                    self.start_type(ch);
                    Ok(())
                }
                _ => self.unexpected(ch),
            },

            ScannerState::Error => self.check_not_failed(),
        }
    }

    fn start_type(&mut self, first: char) {
        self.pending_type.clear();
        self.pending_type.push(first);
        self.state = ScannerState::ReadingType;
    }

    fn check_duplicate(&mut self) -> Result<(), ScanError> {
        if self.declared.contains(&self.pending_identifier) {
            return self.fail(ScanError::DuplicateVariable {
                name: self.pending_identifier.clone(),
                location: self.cursor,
            });
        }
        Ok(())
    }

    fn commit_identifier(&mut self) {
        let name = mem::take(&mut self.pending_identifier);
        debug!(
            line = self.cursor.line,
            type_name = %self.pending_type,
            name = %name,
            "declared"
        );
        self.declared.insert(name);
    }

    fn complete_declaration(&mut self) {
        self.pending_type.clear();
        self.state = ScannerState::DeclarationComplete;
    }

    fn unexpected(&mut self, ch: char) -> Result<(), ScanError> {
        let err = ScanError::SyntaxError {
            found: ch,
            state: self.state,
            location: self.cursor,
        };
        self.fail(err)
    }

    fn fail(&mut self, err: ScanError) -> Result<(), ScanError> {
        self.state = ScannerState::Error;
        self.failure = Some(err.clone());
        Err(err)
    }
}
