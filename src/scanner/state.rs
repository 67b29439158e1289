//! Automaton states and the fixed character classification
//!
//! The scanner recognizes a single statement shape:
//!
//! ```text
//! declaration ::= type ws+ identifier ws* ( ";" | "=" expression ";" )
//! type        ::= [A-Za-z_] [A-Za-z0-9_]*
//! identifier  ::= [A-Za-z_] [A-Za-z0-9_]*
//! expression  ::= any character except newline, up to the first ";"
//! ```
//!
//! Classification is ASCII-only; anything outside the recognized classes is
//! [`CharClass::Other`] and is accepted only inside an expression.

use std::fmt;

/// The eight states of the declaration automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScannerState {
    /// Start of a declaration; nothing consumed yet
    #[default]
    AwaitingType,
    ReadingType,
    AwaitingIdentifier,
    ReadingIdentifier,
    AwaitingTerminatorOrAssign,
    /// Everything after `=` up to the closing `;`
    ReadingExpression,
    DeclarationComplete,
    /// Absorbing failure state
    Error,
}

impl ScannerState {
    /// States in which a line, or the whole input, may legally end.
    pub fn is_accepting(self) -> bool {
        matches!(
            self,
            ScannerState::AwaitingType | ScannerState::DeclarationComplete
        )
    }

    /// Short description of what the automaton expects next, used in
    /// syntax error messages.
    pub fn expectation(self) -> &'static str {
        match self {
            ScannerState::AwaitingType => "a type name",
            ScannerState::ReadingType => "whitespace after the type name",
            ScannerState::AwaitingIdentifier => "a variable name",
            ScannerState::ReadingIdentifier => "';' or '=' after the variable name",
            ScannerState::AwaitingTerminatorOrAssign => "';' or '='",
            ScannerState::ReadingExpression => "';' before the end of the line",
            ScannerState::DeclarationComplete => "a new declaration or end of line",
            ScannerState::Error => "nothing",
        }
    }
}

impl fmt::Display for ScannerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScannerState::AwaitingType => "awaiting type",
            ScannerState::ReadingType => "reading type",
            ScannerState::AwaitingIdentifier => "awaiting identifier",
            ScannerState::ReadingIdentifier => "reading identifier",
            ScannerState::AwaitingTerminatorOrAssign => "awaiting ';' or '='",
            ScannerState::ReadingExpression => "reading expression",
            ScannerState::DeclarationComplete => "declaration complete",
            ScannerState::Error => "error",
        };
        f.write_str(name)
    }
}

/// Character classes driving the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// The synthetic line terminator fed after each physical line
    Newline,
    /// Space, tab, carriage return
    Whitespace,
    /// `[A-Za-z_]`: may start or continue a name
    NameStart,
    /// `[0-9]`: may only continue a name
    Digit,
    Terminator,
    Assign,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            '\n' => CharClass::Newline,
            ' ' | '\t' | '\r' => CharClass::Whitespace,
            'a'..='z' | 'A'..='Z' | '_' => CharClass::NameStart,
            '0'..='9' => CharClass::Digit,
            ';' => CharClass::Terminator,
            '=' => CharClass::Assign,
            _ => CharClass::Other,
        }
    }

    /// Whitespace in the broad sense, including newline.
    pub fn is_whitespace(self) -> bool {
        matches!(self, CharClass::Whitespace | CharClass::Newline)
    }

    /// Characters that may appear after the first one of a type or name.
    pub fn continues_name(self) -> bool {
        matches!(self, CharClass::NameStart | CharClass::Digit)
    }
}

/// Whether `c` counts as whitespace for the scanner (space, tab, CR, LF).
pub fn is_whitespace(c: char) -> bool {
    CharClass::of(c).is_whitespace()
}
