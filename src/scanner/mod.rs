//! Declaration scanner
//!
//! This module validates text against the statement pattern
//! `type identifier [= expression];` using a hand-built finite-state
//! automaton:
//! - [`state`]: automaton states and character classes
//! - [`dfa`]: the [`DeclarationScanner`] itself
//! - [`cursor`]: line/column tracking
//! - [`errors`]: the [`ScanError`] taxonomy
//! - [`result`]: the [`AnalysisResult`] handed to reporting
//!
//! # Scope
//!
//! The scanner is not a lexer for a full language. Expressions after `=` are
//! opaque up to the next `;` on the same line, nothing is kept beyond the set
//! of declared names, and scanning stops at the first error.

pub mod cursor;
pub mod dfa;
pub mod errors;
pub mod result;
pub mod state;

pub use cursor::ScanCursor;
pub use dfa::DeclarationScanner;
pub use errors::ScanError;
pub use result::{AnalysisResult, SUCCESS_MESSAGE};
pub use state::{CharClass, ScannerState};
