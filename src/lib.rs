//! # Introduction
//!
//! declcheck validates that a text file contains nothing but C-style variable
//! declarations, `type name;` or `type name = expression;`, one or more per
//! line, and reports the first violation with its line and column. A name
//! declared twice in the same file is reported as a duplicate.
//!
//! ## Pipeline
//!
//! ```text
//! File → physical lines → DeclarationScanner → AnalysisResult → report / viewer
//! ```
//!
//! 1. [`source`]: reads the file and splits it into physical lines.
//! 2. [`scanner`]: the finite-state automaton that validates each character
//!    and tracks declared names.
//! 3. [`report`]: renders the [`scanner::AnalysisResult`] as text.
//! 4. [`ui`]: optional ratatui viewer; not part of the stable library API.
//! 5. [`config`]: command-line settings for the binary.
//!
//! ## Example
//!
//! ```
//! use declcheck::scanner::DeclarationScanner;
//!
//! let result = DeclarationScanner::new().scan_str("int x = 5;\nfloat y;\n");
//! assert!(result.is_success());
//! assert_eq!(declcheck::report::render(&result), vec!["Correct variable declaration"]);
//! ```

pub mod config;
pub mod report;
pub mod scanner;
pub mod source;
pub mod ui;
