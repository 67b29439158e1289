//! Reading declaration sources from disk
//!
//! The file is read whole and split into physical lines on `'\n'`; each line
//! is handed to the scanner without its terminator. Failing to read the file
//! produces an [`ScanError::IoError`] result without running the scanner.

use crate::scanner::{AnalysisResult, DeclarationScanner, ScanError};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read the whole source file.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read; the scanner treats them like any other non-ASCII
/// character, so they are only accepted inside an initializer.
pub fn read_source(path: &Path) -> Result<String, ScanError> {
    let bytes = fs::read(path).map_err(|err| {
        warn!(path = %path.display(), error = %err, "cannot read input");
        ScanError::IoError {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            debug!(path = %path.display(), "input is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Split text into physical lines, dropping the terminators.
///
/// A final terminator does not start an extra empty line.
pub fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n')
}

/// Read `path` and scan it with `scanner`.
///
/// Returns the source text alongside the result so callers can display it;
/// the text is `None` when the file could not be read.
pub fn analyze_file(
    scanner: &mut DeclarationScanner,
    path: &Path,
) -> (Option<String>, AnalysisResult) {
    match read_source(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "read input");
            let result = scanner.scan(physical_lines(&text));
            (Some(text), result)
        }
        Err(err) => (None, AnalysisResult::failure(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_physical_lines() {
        let lines: Vec<&str> = physical_lines("int a;\r\nint b;\n").collect();
        assert_eq!(lines, vec!["int a;\r", "int b;"]);

        let lines: Vec<&str> = physical_lines("int a;").collect();
        assert_eq!(lines, vec!["int a;"]);

        assert_eq!(physical_lines("").count(), 0);
        assert_eq!(physical_lines("\n\n").count(), 2);
    }

    #[test]
    fn test_analyze_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "int x;\r\nfloat y = 2.5;\r\n").unwrap();

        let mut scanner = DeclarationScanner::new();
        let (text, result) = analyze_file(&mut scanner, file.path());
        assert!(result.is_success(), "{:?}", result);
        assert!(text.is_some());
    }

    #[test]
    fn test_latin1_byte_in_initializer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"int x = '\xe9';\nchar y;\n").unwrap();

        let mut scanner = DeclarationScanner::new();
        let (text, result) = analyze_file(&mut scanner, file.path());
        assert!(result.is_success(), "{:?}", result);
        assert!(text.is_some_and(|t| t.contains('\u{FFFD}')));
    }

    #[test]
    fn test_latin1_byte_outside_initializer_is_a_syntax_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"int \xe9x;\n").unwrap();

        let mut scanner = DeclarationScanner::new();
        let (_, result) = analyze_file(&mut scanner, file.path());
        assert!(matches!(result.error(), Some(ScanError::SyntaxError { .. })));
        assert_eq!(result.line(), 1);
        assert_eq!(result.position(), 4);
    }

    #[test]
    fn test_analyze_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");

        let mut scanner = DeclarationScanner::new();
        let (text, result) = analyze_file(&mut scanner, &path);
        assert!(text.is_none());
        assert!(!result.is_success());
        assert_eq!(result.message(), "Cannot open input file");
        assert_eq!(result.line(), 0);
        assert!(matches!(result.error(), Some(ScanError::IoError { .. })));
    }
}
