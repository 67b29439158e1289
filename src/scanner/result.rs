//! The outcome of one scan

use super::errors::ScanError;

/// Message carried by a successful result.
pub const SUCCESS_MESSAGE: &str = "Correct variable declaration";

/// Outcome of one full scan.
///
/// Built exactly once per scan and never mutated afterwards. `line` and
/// `position` are zero when no location applies (success, unreadable
/// input); `position` is 0-based. `duplicate_name` is empty unless the
/// failure was a re-declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    success: bool,
    message: String,
    line: usize,
    position: usize,
    duplicate_name: String,
    error: Option<ScanError>,
}

impl AnalysisResult {
    pub fn success() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            line: 0,
            position: 0,
            duplicate_name: String::new(),
            error: None,
        }
    }

    pub fn failure(error: ScanError) -> Self {
        let (line, position) = error
            .location()
            .map(|loc| (loc.line, loc.column))
            .unwrap_or((0, 0));
        Self {
            success: false,
            message: error.message().to_string(),
            line,
            position,
            duplicate_name: error.duplicate_name().unwrap_or_default().to_string(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based line of the failure, or 0.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 0-based column of the failure, or 0.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn duplicate_name(&self) -> &str {
        &self.duplicate_name
    }

    /// The typed failure, if any.
    pub fn error(&self) -> Option<&ScanError> {
        self.error.as_ref()
    }
}

impl From<Result<(), ScanError>> for AnalysisResult {
    fn from(outcome: Result<(), ScanError>) -> Self {
        match outcome {
            Ok(()) => AnalysisResult::success(),
            Err(err) => AnalysisResult::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::ScanCursor;

    #[test]
    fn test_failure_fields() {
        let result = AnalysisResult::failure(ScanError::DuplicateVariable {
            name: "count".to_string(),
            location: ScanCursor::new(3, 9),
        });
        assert!(!result.is_success());
        assert_eq!(result.message(), "Duplicate variable name");
        assert_eq!(result.line(), 3);
        assert_eq!(result.position(), 9);
        assert_eq!(result.duplicate_name(), "count");
    }

    #[test]
    fn test_io_failure_has_no_location() {
        let result = AnalysisResult::failure(ScanError::IoError {
            path: "missing.txt".to_string(),
            reason: "No such file or directory".to_string(),
        });
        assert_eq!(result.line(), 0);
        assert_eq!(result.position(), 0);
        assert!(result.duplicate_name().is_empty());
    }

    #[test]
    fn test_from_outcome() {
        let ok: AnalysisResult = Ok(()).into();
        assert!(ok.is_success());
        assert_eq!(ok.message(), SUCCESS_MESSAGE);
        assert!(ok.error().is_none());
    }
}
