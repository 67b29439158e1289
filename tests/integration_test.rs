// Integration tests for the declaration checker

use declcheck::report;
use declcheck::scanner::{DeclarationScanner, ScanCursor, ScanError, ScannerState};
use declcheck::source::analyze_file;
use pretty_assertions::assert_eq;
use std::fs;

fn scan(source: &str) -> declcheck::scanner::AnalysisResult {
    DeclarationScanner::new().scan_str(source)
}

#[test]
fn test_two_declarations() {
    let result = scan("int x;\nfloat y;\n");
    assert!(result.is_success());
    assert_eq!(result.line(), 0);
    assert_eq!(report::render(&result), vec!["Correct variable declaration"]);
}

#[test]
fn test_redeclaration() {
    let result = scan("int x;\nint x;\n");
    assert!(!result.is_success());
    assert_eq!(result.duplicate_name(), "x");
    assert!(matches!(
        result.error(),
        Some(ScanError::DuplicateVariable { .. })
    ));
}

#[test]
fn test_missing_semicolon() {
    let result = scan("int x\n");
    assert_eq!(
        result.error(),
        Some(&ScanError::MissingTerminator {
            location: ScanCursor::new(1, 5)
        })
    );
    assert_eq!(
        report::render(&result),
        vec![
            "Error: Missing semicolon at end of line",
            "At line 1, position 6",
        ]
    );
}

#[test]
fn test_digit_leading_identifier() {
    let result = scan("int 1x;\n");
    assert!(matches!(
        result.error(),
        Some(ScanError::SyntaxError {
            found: '1',
            location: ScanCursor { line: 1, .. },
            ..
        })
    ));
}

#[test]
fn test_initializer() {
    assert!(scan("int x = 5;\n").is_success());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut scanner = DeclarationScanner::new();
    let (_, result) = analyze_file(&mut scanner, &dir.path().join("input.txt"));

    assert!(matches!(result.error(), Some(ScanError::IoError { .. })));
    assert_eq!(result.line(), 0);
    assert_eq!(result.position(), 0);
    assert_eq!(report::render(&result), vec!["Error: Cannot open input file"]);
}

#[test]
fn test_multiline_program_from_file() {
    let source = r#"int count = 0;
  char letter = 'a';   float ratio = 1.0 / 3;

double total; long big = count * 1000;
unsigned flags=0x1F;
"#;
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, source).unwrap();

    let mut scanner = DeclarationScanner::new();
    let (text, result) = analyze_file(&mut scanner, &input);
    assert_eq!(text.as_deref(), Some(source));
    assert!(result.is_success(), "{:?}", result);
    assert_eq!(scanner.declared_names().len(), 6);
    assert_eq!(scanner.state(), ScannerState::AwaitingType);
}

#[test]
fn test_first_error_wins() {
    // Line 2 has a syntax error, line 3 a duplicate; only line 2 is reported
    let result = scan("int a;\nint $b;\nint a;\n");
    assert_eq!(result.message(), "Syntax error");
    assert_eq!(result.line(), 2);
    assert_eq!(result.position(), 4);
    assert!(result.duplicate_name().is_empty());
}

#[test]
fn test_expression_may_not_continue_on_next_line() {
    let result = scan("int x = 1\n + 2;\n");
    let err = result.error().expect("scan should fail");
    assert!(err.is_syntax_class());
    assert_eq!(result.line(), 1);
}

#[test]
fn test_crlf_input() {
    assert!(scan("int a;\r\nint b = 2;\r\n").is_success());
    // The stray carriage return is counted when reporting the column
    let result = scan("int a\r\n");
    assert_eq!(result.line(), 1);
    assert_eq!(result.position(), 6);
}

#[test]
fn test_report_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");
    let result = scan("int x;\nint x = 2;\n");

    report::emit(&result, &output).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Error: Duplicate variable name\nAt line 2, position 6\nDuplicate variable: x\n"
    );
}
