//! Source pane: the scanned text with line numbers
//!
//! Declarations get light highlighting (type names, variable names and
//! initializer expressions in distinct colors). When the scan failed at a
//! location, that line is marked in the gutter and the offending column is
//! shown in the error color.

use crate::scanner::ScanCursor;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which part of a declaration the highlighter is in.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Part {
    Type,
    Name,
    AfterName,
    Expression,
}

fn word_style(part: Part) -> Style {
    match part {
        Part::Type => Style::default()
            .fg(DEFAULT_THEME.type_name)
            .add_modifier(Modifier::BOLD),
        Part::Name => Style::default().fg(DEFAULT_THEME.identifier),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Highlight one line of declarations.
pub fn highlight_declarations(line: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut word = String::new();
    let mut expression = String::new();
    let mut part = Part::Type;

    for c in line.chars() {
        if part == Part::Expression {
            if c == ';' {
                spans.push(Span::styled(
                    std::mem::take(&mut expression),
                    Style::default().fg(DEFAULT_THEME.expression),
                ));
                spans.push(Span::styled(";", Style::default().fg(DEFAULT_THEME.comment)));
                part = Part::Type;
            } else {
                expression.push(c);
            }
            continue;
        }

        if c.is_ascii_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }

        if !word.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut word), word_style(part)));
            part = match part {
                Part::Type => Part::Name,
                _ => Part::AfterName,
            };
        }

        match c {
            '=' => {
                spans.push(Span::styled("=", Style::default().fg(DEFAULT_THEME.primary)));
                part = Part::Expression;
            }
            ';' => {
                spans.push(Span::styled(";", Style::default().fg(DEFAULT_THEME.comment)));
                part = Part::Type;
            }
            _ => spans.push(Span::raw(c.to_string())),
        }
    }

    if !word.is_empty() {
        spans.push(Span::styled(word, word_style(part)));
    }
    if !expression.is_empty() {
        spans.push(Span::styled(
            expression,
            Style::default().fg(DEFAULT_THEME.expression),
        ));
    }

    spans
}

/// Spans for the failing line, with the character at `column` marked.
///
/// A column past the end of the line (missing terminator, unterminated
/// expression) marks a blank cell after the last character.
fn mark_error_column(line: &str, column: usize) -> Vec<Span<'static>> {
    let base = Style::default()
        .fg(DEFAULT_THEME.fg)
        .bg(DEFAULT_THEME.current_line_bg);
    let marked = Style::default()
        .fg(DEFAULT_THEME.current_line_bg)
        .bg(DEFAULT_THEME.error)
        .add_modifier(Modifier::BOLD);

    let before: String = line.chars().take(column).collect();
    let at: String = line
        .chars()
        .nth(column)
        .map(|c| if c == '\t' || c == '\r' { ' ' } else { c })
        .unwrap_or(' ')
        .to_string();
    let after: String = line.chars().skip(column + 1).collect();

    vec![
        Span::styled(before, base),
        Span::styled(at, marked),
        Span::styled(after, base),
    ]
}

/// Build the numbered lines of the pane.
pub fn source_lines(source: &str, failure: Option<ScanCursor>) -> Vec<Line<'static>> {
    let lines: Vec<&str> = crate::source::physical_lines(source).collect();
    let width = lines.len().max(1).to_string().len();

    lines
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let line_no = idx + 1;
            let is_failure = failure.is_some_and(|loc| loc.line == line_no);

            let gutter = if is_failure {
                Span::styled(
                    format!("▶{:>width$} │ ", line_no, width = width),
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!(" {:>width$} │ ", line_no, width = width),
                    Style::default().fg(DEFAULT_THEME.comment),
                )
            };

            let mut spans = vec![gutter];
            match failure {
                Some(loc) if is_failure => spans.extend(mark_error_column(text, loc.column)),
                _ => spans.extend(highlight_declarations(text)),
            }
            Line::from(spans)
        })
        .collect()
}

/// Render the source pane.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    failure: Option<ScanCursor>,
    scroll: usize,
) {
    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let paragraph = Paragraph::new(source_lines(source, failure))
        .block(block)
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let line = "int x = a + 1; char c;";
        assert_eq!(text_of(&highlight_declarations(line)), line);
    }

    #[test]
    fn test_highlight_roles() {
        let spans = highlight_declarations("int x = 5;");
        assert_eq!(spans[0].content, "int");
        assert_eq!(spans[0].style.fg, Some(DEFAULT_THEME.type_name));
        assert_eq!(spans[2].content, "x");
        assert_eq!(spans[2].style.fg, Some(DEFAULT_THEME.identifier));
        let expr = spans
            .iter()
            .find(|s| s.content == " 5")
            .expect("expression span");
        assert_eq!(expr.style.fg, Some(DEFAULT_THEME.expression));
    }

    #[test]
    fn test_error_column_past_end() {
        let spans = mark_error_column("int x", 5);
        assert_eq!(spans[0].content, "int x");
        assert_eq!(spans[1].content, " ");
        assert_eq!(spans[2].content, "");
    }

    #[test]
    fn test_failure_line_is_marked() {
        let lines = source_lines("int a;\nint 1;\n", Some(ScanCursor::new(2, 4)));
        assert_eq!(lines.len(), 2);
        assert!(lines[1].spans[0].content.starts_with('▶'));
        assert!(!lines[0].spans[0].content.starts_with('▶'));
        assert_eq!(lines[1].spans[2].content, "1");
    }
}
