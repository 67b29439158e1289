//! Result pane: the report text plus the detailed diagnostic

use crate::report;
use crate::scanner::AnalysisResult;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn report_lines(result: &AnalysisResult) -> Vec<Line<'static>> {
    let headline_color = if result.is_success() {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.error
    };

    let mut lines: Vec<Line<'static>> = report::render(result)
        .into_iter()
        .enumerate()
        .map(|(idx, text)| {
            if idx == 0 {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(headline_color)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)))
            }
        })
        .collect();

    if let Some(err) = result.error() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    lines
}

pub fn render_report_pane(frame: &mut Frame, area: Rect, result: &AnalysisResult) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let paragraph = Paragraph::new(report_lines(result))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
