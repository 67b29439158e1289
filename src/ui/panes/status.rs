//! Status bar with the verdict badge and keybindings

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Keys handled by the viewer, in the order they are shown.
pub fn key_hints(success: bool) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![
        ("↑↓", "scroll"),
        ("PgUp/PgDn", "page"),
        ("Home", "top"),
    ];
    if !success {
        hints.push(("g", "go to error"));
    }
    hints.push(("q", "quit"));
    hints
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, success: bool) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (badge, badge_bg) = if success {
        (" OK ", DEFAULT_THEME.success)
    } else {
        (" ERROR ", DEFAULT_THEME.error)
    };

    let left = Line::from(vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ]);

    let key_style = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(DEFAULT_THEME.comment);

    let hints = key_hints(success);
    let last = hints.len().saturating_sub(1);
    let right_spans: Vec<Span<'static>> = hints
        .into_iter()
        .enumerate()
        .flat_map(|(idx, (key, label))| {
            let gap = if idx == last { " " } else { "  " };
            [
                Span::styled(key, key_style),
                Span::styled(format!(" {}{}", label, gap), label_style),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(left), layout[0]);
    frame.render_widget(
        Paragraph::new(Line::from(right_spans)).alignment(Alignment::Right),
        layout[1],
    );
}
