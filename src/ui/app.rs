//! Viewer state and event loop

use crate::scanner::{AnalysisResult, ScanCursor};
use crate::ui::panes::{render_report_pane, render_source_pane, render_status_bar};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Lines kept visible above the failure line when jumping to it
const CONTEXT_LINES: usize = 3;

/// Lines moved by PageUp / PageDown
const PAGE_LINES: usize = 20;

/// The viewer state
pub struct App {
    /// The scanned text
    pub source_code: String,

    pub result: AnalysisResult,

    /// First visible line of the source pane (0-based)
    pub source_scroll: usize,

    pub should_quit: bool,

    pub status_message: String,
}

impl App {
    pub fn new(source_code: String, result: AnalysisResult) -> Self {
        let status_message = match result.error().and_then(|e| e.location()) {
            Some(loc) => format!("{} at {}", result.message(), loc),
            None => result.message().to_string(),
        };

        let mut app = App {
            source_code,
            result,
            source_scroll: 0,
            should_quit: false,
            status_message,
        };
        app.jump_to_failure();
        app
    }

    /// Location of the failure inside the source, if any.
    pub fn failure_location(&self) -> Option<ScanCursor> {
        self.result.error().and_then(|e| e.location()).copied()
    }

    fn line_count(&self) -> usize {
        crate::source::physical_lines(&self.source_code).count()
    }

    /// Scroll so the failing line is near the top of the source pane.
    pub fn jump_to_failure(&mut self) {
        if let Some(loc) = self.failure_location() {
            self.source_scroll = loc.line.saturating_sub(1 + CONTEXT_LINES);
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.line_count().saturating_sub(1);
        self.source_scroll = self.source_scroll.saturating_add_signed(delta).min(max);
    }

    /// Run the viewer until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(PAGE_LINES as isize),
            KeyCode::PageUp => self.scroll_by(-(PAGE_LINES as isize)),
            KeyCode::Home => self.source_scroll = 0,
            KeyCode::Char('g') => self.jump_to_failure(),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[0]);

        render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            self.failure_location(),
            self.source_scroll,
        );
        render_report_pane(frame, columns[1], &self.result);
        render_status_bar(
            frame,
            rows[1],
            &self.status_message,
            self.result.is_success(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::DeclarationScanner;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app_for(source: &str) -> App {
        let result = DeclarationScanner::new().scan_str(source);
        App::new(source.to_string(), result)
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_render_success() {
        let app = app_for("int x;\nfloat y = 1.5;\n");
        let screen = screen(&app);
        assert!(screen.contains("Correct variable declaration"));
        assert!(screen.contains(" OK "));
        assert!(screen.contains("float y = 1.5;"));
    }

    #[test]
    fn test_render_duplicate() {
        let app = app_for("int x;\nint x;\n");
        let screen = screen(&app);
        assert!(screen.contains("Error: Duplicate variable name"));
        assert!(screen.contains("Duplicate variable: x"));
        assert!(screen.contains(" ERROR "));
    }

    #[test]
    fn test_initial_scroll_targets_failure() {
        let mut source = String::new();
        for i in 0..30 {
            source.push_str(&format!("int v{};\n", i));
        }
        source.push_str("int v3;\n");

        let app = app_for(&source);
        assert_eq!(app.failure_location().map(|l| l.line), Some(31));
        assert_eq!(app.source_scroll, 31 - 1 - CONTEXT_LINES);
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let mut app = app_for("int a;\nint b;\nint c;\n");
        assert_eq!(app.source_scroll, 0);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.source_scroll, 0);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.source_scroll, 2);

        press(&mut app, KeyCode::Home);
        assert_eq!(app.source_scroll, 0);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
