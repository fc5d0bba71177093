pub mod confirm_view;
pub mod help_view;
pub mod input_view;
pub mod projects_view;
pub mod status_row;
pub mod todos_view;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::app::{App, Mode};

/// Main render function, dispatches on the current mode
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Layout: content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    render_content(frame, app, chunks[0]);
    status_row::render_status_row(frame, app, chunks[1]);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let lines = screen_lines(app, area.width as usize);
    frame.render_widget(Paragraph::new(lines), area);
}

/// The lines of the active screen, for a content area `width` cells wide
pub fn screen_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    match app.mode {
        Mode::Projects => projects_view::projects_lines(app, width),
        Mode::Todos => todos_view::todos_lines(app, width),
        Mode::CreateProject | Mode::CreateTodo | Mode::EditTodo => input_view::input_lines(app),
        Mode::Help { .. } => help_view::help_lines(app),
        Mode::ConfirmDeleteProject => confirm_view::confirm_lines(app),
    }
}

/// Screen title with the donut prefix, followed by a blank line
pub(super) fn title_lines(app: &App, title: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(format!("\u{1F369} {}", title), app.theme.title())),
        Line::from(""),
    ]
}

/// Blank line, then the muted key hints
pub(super) fn footer_lines(app: &App, hints: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(hints.to_string(), app.theme.muted())),
    ]
}

/// Cursor marker for a row
pub(super) fn cursor_mark(selected: bool) -> &'static str {
    if selected { ">" } else { " " }
}

pub(super) fn checkbox(completed: bool) -> &'static str {
    if completed { "\u{2611}" } else { "\u{2610}" }
}
