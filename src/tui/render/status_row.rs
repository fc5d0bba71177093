use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let line = status_line(app, area.width as usize);
    frame.render_widget(Paragraph::new(line), area);
}

/// Storage error on the left, mode name right-aligned
pub fn status_line(app: &App, width: usize) -> Line<'static> {
    let hint = mode_label(app.mode);
    let hint_width = display_width(hint);

    let mut spans = Vec::new();
    let mut content_width = 0;
    if let Some(message) = &app.status_message {
        let message = truncate_to_width(message, width.saturating_sub(hint_width + 1));
        content_width = display_width(&message);
        spans.push(Span::styled(message, app.theme.error()));
    }

    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(hint, app.theme.muted()));
    }
    Line::from(spans)
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Projects => "projects",
        Mode::Todos => "todos",
        Mode::CreateProject => "new project",
        Mode::CreateTodo => "new todo",
        Mode::EditTodo => "edit todo",
        Mode::Help { .. } => "help",
        Mode::ConfirmDeleteProject => "delete project",
    }
}
