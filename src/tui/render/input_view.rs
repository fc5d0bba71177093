use ratatui::text::{Line, Span};

use crate::tui::app::{App, Mode};

use super::title_lines;

/// Block cursor drawn after the buffer
const CURSOR: &str = "\u{2588}";

/// Prompt for the text-entry modes
pub fn input_lines(app: &App) -> Vec<Line<'static>> {
    let (title, prompt, help) = match app.mode {
        Mode::CreateProject => (
            "Create New Project",
            "Project name: ",
            "Press Enter to create, Esc to cancel",
        ),
        Mode::CreateTodo => (
            "Create New Todo",
            "Todo title: ",
            "Press Enter to create, Esc to cancel",
        ),
        _ => ("Edit Todo", "Todo title: ", "Press Enter to save, Esc to cancel"),
    };

    let mut lines = title_lines(app, title);
    lines.push(Line::from(vec![
        Span::styled(prompt, app.theme.plain()),
        Span::styled(format!("{}{}", app.input, CURSOR), app.theme.input()),
    ]));
    lines.push(Line::from(Span::styled(help, app.theme.muted())));
    lines
}
