use ratatui::text::{Line, Span};

use crate::tui::app::App;

use super::title_lines;

/// Key reference shown by `?`, one section per screen
pub const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Project View:",
        &[
            ("\u{2191}/\u{2193}, j/k", "Navigate projects/todos"),
            ("Tab", "Expand/collapse project"),
            ("Space", "Toggle todo (when expanded)"),
            ("Enter", "Open project or select todo"),
            ("n", "Create new project"),
            ("d", "Delete project"),
            ("?", "Show/hide help"),
            ("q, Ctrl+C, Esc", "Quit"),
        ],
    ),
    (
        "Todo View:",
        &[
            ("\u{2191}/\u{2193}, j/k", "Navigate todos"),
            ("Space", "Toggle todo completion"),
            ("n", "Create new todo"),
            ("e", "Edit todo"),
            ("d", "Delete todo"),
            ("Backspace, Esc", "Return to projects"),
            ("?", "Show/hide help"),
            ("q, Ctrl+C", "Quit"),
        ],
    ),
    (
        "Input Mode:",
        &[
            ("Type", "Enter text"),
            ("Enter", "Confirm"),
            ("Esc", "Cancel"),
            ("Backspace", "Delete character"),
        ],
    ),
];

/// Width of the key column
const KEY_COL: usize = 16;

pub fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = title_lines(app, "Donut - Help");

    for (i, (header, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*header, app.theme.title())));
        for (keys, desc) in bindings.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<width$}", keys, width = KEY_COL), app.theme.selected()),
                Span::styled(*desc, app.theme.plain()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to return...",
        app.theme.muted(),
    )));
    lines
}

/// Plain-text rendering of the key reference, used by `--help`
pub fn keyboard_help_text() -> String {
    let mut out = String::from("KEYBOARD CONTROLS:\n");
    for (header, bindings) in HELP_SECTIONS {
        out.push('\n');
        out.push_str(header);
        out.push('\n');
        for (keys, desc) in bindings.iter() {
            out.push_str(&format!("    {:<width$}{}\n", keys, desc, width = KEY_COL));
        }
    }
    out
}
