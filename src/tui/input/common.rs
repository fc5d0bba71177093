use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode, Screen};

/// Ctrl+C quits from every mode
pub(super) fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// A plain (or shifted) character, with no Ctrl/Alt held
pub(super) fn plain_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Arrow keys and vi-style j/k
pub(super) fn is_up(key: &KeyEvent) -> bool {
    key.code == KeyCode::Up || plain_char(key) == Some('k')
}

pub(super) fn is_down(key: &KeyEvent) -> bool {
    key.code == KeyCode::Down || plain_char(key) == Some('j')
}

/// Open the help view, remembering where to come back to
pub(super) fn open_help(app: &mut App, back: Screen) {
    app.mode = Mode::Help { back };
}

/// Start a text-entry mode with a prefilled buffer
pub(super) fn begin_input(app: &mut App, mode: Mode, initial: &str) {
    app.input.clear();
    app.input.push_str(initial);
    app.mode = mode;
}
