mod common;
mod confirm;
mod help;
mod projects;
mod text_entry;
mod todos;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Effect, Mode};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use help::*;
#[allow(unused_imports)]
use projects::*;
#[allow(unused_imports)]
use text_entry::*;
#[allow(unused_imports)]
use todos::*;

/// Handle a key event in the current mode.
///
/// Only mutates `app`; anything that touches the disk is returned as an
/// [`Effect`] for the caller to run.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return Vec::new();
    }
    app.status_message = None;

    if is_interrupt(&key) {
        app.should_quit = true;
        return Vec::new();
    }

    match app.mode {
        Mode::Projects => handle_projects(app, key),
        Mode::Todos => handle_todos(app, key),
        Mode::CreateProject | Mode::CreateTodo | Mode::EditTodo => handle_text_entry(app, key),
        Mode::Help { back } => handle_help(app, back),
        Mode::ConfirmDeleteProject => handle_confirm(app, key),
    }
}
