use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{Project, Todo};
use crate::tui::app::{App, Effect, Mode};
use crate::util::unicode;

use super::*;

/// Keys for the three text-entry modes. Everything printable (including
/// `q`) is text here; only Ctrl+C quits.
pub(super) fn handle_text_entry(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    let back = match app.mode {
        Mode::CreateProject => Mode::Projects,
        _ => Mode::Todos,
    };

    match key.code {
        KeyCode::Esc => app.finish_input(back),
        KeyCode::Enter => {
            let effects = commit(app);
            app.finish_input(back);
            return effects;
        }
        KeyCode::Backspace => unicode::pop_grapheme(&mut app.input),
        _ => {
            if let Some(c) = plain_char(&key) {
                app.input.push(c);
            }
        }
    }
    Vec::new()
}

/// Apply the buffer to the model. Blank input is dropped without a save.
fn commit(app: &mut App) -> Vec<Effect> {
    let text = app.input.trim().to_string();
    if text.is_empty() {
        return Vec::new();
    }

    match app.mode {
        Mode::CreateProject => {
            let idx = app.data.add_project(Project::new(text));
            app.data.current_project = idx;
            app.tree_todo = None;
            tracing::info!(file = %app.data.projects[idx].filename, "created project");
        }
        Mode::CreateTodo => {
            let Some(project) = app.current_project_mut() else {
                return Vec::new();
            };
            project.todos.push(Todo::new(text));
            let last = project.todos.len() - 1;
            app.todo_cursor = last;
        }
        Mode::EditTodo => {
            let cursor = app.todo_cursor;
            let Some(todo) = app.current_project_mut().and_then(|p| p.todos.get_mut(cursor)) else {
                return Vec::new();
            };
            todo.title = text;
        }
        _ => return Vec::new(),
    }
    vec![Effect::Save]
}
