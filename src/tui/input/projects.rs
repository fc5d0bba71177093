use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Effect, Mode, ProjectRow, Screen};

use super::*;

pub(super) fn handle_projects(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    if is_up(&key) {
        move_row(app, -1);
        return Vec::new();
    }
    if is_down(&key) {
        move_row(app, 1);
        return Vec::new();
    }

    match (key.code, plain_char(&key)) {
        (KeyCode::Esc, _) | (_, Some('q')) => app.should_quit = true,
        (KeyCode::Tab, _) => toggle_expanded(app),
        (KeyCode::Enter, _) => open_selected(app),
        (_, Some(' ')) => return toggle_tree_todo(app),
        (_, Some('n')) => begin_input(app, Mode::CreateProject, ""),
        (_, Some('d')) => {
            if app.current_project().is_some() {
                app.mode = Mode::ConfirmDeleteProject;
            }
        }
        (_, Some('?')) => open_help(app, Screen::Projects),
        _ => {}
    }
    Vec::new()
}

/// Move the selection through the visible rows (projects plus the todos of
/// expanded projects), stopping at either end
fn move_row(app: &mut App, delta: isize) {
    let rows = app.visible_rows();
    let Some(selected) = app.selected_row() else {
        return;
    };
    let Some(pos) = rows.iter().position(|row| *row == selected) else {
        return;
    };
    let target = pos.saturating_add_signed(delta).min(rows.len() - 1);
    app.select_row(rows[target]);
}

/// Expand or collapse the current project; the selection returns to the
/// project row either way
fn toggle_expanded(app: &mut App) {
    let Some(filename) = app.current_project().map(|p| p.filename.clone()) else {
        return;
    };
    if !app.expanded.remove(&filename) {
        app.expanded.insert(filename);
    }
    app.tree_todo = None;
}

/// Enter the todos view, landing on the selected todo row if there is one
fn open_selected(app: &mut App) {
    match app.selected_row() {
        Some(ProjectRow::Todo { todo, .. }) => app.todo_cursor = todo,
        Some(ProjectRow::Project(_)) => app.todo_cursor = 0,
        None => return,
    }
    app.mode = Mode::Todos;
}

/// Space on an expanded todo row toggles it in place
fn toggle_tree_todo(app: &mut App) -> Vec<Effect> {
    let Some(ProjectRow::Todo { project, todo }) = app.selected_row() else {
        return Vec::new();
    };
    match app.data.projects.get_mut(project).and_then(|p| p.todos.get_mut(todo)) {
        Some(item) => {
            item.toggle();
            vec![Effect::Save]
        }
        None => Vec::new(),
    }
}
