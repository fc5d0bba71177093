use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Effect, Mode, Screen};

use super::*;

pub(super) fn handle_todos(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    let count = app.current_project().map_or(0, |p| p.todos.len());

    if is_up(&key) {
        app.todo_cursor = app.todo_cursor.saturating_sub(1);
        return Vec::new();
    }
    if is_down(&key) {
        if app.todo_cursor + 1 < count {
            app.todo_cursor += 1;
        }
        return Vec::new();
    }

    match (key.code, plain_char(&key)) {
        (KeyCode::Backspace | KeyCode::Esc, _) => back_to_projects(app),
        (_, Some('q')) => app.should_quit = true,
        (_, Some(' ')) => return toggle_todo(app),
        (_, Some('n')) => begin_input(app, Mode::CreateTodo, ""),
        (_, Some('e')) => {
            let title = app
                .current_project()
                .and_then(|p| p.todos.get(app.todo_cursor))
                .map(|t| t.title.clone());
            if let Some(title) = title {
                begin_input(app, Mode::EditTodo, &title);
            }
        }
        (_, Some('d')) => return delete_todo(app),
        (_, Some('?')) => open_help(app, Screen::Todos),
        _ => {}
    }
    Vec::new()
}

fn back_to_projects(app: &mut App) {
    app.mode = Mode::Projects;
    app.tree_todo = None;
}

fn toggle_todo(app: &mut App) -> Vec<Effect> {
    let cursor = app.todo_cursor;
    match app.current_project_mut().and_then(|p| p.todos.get_mut(cursor)) {
        Some(todo) => {
            todo.toggle();
            vec![Effect::Save]
        }
        None => Vec::new(),
    }
}

/// Delete the todo under the cursor. No confirmation.
fn delete_todo(app: &mut App) -> Vec<Effect> {
    let cursor = app.todo_cursor;
    let Some(project) = app.current_project_mut() else {
        return Vec::new();
    };
    if cursor >= project.todos.len() {
        return Vec::new();
    }
    project.todos.remove(cursor);
    app.clamp_cursors();
    vec![Effect::Save]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use crate::tui::app::{Effect, Mode, Screen};
    use crate::tui::input::handle_key;
    use crate::tui::test_helpers::*;

    fn in_todos(todos: &[&str]) -> crate::tui::app::App {
        let mut app = app_with_projects(&[("Work", todos)]);
        app.mode = Mode::Todos;
        app
    }

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut app = in_todos(&["a", "b", "c"]);
        press(&mut app, &[ch('k')]);
        assert_eq!(app.todo_cursor, 0);
        press(&mut app, &[ch('j'), key(KeyCode::Down), ch('j'), ch('j')]);
        assert_eq!(app.todo_cursor, 2);
        press(&mut app, &[key(KeyCode::Up)]);
        assert_eq!(app.todo_cursor, 1);
    }

    #[test]
    fn test_cursor_on_empty_project() {
        let mut app = in_todos(&[]);
        press(&mut app, &[ch('j'), ch('k')]);
        assert_eq!(app.todo_cursor, 0);
    }

    #[test]
    fn test_toggle_flips_only_selected_todo() {
        let mut app = in_todos(&["a", "b"]);
        press(&mut app, &[ch('j')]);
        let effects = handle_key(&mut app, ch(' '));
        assert_eq!(effects, vec![Effect::Save]);
        assert!(!app.data.projects[0].todos[0].completed);
        assert!(app.data.projects[0].todos[1].completed);
        assert_eq!(app.data.projects[0].todos[1].title, "b");

        let effects = handle_key(&mut app, ch(' '));
        assert_eq!(effects, vec![Effect::Save]);
        assert!(!app.data.projects[0].todos[1].completed);
    }

    #[test]
    fn test_toggle_on_empty_project_is_noop() {
        let mut app = in_todos(&[]);
        assert!(handle_key(&mut app, ch(' ')).is_empty());
    }

    #[test]
    fn test_delete_middle_todo_keeps_cursor() {
        let mut app = in_todos(&["a", "b", "c"]);
        press(&mut app, &[ch('j')]);
        let effects = handle_key(&mut app, ch('d'));
        assert_eq!(effects, vec![Effect::Save]);
        assert_eq!(titles(&app, 0), vec!["a", "c"]);
        assert_eq!(app.todo_cursor, 1);
    }

    #[test]
    fn test_delete_last_todo_clamps_cursor() {
        let mut app = in_todos(&["a", "b"]);
        press(&mut app, &[ch('j'), ch('d')]);
        assert_eq!(app.todo_cursor, 0);

        let effects = handle_key(&mut app, ch('d'));
        assert_eq!(effects, vec![Effect::Save]);
        assert!(app.data.projects[0].todos.is_empty());
        assert_eq!(app.todo_cursor, 0);

        // Nothing left to delete
        assert!(handle_key(&mut app, ch('d')).is_empty());
        assert_eq!(app.mode, Mode::Todos);
    }

    #[test]
    fn test_edit_prefills_title() {
        let mut app = in_todos(&["Buy milk"]);
        press(&mut app, &[ch('e')]);
        assert_eq!(app.mode, Mode::EditTodo);
        assert_eq!(app.input, "Buy milk");
    }

    #[test]
    fn test_edit_without_todos_stays() {
        let mut app = in_todos(&[]);
        press(&mut app, &[ch('e')]);
        assert_eq!(app.mode, Mode::Todos);
    }

    #[test]
    fn test_new_todo_opens_empty_input() {
        let mut app = in_todos(&["a"]);
        app.input = "leftover".into();
        press(&mut app, &[ch('n')]);
        assert_eq!(app.mode, Mode::CreateTodo);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_back_keys_return_to_projects() {
        for back in [key(KeyCode::Backspace), key(KeyCode::Esc)] {
            let mut app = in_todos(&["a"]);
            press(&mut app, &[back]);
            assert_eq!(app.mode, Mode::Projects);
            assert!(!app.should_quit);
        }
    }

    #[test]
    fn test_help_returns_to_todos() {
        let mut app = in_todos(&["a"]);
        press(&mut app, &[ch('?')]);
        assert_eq!(app.mode, Mode::Help { back: Screen::Todos });
        press(&mut app, &[ch('x')]);
        assert_eq!(app.mode, Mode::Todos);
    }

    #[test]
    fn test_q_quits() {
        let mut app = in_todos(&["a"]);
        press(&mut app, &[ch('q')]);
        assert!(app.should_quit);
    }
}
