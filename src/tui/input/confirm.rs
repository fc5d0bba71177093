use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Effect, Mode};

use super::*;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    match (key.code, plain_char(&key)) {
        // Confirm: y or Enter
        (KeyCode::Enter, _) | (_, Some('y')) => {
            app.mode = Mode::Projects;
            confirm_delete_project(app)
        }
        // Cancel: n or Esc
        (KeyCode::Esc, _) | (_, Some('n')) => {
            app.mode = Mode::Projects;
            Vec::new()
        }
        (_, Some('q')) => {
            app.should_quit = true;
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Remove the current project from the collection. The file removal and the
/// save of what remains are left to the effect runner.
pub(super) fn confirm_delete_project(app: &mut App) -> Vec<Effect> {
    let idx = app.data.current_project;
    let Some(project) = app.data.remove_project(idx) else {
        return Vec::new();
    };
    app.expanded.remove(&project.filename);
    app.tree_todo = None;
    app.clamp_cursors();
    tracing::info!(file = %project.filename, "deleted project");
    vec![Effect::DeleteProjectFile(project), Effect::Save]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use crate::tui::app::{Effect, Mode};
    use crate::tui::input::handle_key;
    use crate::tui::test_helpers::*;

    #[test]
    fn test_n_cancels_without_touching_anything() {
        let mut app = app_with_projects(&[("Work", &["a"]), ("Home", &[])]);
        let before = app.data.clone();
        press(&mut app, &[ch('d')]);
        assert_eq!(app.mode, Mode::ConfirmDeleteProject);

        let effects = handle_key(&mut app, ch('n'));
        assert!(effects.is_empty());
        assert_eq!(app.mode, Mode::Projects);
        assert_eq!(app.data, before);
    }

    #[test]
    fn test_escape_cancels() {
        let mut app = app_with_projects(&[("Work", &[])]);
        app.mode = Mode::ConfirmDeleteProject;
        assert!(handle_key(&mut app, key(KeyCode::Esc)).is_empty());
        assert_eq!(app.data.projects.len(), 1);
    }

    #[test]
    fn test_y_deletes_current_project() {
        let mut app = app_with_projects(&[("Work", &["a"]), ("Home", &[])]);
        app.mode = Mode::ConfirmDeleteProject;
        let effects = handle_key(&mut app, ch('y'));

        let removed = project("Work", &["a"]);
        assert_eq!(effects, vec![Effect::DeleteProjectFile(removed), Effect::Save]);
        assert_eq!(app.mode, Mode::Projects);
        assert_eq!(app.data.projects.len(), 1);
        assert_eq!(app.data.projects[0].name, "Home");
        assert_eq!(app.data.current_project, 0);
    }

    #[test]
    fn test_deleting_last_project_selects_new_last() {
        let mut app = app_with_projects(&[("A", &[]), ("B", &[]), ("C", &[])]);
        press(&mut app, &[ch('j'), ch('j'), ch('d'), key(KeyCode::Enter)]);
        assert_eq!(app.data.projects.len(), 2);
        assert_eq!(app.data.current_project, 1);
        assert_eq!(app.current_project().unwrap().name, "B");
    }

    #[test]
    fn test_deleting_only_project_leaves_no_selection() {
        let mut app = app_with_projects(&[("Solo", &["x"])]);
        press(&mut app, &[key(KeyCode::Tab), ch('j'), ch('d'), ch('y')]);
        assert!(app.data.projects.is_empty());
        assert!(app.expanded.is_empty());
        assert_eq!(app.selected_row(), None);
        assert_eq!(app.tree_todo, None);

        // d with nothing selected does not reopen the dialog
        press(&mut app, &[ch('d')]);
        assert_eq!(app.mode, Mode::Projects);
    }

    #[test]
    fn test_other_keys_keep_dialog_open() {
        let mut app = app_with_projects(&[("Work", &[])]);
        app.mode = Mode::ConfirmDeleteProject;
        press(&mut app, &[ch('x'), key(KeyCode::Tab)]);
        assert_eq!(app.mode, Mode::ConfirmDeleteProject);
        assert_eq!(app.data.projects.len(), 1);
    }
}
