use ratatui::text::{Line, Span};

use crate::tui::app::App;

use super::title_lines;

/// Delete confirmation for the current project
pub fn confirm_lines(app: &App) -> Vec<Line<'static>> {
    let Some(project) = app.current_project() else {
        return vec![Line::from("No project selected")];
    };

    let mut lines = title_lines(app, "Delete Project");
    lines.push(Line::from(format!(
        "Are you sure you want to delete the project '{}'?",
        project.name
    )));
    if !project.todos.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("This will permanently delete {} todo(s).", project.todos.len()),
            app.theme.error(),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Press 'y' or Enter to confirm, 'n' or Esc to cancel",
        app.theme.muted(),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tui::test_helpers::*;

    #[test]
    fn test_warns_about_todo_count() {
        let app = app_with_projects(&[("Work", &["a", "b", "c"])]);
        assert_eq!(
            lines_to_string(&confirm_lines(&app)[2..]),
            "Are you sure you want to delete the project 'Work'?\n\
             This will permanently delete 3 todo(s).\n\
             Press 'y' or Enter to confirm, 'n' or Esc to cancel"
        );
    }

    #[test]
    fn test_confirm_screen_snapshot() {
        let app = app_with_projects(&[("Groceries", &["eggs"])]);
        insta::assert_snapshot!(lines_to_string(&confirm_lines(&app)), @r"
        🍩 Delete Project

        Are you sure you want to delete the project 'Groceries'?
        This will permanently delete 1 todo(s).
        Press 'y' or Enter to confirm, 'n' or Esc to cancel
        ");
    }

    #[test]
    fn test_empty_project_skips_count() {
        let app = app_with_projects(&[("Home", &[])]);
        let text = lines_to_string(&confirm_lines(&app));
        assert!(!text.contains("permanently"));
        assert!(text.contains("'Home'"));
    }
}
