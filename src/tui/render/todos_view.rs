use ratatui::text::{Line, Span};

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

use super::{checkbox, cursor_mark, footer_lines, title_lines};

const HINTS: &str = "n (new), e (edit), d (delete), esc (back), ? (help), q (quit)";

/// Todos of the current project
pub fn todos_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let Some(project) = app.current_project() else {
        return vec![Line::from("No project selected")];
    };

    let mut lines = title_lines(app, &format!("Donut - {}", project.name));

    if project.todos.is_empty() {
        lines.push(Line::from("No todos yet. Press 'n' to create one!"));
    }

    for (i, todo) in project.todos.iter().enumerate() {
        let is_selected = i == app.todo_cursor;
        let prefix = format!("{} {} ", cursor_mark(is_selected), checkbox(todo.completed));
        let title = truncate_to_width(&todo.title, width.saturating_sub(display_width(&prefix)));
        lines.push(Line::from(vec![
            Span::raw(prefix),
            Span::styled(title, app.theme.todo_title(todo.completed, is_selected)),
        ]));
    }

    lines.extend(footer_lines(app, HINTS));
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tui::app::Mode;
    use crate::tui::test_helpers::*;

    #[test]
    fn test_todo_rows_with_cursor_and_checkboxes() {
        let mut app = app_with_projects(&[("Work", &["Buy milk", "Pay bills"])]);
        app.data.projects[0].todos[1].completed = true;
        app.mode = Mode::Todos;
        app.todo_cursor = 1;

        assert_eq!(
            lines_to_string(&todos_lines(&app, 80)),
            "\u{1F369} Donut - Work\n\
             \n\
             \u{20}\u{20}\u{2610} Buy milk\n\
             > \u{2611} Pay bills\n\
             \n\
             n (new), e (edit), d (delete), esc (back), ? (help), q (quit)"
        );
    }

    #[test]
    fn test_completed_todo_is_struck_through_even_when_selected() {
        let mut app = app_with_projects(&[("Work", &["done"])]);
        app.data.projects[0].todos[0].completed = true;
        let lines = todos_lines(&app, 80);
        assert_eq!(lines[2].spans[1].style, app.theme.completed());
    }

    #[test]
    fn test_empty_project_message() {
        let app = app_with_projects(&[("Work", &[])]);
        let text = lines_to_string(&todos_lines(&app, 80));
        assert!(text.contains("No todos yet. Press 'n' to create one!"));
    }

    #[test]
    fn test_no_project_selected() {
        let app = app_with_projects(&[]);
        assert_eq!(lines_to_string(&todos_lines(&app, 80)), "No project selected");
    }

    #[test]
    fn test_full_frame_todos_view() {
        let mut app = app_with_projects(&[("Work", &["Buy milk"])]);
        app.mode = Mode::Todos;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            frame.render_widget(ratatui::widgets::Paragraph::new(todos_lines(&app, 80)), area);
        });
        assert!(output.contains("Buy milk"), "{}", output);
        assert!(output.contains("esc (back)"), "{}", output);
    }
}
