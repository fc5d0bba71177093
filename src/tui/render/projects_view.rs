use ratatui::text::{Line, Span};

use crate::model::Project;
use crate::tui::app::{App, ProjectRow};
use crate::util::unicode::{display_width, truncate_to_width};

use super::{checkbox, cursor_mark, footer_lines, title_lines};

const HINTS: &str = "tab (expand), n (new), d (delete), ? (help), q (quit)";
const EMPTY: &str = "No projects yet. Press 'n' to create one!";

/// Project list, with the todos of expanded projects indented below them
pub fn projects_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let mut lines = title_lines(app, "Donut - Projects");

    if app.data.projects.is_empty() {
        lines.push(Line::from(EMPTY));
    }

    let selected = app.selected_row();
    for row in app.visible_rows() {
        let is_selected = selected == Some(row);
        match row {
            ProjectRow::Project(i) => {
                let project = &app.data.projects[i];
                lines.push(project_line(app, project, is_selected, width));
            }
            ProjectRow::Todo { project, todo } => {
                let todo = &app.data.projects[project].todos[todo];
                let prefix = format!("  {} {} ", cursor_mark(is_selected), checkbox(todo.completed));
                let title = truncate_to_width(&todo.title, width.saturating_sub(display_width(&prefix)));
                lines.push(Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(title, app.theme.todo_title(todo.completed, is_selected)),
                ]));
            }
        }
    }

    lines.extend(footer_lines(app, HINTS));
    lines
}

fn project_line(app: &App, project: &Project, is_selected: bool, width: usize) -> Line<'static> {
    let icon = if app.is_expanded(project) { "\u{25BC}" } else { "\u{25B6}" };
    let prefix = format!("{} {} ", cursor_mark(is_selected), icon);
    let (done, total) = project.progress();
    let counts = format!(" ({}/{})", done, total);

    let name_budget = width.saturating_sub(display_width(&prefix) + display_width(&counts));
    let name = truncate_to_width(&project.name, name_budget);
    let name_style = if is_selected {
        app.theme.selected()
    } else {
        app.theme.plain()
    };

    Line::from(vec![
        Span::raw(prefix),
        Span::styled(name, name_style),
        Span::raw(counts),
    ])
}
