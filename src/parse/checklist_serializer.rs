use crate::model::project::Project;

/// Serialize a project to checklist markdown.
///
/// Only the title and the todos are written, so stray lines from a
/// hand-edited file do not survive a save.
pub fn serialize_project(project: &Project) -> String {
    let mut out = format!("# {}\n\n", project.name);
    for todo in &project.todos {
        out.push_str(&format!("- [{}] {}\n", todo.checkbox_char(), todo.title));
    }
    out
}
