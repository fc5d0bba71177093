use std::path::{Path, PathBuf};

use super::todo::Todo;

/// Extension of every checklist file in the storage directory
pub const CHECKLIST_EXT: &str = "md";

/// A named checklist backed by one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Display name (from the `# Title` line)
    pub name: String,
    /// File name inside the storage directory, e.g. `my-cool-project.md`.
    /// Derived once when the project is created and never regenerated.
    pub filename: String,
    /// Todos in file order
    pub todos: Vec<Todo>,
}

impl Project {
    /// Create an empty project, deriving its filename from `name`
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let filename = derive_filename(&name);
        Project {
            name,
            filename,
            todos: Vec::new(),
        }
    }

    /// Full path of the backing file under `dir`
    pub fn file_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.filename)
    }

    /// `(completed, total)` todo counts
    pub fn progress(&self) -> (usize, usize) {
        let done = self.todos.iter().filter(|t| t.completed).count();
        (done, self.todos.len())
    }
}

/// Turn a display name into a checklist filename.
///
/// Lowercases, maps spaces and underscores to hyphens, then keeps only ASCII
/// letters, digits and hyphens. A name with nothing left falls back to
/// `project-<unix seconds>`.
pub fn derive_filename(name: &str) -> String {
    let stem: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    let stem = if stem.is_empty() {
        format!("project-{}", chrono::Utc::now().timestamp())
    } else {
        stem
    };

    format!("{}.{}", stem, CHECKLIST_EXT)
}

/// Display name for a file that has no `# Title` line:
/// `weekly-chores.md` becomes `Weekly Chores`, `foo.bar.md` becomes `Foo.Bar`.
///
/// Hyphens become spaces, then every letter that follows a word separator
/// (or starts the name) is upper-cased. The rest is left untouched.
pub fn name_from_filename(filename: &str) -> String {
    let stem = filename
        .strip_suffix(&format!(".{}", CHECKLIST_EXT))
        .unwrap_or(filename);

    let mut out = String::with_capacity(stem.len());
    let mut prev_separator = true;
    for c in stem.chars().map(|c| if c == '-' { ' ' } else { c }) {
        if prev_separator {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_separator = is_word_separator(c);
    }
    out
}

/// ASCII punctuation and whitespace separate words; letters, digits and
/// `_` do not. Outside ASCII only whitespace separates.
fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}
