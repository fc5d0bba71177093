/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Display text (never empty for todos created through the UI)
    pub title: String,
    /// Checkbox state: `[x]` when true, `[ ]` otherwise
    pub completed: bool,
    /// 1-based line in the file this todo was parsed from.
    /// `None` for todos created during the current session.
    pub line_number: Option<usize>,
}

impl Todo {
    /// A fresh, incomplete todo that has not been written to disk yet
    pub fn new(title: impl Into<String>) -> Self {
        Todo {
            title: title.into(),
            completed: false,
            line_number: None,
        }
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
