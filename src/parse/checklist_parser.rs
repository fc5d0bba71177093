use crate::model::project::{Project, name_from_filename};
use crate::model::todo::Todo;

/// What a single line of a checklist file means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineToken<'a> {
    /// `# Project name`
    Title(&'a str),
    /// `- [ ] title` or `- [x] title`
    Item { completed: bool, title: &'a str },
    /// Blank lines and anything unrecognized
    Other,
}

/// Whitespace as understood by the checklist format (`\s`)
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C')
}

/// Match `\s+(.+)$` against `rest` and return the captured text.
///
/// The run of whitespace is greedy but must leave at least one character
/// for the capture, so a tail made only of whitespace captures its last
/// character.
fn spaced_tail(rest: &str) -> Option<&str> {
    let tail = rest.trim_start_matches(is_space);
    if tail.len() == rest.len() {
        return None;
    }
    if !tail.is_empty() {
        return Some(tail);
    }
    let (last_start, _) = rest.char_indices().last()?;
    // a single whitespace char can't cover both `\s+` and `.+`
    if last_start == 0 {
        return None;
    }
    Some(&rest[last_start..])
}

/// Classify one line (without its line terminator)
pub fn classify_line(line: &str) -> LineToken<'_> {
    if let Some(rest) = line.strip_prefix('#') {
        if let Some(name) = spaced_tail(rest) {
            return LineToken::Title(name);
        }
        return LineToken::Other;
    }

    if let Some(rest) = line.strip_prefix('-') {
        let after_dash = rest.trim_start_matches(is_space);
        if after_dash.len() == rest.len() {
            return LineToken::Other;
        }
        let (completed, after_box) = if let Some(after_box) = after_dash.strip_prefix("[ ]") {
            (false, after_box)
        } else if let Some(after_box) = after_dash.strip_prefix("[x]") {
            (true, after_box)
        } else {
            return LineToken::Other;
        };
        if let Some(title) = spaced_tail(after_box) {
            return LineToken::Item { completed, title };
        }
    }

    LineToken::Other
}

/// Parse a checklist file's contents into a project.
///
/// `filename` becomes the project's backing file and supplies the display
/// name when the file has no title line. When several title lines appear,
/// the last one wins.
pub fn parse_project(source: &str, filename: &str) -> Project {
    let mut name: Option<&str> = None;
    let mut todos = Vec::new();

    for (idx, line) in source.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match classify_line(line) {
            LineToken::Title(title) => name = Some(title),
            LineToken::Item { completed, title } => todos.push(Todo {
                title: title.to_string(),
                completed,
                line_number: Some(idx + 1),
            }),
            LineToken::Other => {}
        }
    }

    Project {
        name: name
            .map(str::to_string)
            .unwrap_or_else(|| name_from_filename(filename)),
        filename: filename.to_string(),
        todos,
    }
}
