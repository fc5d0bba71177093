use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::model::{AppData, Project, Todo};
use crate::tui::app::{App, Effect};
use crate::tui::input::handle_key;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Join styled lines into plain text, one line per row
pub fn lines_to_string(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A project with fresh, incomplete todos
pub fn project(name: &str, titles: &[&str]) -> Project {
    let mut project = Project::new(name);
    project.todos = titles.iter().map(|t| Todo::new(*t)).collect();
    project
}

/// Build an App from `(project name, todo titles)` pairs
pub fn app_with_projects(specs: &[(&str, &[&str])]) -> App {
    let projects = specs
        .iter()
        .map(|(name, titles)| project(name, titles))
        .collect();
    App::new(AppData::new(projects))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn shift(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Feed keys one by one, collecting every effect they request
pub fn press(app: &mut App, keys: &[KeyEvent]) -> Vec<Effect> {
    keys.iter().flat_map(|k| handle_key(app, *k)).collect()
}

pub fn type_text(app: &mut App, text: &str) -> Vec<Effect> {
    let keys: Vec<KeyEvent> = text.chars().map(ch).collect();
    press(app, &keys)
}

/// Todo titles of the project at `idx`
pub fn titles(app: &App, idx: usize) -> Vec<&str> {
    app.data.projects[idx]
        .todos
        .iter()
        .map(|t| t.title.as_str())
        .collect()
}
