use std::collections::HashSet;
use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::Store;
use crate::model::{AppData, Project};

use super::effects;
use super::input;
use super::render;
use super::theme::Theme;

/// The two browsing screens. Help returns to whichever one opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Projects,
    Todos,
}

/// Current view mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Project list, with optional expanded todos under each project
    Projects,
    /// Todos of the current project
    Todos,
    /// Typing a new project name
    CreateProject,
    /// Typing a new todo title
    CreateTodo,
    /// Editing the title of the todo under the cursor
    EditTodo,
    /// Key binding reference
    Help { back: Screen },
    /// Waiting for y/n before deleting the current project
    ConfirmDeleteProject,
}

impl Mode {
    /// Text-entry modes consume printable keys as input
    pub fn is_text_entry(self) -> bool {
        matches!(self, Mode::CreateProject | Mode::CreateTodo | Mode::EditTodo)
    }
}

/// Side effect requested by a key handler, run by [`effects::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the whole collection to disk
    Save,
    /// Remove a deleted project's backing file
    DeleteProjectFile(Project),
}

/// A visible row of the project list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectRow {
    Project(usize),
    /// A todo listed under its expanded project
    Todo { project: usize, todo: usize },
}

/// Main application state
pub struct App {
    pub data: AppData,
    pub mode: Mode,
    /// Filenames of projects expanded in the project list
    pub expanded: HashSet<String>,
    /// Selected todo row under the current (expanded) project in the
    /// project list. `None` means the project row itself is selected.
    pub tree_todo: Option<usize>,
    /// Cursor in the todos view
    pub todo_cursor: usize,
    /// Text-entry buffer
    pub input: String,
    /// Transient message shown until the next key press
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(data: AppData) -> Self {
        App {
            data,
            mode: Mode::Projects,
            expanded: HashSet::new(),
            tree_todo: None,
            todo_cursor: 0,
            input: String::new(),
            status_message: None,
            should_quit: false,
            theme: Theme::default(),
        }
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.data.current()
    }

    pub fn current_project_mut(&mut self) -> Option<&mut Project> {
        self.data.current_mut()
    }

    pub fn is_expanded(&self, project: &Project) -> bool {
        self.expanded.contains(&project.filename)
    }

    /// Rows of the project list in display order
    pub fn visible_rows(&self) -> Vec<ProjectRow> {
        let mut rows = Vec::new();
        for (i, project) in self.data.projects.iter().enumerate() {
            rows.push(ProjectRow::Project(i));
            if self.is_expanded(project) {
                rows.extend((0..project.todos.len()).map(|todo| ProjectRow::Todo { project: i, todo }));
            }
        }
        rows
    }

    /// The highlighted row of the project list, if there are any projects
    pub fn selected_row(&self) -> Option<ProjectRow> {
        let project = self.current_project()?;
        let idx = self.data.current_project;
        match self.tree_todo {
            Some(todo) if self.is_expanded(project) && todo < project.todos.len() => {
                Some(ProjectRow::Todo { project: idx, todo })
            }
            _ => Some(ProjectRow::Project(idx)),
        }
    }

    pub fn select_row(&mut self, row: ProjectRow) {
        match row {
            ProjectRow::Project(project) => {
                self.data.current_project = project;
                self.tree_todo = None;
            }
            ProjectRow::Todo { project, todo } => {
                self.data.current_project = project;
                self.tree_todo = Some(todo);
            }
        }
    }

    /// Pull every cursor back into range after the collection shrank
    pub fn clamp_cursors(&mut self) {
        self.data.clamp_current();
        let todo_count = self.current_project().map_or(0, |p| p.todos.len());
        self.todo_cursor = self.todo_cursor.min(todo_count.saturating_sub(1));

        let expanded = self.current_project().is_some_and(|p| self.is_expanded(p));
        self.tree_todo = match self.tree_todo {
            Some(_) if !expanded || todo_count == 0 => None,
            Some(todo) => Some(todo.min(todo_count - 1)),
            None => None,
        };
    }

    /// Leave text entry and return to a browsing screen
    pub fn finish_input(&mut self, next: Mode) {
        self.input.clear();
        self.mode = next;
    }
}

/// Run the TUI application against a storage directory
pub fn run(store: Store) -> Result<(), Box<dyn std::error::Error>> {
    let data = store.load();
    let mut app = App::new(data);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, &store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &Store,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Blocks until the next terminal event; resizes just redraw
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let effects = input::handle_key(app, key);
            effects::apply(app, store, effects);
        }

        if app.should_quit {
            tracing::info!("quit requested");
            break;
        }
    }
    Ok(())
}
