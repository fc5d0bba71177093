use std::collections::HashSet;

use super::project::{CHECKLIST_EXT, Project};

/// Every project of the session, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppData {
    pub projects: Vec<Project>,
    /// Index of the selected project. Not persisted; starts at 0 each session.
    pub current_project: usize,
    /// Checklist files found in the storage directory that back no loaded
    /// project. New projects never take these names.
    pub reserved_filenames: HashSet<String>,
}

impl AppData {
    pub fn new(projects: Vec<Project>) -> Self {
        AppData {
            projects,
            current_project: 0,
            reserved_filenames: HashSet::new(),
        }
    }

    pub fn current(&self) -> Option<&Project> {
        self.projects.get(self.current_project)
    }

    pub fn current_mut(&mut self) -> Option<&mut Project> {
        self.projects.get_mut(self.current_project)
    }

    /// Append a project, giving it a filename no other project uses.
    /// Returns the index of the new project.
    pub fn add_project(&mut self, mut project: Project) -> usize {
        project.filename = self.unique_filename(&project.filename);
        self.projects.push(project);
        self.projects.len() - 1
    }

    /// Remove the project at `index` and keep `current_project` in range:
    /// removing the last entry selects the new last one.
    pub fn remove_project(&mut self, index: usize) -> Option<Project> {
        if index >= self.projects.len() {
            return None;
        }
        let removed = self.projects.remove(index);
        self.clamp_current();
        Some(removed)
    }

    pub fn clamp_current(&mut self) {
        self.current_project = self
            .current_project
            .min(self.projects.len().saturating_sub(1));
    }

    fn unique_filename(&self, wanted: &str) -> String {
        let taken = |name: &str| {
            self.reserved_filenames.contains(name)
                || self.projects.iter().any(|p| p.filename == name)
        };
        if !taken(wanted) {
            return wanted.to_string();
        }
        let suffix = format!(".{}", CHECKLIST_EXT);
        let stem = wanted.strip_suffix(&suffix).unwrap_or(wanted);
        (2..)
            .map(|n| format!("{}-{}{}", stem, n, suffix))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| wanted.to_string())
    }
}
