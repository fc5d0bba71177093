use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::atomic::atomic_write;
use crate::model::{AppData, CHECKLIST_EXT, Project};
use crate::parse::{parse_project, serialize_project};

/// Name of the project created when the storage directory holds none
pub const DEFAULT_PROJECT_NAME: &str = "Personal";

/// Error type for checklist storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not create storage directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not delete {path}: {source}")]
    Delete {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A directory of checklist files, one per project
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the storage directory, creating it if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::CreateDir {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Store { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every project in the directory.
    ///
    /// Never fails: files that cannot be read are skipped (their names stay
    /// reserved so no new project overwrites them), and an empty result is
    /// replaced by a freshly saved default project.
    pub fn load(&self) -> AppData {
        let mut projects = Vec::new();
        let mut skipped = HashSet::new();

        for path in self.checklist_files() {
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match fs::read(&path) {
                Ok(bytes) => {
                    let source = String::from_utf8_lossy(&bytes);
                    if let Cow::Owned(_) = source {
                        tracing::warn!(path = %path.display(), "checklist is not valid UTF-8, invalid bytes replaced");
                    }
                    projects.push(parse_project(&source, filename));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable checklist");
                    skipped.insert(filename.to_string());
                }
            }
        }

        let mut data = AppData::new(projects);
        data.reserved_filenames = skipped;

        if data.projects.is_empty() {
            let idx = data.add_project(Project::new(DEFAULT_PROJECT_NAME));
            if let Err(e) = self.save_project(&data.projects[idx]) {
                tracing::warn!(error = %e, "could not persist default project");
            }
        }

        tracing::info!(
            dir = %self.dir.display(),
            projects = data.projects.len(),
            "loaded projects"
        );
        data
    }

    /// Checklist files in the directory, sorted by file name.
    /// An unreadable directory counts as empty.
    fn checklist_files(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %self.dir.display(), error = %e, "could not list storage directory");
                return Vec::new();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| !path.is_dir())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(CHECKLIST_EXT))
            .collect();
        files.sort();
        files
    }

    /// Write every project to its file. Stops at the first failure.
    pub fn save(&self, data: &AppData) -> Result<(), StoreError> {
        for project in &data.projects {
            self.save_project(project)?;
        }
        tracing::debug!(projects = data.projects.len(), "saved projects");
        Ok(())
    }

    /// Write a single project to its file
    pub fn save_project(&self, project: &Project) -> Result<(), StoreError> {
        let path = project.file_path(&self.dir);
        let content = serialize_project(project);
        atomic_write(&path, content.as_bytes()).map_err(|e| StoreError::Write { path, source: e })
    }

    /// Remove a project's backing file
    pub fn delete_project_file(&self, project: &Project) -> Result<(), StoreError> {
        let path = project.file_path(&self.dir);
        fs::remove_file(&path).map_err(|e| StoreError::Delete { path, source: e })?;
        tracing::info!(file = %project.filename, "deleted project file");
        Ok(())
    }
}
