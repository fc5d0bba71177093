use crate::io::Store;

use super::app::{App, Effect};

/// Run the disk side of a key press.
///
/// Failures do not roll back the in-memory change: they are logged and
/// shown in the status row until the next key press.
pub fn apply(app: &mut App, store: &Store, effects: Vec<Effect>) {
    for effect in effects {
        let result = match &effect {
            Effect::Save => store.save(&app.data),
            Effect::DeleteProjectFile(project) => store.delete_project_file(project),
        };
        if let Err(e) = result {
            tracing::error!(error = %e, ?effect, "storage operation failed");
            app.status_message = Some(e.to_string());
        }
    }
}
