use crate::tui::app::{App, Effect, Mode, Screen};

/// Any key leaves help
pub(super) fn handle_help(app: &mut App, back: Screen) -> Vec<Effect> {
    app.mode = match back {
        Screen::Projects => Mode::Projects,
        Screen::Todos => Mode::Todos,
    };
    Vec::new()
}
