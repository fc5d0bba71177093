use ratatui::style::{Color, Modifier, Style};

/// Colors for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub text: Color,
    /// Titles, the selected row and the input buffer
    pub accent: Color,
    /// Completed todos
    pub done: Color,
    /// Key hints and secondary text
    pub muted: Color,
    /// Storage errors in the status row
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text: Color::Reset,
            accent: Color::Rgb(0xFF, 0x6B, 0x6B),
            done: Color::Rgb(0x51, 0xCF, 0x66),
            muted: Color::Rgb(0x88, 0x88, 0x88),
            error: Color::Rgb(0xFF, 0x44, 0x44),
        }
    }
}

impl Theme {
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn completed(&self) -> Style {
        Style::default()
            .fg(self.done)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn input(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn plain(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Style for a todo title: completed wins over selection
    pub fn todo_title(&self, completed: bool, selected: bool) -> Style {
        if completed {
            self.completed()
        } else if selected {
            self.selected()
        } else {
            self.plain()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_title_style() {
        let theme = Theme::default();
        assert_eq!(theme.todo_title(true, true), theme.completed());
        assert_eq!(theme.todo_title(false, true), theme.selected());
        assert_eq!(theme.todo_title(false, false), theme.plain());
    }

    #[test]
    fn test_completed_is_crossed_out() {
        let theme = Theme::default();
        assert!(
            theme
                .completed()
                .add_modifier
                .contains(Modifier::CROSSED_OUT)
        );
        assert_eq!(theme.completed().fg, Some(Color::Rgb(0x51, 0xCF, 0x66)));
    }
}
