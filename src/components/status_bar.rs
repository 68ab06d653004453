use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::action::Action;

/// Two-line footer: crate name with key hints, and the latest message.
#[derive(Default)]
pub struct StatusBar {
    message: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Component for StatusBar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SystemMessage(message) => self.message = Some(message),
            Action::Error(message) => self.message = Some(format!("Error: {message}")),
            Action::Unselect => self.message = None,
            _ => {}
        };

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);
        f.render_widget(Clear, layout[1]);
        f.render_widget(Clear, layout[2]);

        let title = Span::styled(
            format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray).italic(),
        );
        let hints = Span::raw("  j/k scroll · g/G jump · esc clear · q quit");
        let status_line =
            Paragraph::new(Line::from(vec![title, hints])).style(Style::default().bg(Color::Black));
        f.render_widget(status_line, layout[1]);

        let message_line = Paragraph::new(self.message.clone().unwrap_or_default());
        f.render_widget(message_line, layout[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_message_is_kept() -> Result<()> {
        let mut bar = StatusBar::new();
        assert_eq!(bar.message(), None);

        bar.update(Action::SystemMessage("Section 1: one".to_string()))?;
        assert_eq!(bar.message(), Some("Section 1: one"));

        Ok(())
    }

    #[test]
    fn test_errors_are_prefixed() -> Result<()> {
        let mut bar = StatusBar::new();
        bar.update(Action::Error("boom".to_string()))?;
        assert_eq!(bar.message(), Some("Error: boom"));
        Ok(())
    }

    #[test]
    fn test_unselect_clears_message() -> Result<()> {
        let mut bar = StatusBar::new();
        bar.update(Action::SystemMessage("Section 1: one".to_string()))?;
        bar.update(Action::Unselect)?;
        assert_eq!(bar.message(), None);
        Ok(())
    }
}
