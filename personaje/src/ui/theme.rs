//! Color theme and styling for the terminal wizard

use ratatui::style::{Color, Modifier, Style};

/// Wizard UI color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub title: Color,
    pub label: Color,
    pub value: Color,
    pub selected: Color,
    pub error: Color,
    pub help: Color,
    pub progress: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Cyan,
            title: Color::Yellow,
            label: Color::DarkGray,
            value: Color::White,
            selected: Color::Blue,
            error: Color::Red,
            help: Color::DarkGray,
            progress: Color::Green,
        }
    }
}

impl Theme {
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label)
    }

    pub fn value_style(&self) -> Style {
        Style::default().fg(self.value)
    }

    pub fn selected_style(&self) -> Style {
        Style::default().bg(self.selected).fg(Color::White)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn help_style(&self) -> Style {
        Style::default().fg(self.help)
    }
}
