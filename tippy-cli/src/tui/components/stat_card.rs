//! Stat Card Widget
//!
//! A bordered card showing one output figure under its title.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::theme::theme;

pub struct StatCard<'a> {
    /// Card title shown in the border
    title: &'a str,
    /// Card value to display
    value: &'a str,
    /// Color for the value text
    value_color: Color,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            value_color: theme().text_primary,
        }
    }

    /// Set the value color.
    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    /// Render the stat card to the frame.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(t.subtitle())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_inactive())
            .style(t.bg());

        frame.render_widget(
            Paragraph::new(self.value)
                .block(block)
                .style(Style::default().fg(self.value_color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Right),
            area,
        );
    }
}
