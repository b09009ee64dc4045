//! Tip Slider Widget
//!
//! A horizontal track with a knob at the current tip percent.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::theme::{icons, theme};

pub struct TipSlider<'a> {
    value: u32,
    max: u32,
    /// Percent label drawn after the track, e.g. "15%"
    label: &'a str,
    track_color: Color,
    focused: bool,
}

impl<'a> TipSlider<'a> {
    pub fn new(value: u32, max: u32, label: &'a str) -> Self {
        Self {
            value,
            max,
            label,
            track_color: theme().amber,
            focused: false,
        }
    }

    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Builds the track as `filled` cells, a knob and the remaining empty cells.
    pub fn track(value: u32, max: u32, width: u16) -> String {
        if width == 0 {
            return String::new();
        }
        let span = u64::from(width - 1);
        let filled = if max == 0 {
            span
        } else {
            let (value, max) = (u64::from(value.min(max)), u64::from(max));
            (value * span + max / 2) / max
        };
        let empty = span - filled;

        format!(
            "{}{}{}",
            icons::SLIDER_FULL.repeat(filled as usize),
            icons::SLIDER_KNOB,
            icons::SLIDER_EMPTY.repeat(empty as usize),
        )
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let block = Block::default()
            .title(" Tip ")
            .title_style(t.subtitle())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused { t.border_active() } else { t.border_inactive() })
            .style(t.bg());

        let inner = block.inner(area);
        // Room for " 100%"
        let label_width = 5u16;
        let track_width = inner.width.saturating_sub(label_width + 1);

        let line = Line::from(vec![
            Span::styled(Self::track(self.value, self.max, track_width), Style::default().fg(self.track_color)),
            Span::raw(" "),
            Span::styled(format!("{:>4}", self.label), t.value()),
        ]);

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_positions() {
        assert_eq!(TipSlider::track(0, 100, 11), format!("◆{}", "░".repeat(10)));
        assert_eq!(TipSlider::track(100, 100, 11), format!("{}◆", "█".repeat(10)));
        assert_eq!(TipSlider::track(50, 100, 11), format!("{}◆{}", "█".repeat(5), "░".repeat(5)));
    }

    #[test]
    fn test_track_degenerate_sizes() {
        assert_eq!(TipSlider::track(10, 100, 0), "");
        assert_eq!(TipSlider::track(10, 100, 1), "◆");
        assert_eq!(TipSlider::track(500, 100, 3).chars().count(), 3);
    }
}
