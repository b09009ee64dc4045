//! Application state for the calculator screen.

use tippy::{DisplayFields, TipConfig, TipSession};
use tui_input::Input;

/// Widget that currently receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Bill,
    TipSlider,
    People,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Bill => Focus::TipSlider,
            Focus::TipSlider => Focus::People,
            Focus::People => Focus::Bill,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Bill => Focus::People,
            Focus::TipSlider => Focus::Bill,
            Focus::People => Focus::TipSlider,
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the app should keep running
    pub running: bool,
    /// Input state and formatted outputs
    pub session: TipSession,
    /// Bill amount text field
    pub bill_input: Input,
    /// Number-of-people text field
    pub people_input: Input,
    pub focus: Focus,
    pub show_help: bool,
    /// Status message to display
    pub message: Option<String>,
}

impl App {
    pub fn new(config: TipConfig) -> Self {
        Self {
            running: true,
            session: TipSession::new(config),
            bill_input: Input::default(),
            people_input: Input::default(),
            focus: Focus::default(),
            show_help: false,
            message: None,
        }
    }

    pub fn display(&self) -> &DisplayFields {
        self.session.display()
    }

    pub fn slider_max(&self) -> u32 {
        self.session.config().slider_max
    }

    /// Forwards the bill field's text to the session.
    pub fn bill_edited(&mut self) {
        let text = self.bill_input.value().to_string();
        self.session.on_bill_changed(text);
    }

    /// Forwards the people field's text to the session.
    pub fn people_edited(&mut self) {
        let text = self.people_input.value().to_string();
        self.session.on_party_size_changed(text);
    }

    /// Moves the slider by `delta` steps, clamped to its range.
    pub fn nudge_tip(&mut self, delta: i64) {
        let target = i64::from(self.session.tip_percent()) + delta;
        self.session.on_tip_percent_changed(target);
    }

    pub fn set_tip(&mut self, percent: i64) {
        self.session.on_tip_percent_changed(percent);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Clears both text fields and resets the slider.
    pub fn reset(&mut self) {
        let config = self.session.config().clone();
        *self = App::new(config);
        self.message = Some("Cleared".to_string());
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Bill.next().next().next(), Focus::Bill);
        assert_eq!(Focus::Bill.previous(), Focus::People);
    }

    #[test]
    fn test_nudge_clamps() {
        let mut app = App::new(TipConfig::default());
        app.nudge_tip(-100);
        assert_eq!(app.session.tip_percent(), 0);
        app.nudge_tip(1000);
        assert_eq!(app.session.tip_percent(), 100);
    }

    #[test]
    fn test_reset_keeps_config() {
        let config = TipConfig::default().with_initial_tip_percent(18);
        let mut app = App::new(config);
        app.set_tip(40);
        app.reset();
        assert_eq!(app.session.tip_percent(), 18);
        assert!(app.running);
    }
}
