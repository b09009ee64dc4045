//! Screen state and the three input triggers.
//!
//! `TipSession` owns the raw input values a UI layer edits and the strings it
//! displays. Each trigger recomputes only the outputs that trigger is wired to:
//!
//! | trigger                  | updates                                              |
//! |--------------------------|------------------------------------------------------|
//! | `on_tip_percent_changed` | percent label, tip, total, rating label and color, per person |
//! | `on_bill_changed`        | tip, total                                           |
//! | `on_party_size_changed`  | tip, total, per person                               |

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::color::Rgba;
use crate::config::TipConfig;
use crate::engine::{self, CalculationResult, TipInputs};
use crate::types::TipLabel;

/// Formatted values currently shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    pub tip_percent: String,
    pub tip_amount: String,
    pub total_amount: String,
    pub bill_per_person: String,
    pub tip_label: TipLabel,
    pub tip_label_color: Rgba,
}

type Listener = Box<dyn FnMut(&DisplayFields)>;

pub struct TipSession {
    config: TipConfig,
    bill_text: String,
    tip_percent: u32,
    party_size_text: String,
    display: DisplayFields,
    listeners: Vec<Listener>,
}

impl fmt::Debug for TipSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TipSession")
            .field("config", &self.config)
            .field("bill_text", &self.bill_text)
            .field("tip_percent", &self.tip_percent)
            .field("party_size_text", &self.party_size_text)
            .field("display", &self.display)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for TipSession {
    fn default() -> Self {
        Self::new(TipConfig::default())
    }
}

impl TipSession {
    /// Opens the screen with empty text fields and the slider at the
    /// configured initial tip percent.
    pub fn new(config: TipConfig) -> Self {
        let tip_percent = config.initial_tip_percent.min(config.slider_max);
        let rating = engine::classify_tip(tip_percent, config.slider_max);
        let zero = engine::format_amount(rust_decimal::Decimal::ZERO);

        let display = DisplayFields {
            tip_percent: engine::format_percent(tip_percent),
            tip_amount: zero.clone(),
            total_amount: zero.clone(),
            bill_per_person: zero,
            tip_label: rating.label,
            tip_label_color: rating.color(&config),
        };

        Self {
            config,
            bill_text: String::new(),
            tip_percent,
            party_size_text: String::new(),
            display,
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &TipConfig {
        &self.config
    }

    pub fn display(&self) -> &DisplayFields {
        &self.display
    }

    pub fn tip_percent(&self) -> u32 {
        self.tip_percent
    }

    pub fn bill_text(&self) -> &str {
        &self.bill_text
    }

    pub fn party_size_text(&self) -> &str {
        &self.party_size_text
    }

    /// Snapshot of the current inputs.
    pub fn inputs(&self) -> TipInputs {
        TipInputs::new(self.bill_text.clone(), self.tip_percent, self.party_size_text.clone())
    }

    /// Full recomputation of every output from the current inputs.
    pub fn result(&self) -> CalculationResult {
        engine::calculate(&self.inputs(), &self.config)
    }

    /// Registers a callback invoked with the display after every trigger.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&DisplayFields) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Slider moved. Out-of-range positions are clamped to `[0, slider_max]`.
    pub fn on_tip_percent_changed(&mut self, tip_percent: i64) -> &DisplayFields {
        self.tip_percent = self.config.clamp_percent(tip_percent);
        info!(progress = self.tip_percent, "on progress changed");

        self.display.tip_percent = engine::format_percent(self.tip_percent);
        self.refresh_tip();
        self.refresh_rating();
        self.refresh_per_person();
        self.notify()
    }

    /// Bill amount text edited. The per-person share is left as it was.
    pub fn on_bill_changed(&mut self, text: impl Into<String>) -> &DisplayFields {
        self.bill_text = text.into();
        info!(bill = %self.bill_text, "after text changed");

        self.refresh_tip();
        self.notify()
    }

    /// Number-of-people text edited.
    pub fn on_party_size_changed(&mut self, text: impl Into<String>) -> &DisplayFields {
        self.party_size_text = text.into();
        debug!(party_size = %self.party_size_text, "party size changed");

        self.refresh_per_person();
        self.notify()
    }

    fn refresh_tip(&mut self) {
        let amounts = engine::compute_tip(self.inputs().bill_amount(), self.tip_percent);
        self.display.tip_amount = amounts.tip_text();
        self.display.total_amount = amounts.total_text();
    }

    fn refresh_rating(&mut self) {
        let rating = engine::classify_tip(self.tip_percent, self.config.slider_max);
        self.display.tip_label = rating.label;
        self.display.tip_label_color = rating.color(&self.config);
    }

    fn refresh_per_person(&mut self) {
        let split = engine::compute_per_person_bill(
            self.inputs().bill_amount(),
            self.tip_percent,
            &self.party_size_text,
        );
        self.display.tip_amount = split.amounts.tip_text();
        self.display.total_amount = split.amounts.total_text();
        self.display.bill_per_person = split.per_person_text();
    }

    fn notify(&mut self) -> &DisplayFields {
        for listener in self.listeners.iter_mut() {
            listener(&self.display);
        }
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state() {
        let session = TipSession::default();
        let display = session.display();
        assert_eq!(display.tip_percent, "15%");
        assert_eq!(display.tip_label, TipLabel::Good);
        assert_eq!(display.tip_amount, "0.00");
        assert_eq!(display.total_amount, "0.00");
        assert_eq!(display.bill_per_person, "0.00");
    }

    #[test]
    fn test_bill_then_slider() {
        let mut session = TipSession::default();
        session.on_bill_changed("50");
        let display = session.on_tip_percent_changed(20);
        assert_eq!(display.tip_label, TipLabel::Great);
        assert_eq!(display.tip_amount, "10.00");
        assert_eq!(display.total_amount, "60.00");
        assert_eq!(display.tip_percent, "20%");
    }

    #[test]
    fn test_bill_change_leaves_per_person_alone() {
        let mut session = TipSession::default();
        session.on_bill_changed("100");
        session.on_party_size_changed("4");
        assert_eq!(session.display().bill_per_person, "28.75");

        let display = session.on_bill_changed("200");
        assert_eq!(display.total_amount, "230.00");
        assert_eq!(display.bill_per_person, "28.75");

        let display = session.on_party_size_changed("4");
        assert_eq!(display.bill_per_person, "57.50");
    }

    #[test]
    fn test_slider_refreshes_per_person() {
        let mut session = TipSession::default();
        session.on_bill_changed("100");
        session.on_party_size_changed("2");
        let display = session.on_tip_percent_changed(25);
        assert_eq!(display.bill_per_person, "62.50");
        assert_eq!(display.tip_label, TipLabel::Amazing);
    }

    #[test]
    fn test_slider_clamps_out_of_range() {
        let mut session = TipSession::default();
        assert_eq!(session.on_tip_percent_changed(-10).tip_percent, "0%");
        assert_eq!(session.on_tip_percent_changed(500).tip_percent, "100%");
        assert_eq!(session.display().tip_label_color, Rgba::GREEN);
    }

    #[test]
    fn test_listeners_receive_each_update() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut session = TipSession::default();
        session.subscribe(move |d: &DisplayFields| sink.borrow_mut().push(d.total_amount.clone()));

        session.on_bill_changed("10");
        session.on_tip_percent_changed(10);
        session.on_party_size_changed("x");

        assert_eq!(*seen.borrow(), vec!["11.50", "11.00", "11.00"]);
    }

    #[test]
    fn test_result_matches_inputs() {
        let mut session = TipSession::default();
        session.on_bill_changed("100");
        session.on_party_size_changed("4");
        let result = session.result();
        assert_eq!(result.per_person_text(), "28.75");
        assert_eq!(session.inputs(), TipInputs::new("100", 15, "4"));
    }
}
