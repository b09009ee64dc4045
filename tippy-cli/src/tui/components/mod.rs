//! Component widgets for the TUI.

pub mod slider;
pub mod stat_card;

pub use slider::TipSlider;
pub use stat_card::StatCard;
