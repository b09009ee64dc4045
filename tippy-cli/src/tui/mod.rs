//! # TUI Module
//!
//! Full-screen terminal user interface for the tip calculator, built with ratatui.

pub mod app;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use event::handle_events;
pub use ui::ui;
