//! # Tippy
//!
//! A small tip calculation engine: tip and total for a bill, an even split
//! between a party, a qualitative rating of the tip and a color for that
//! rating.
//!
//! ```rust
//! use tippy::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let split = compute_per_person_bill(dec!(100), 15, "4");
//! assert_eq!(split.per_person_text(), "28.75");
//! ```

pub mod color;
pub mod config;
pub mod engine;
pub mod inputs;
pub mod prelude;
pub mod session;
pub mod types;

pub use color::Rgba;
pub use config::TipConfig;
pub use engine::{CalculationResult, TipInputs};
pub use session::{DisplayFields, TipSession};
pub use types::{TipError, TipLabel};
