//! Prelude module for Tippy
//!
//! Re-exports the types and functions most callers need.
//!
//! ```rust
//! use tippy::prelude::*;
//! ```

pub use crate::color::{interpolate_color, Rgba};
pub use crate::config::{TipConfig, TipConfigBuilder};
pub use crate::engine::{
    calculate, classify_tip, compute_per_person_bill, compute_tip, format_amount, format_percent,
    CalculationResult, PerPersonBill, TipAmounts, TipInputs, TipRating,
};
pub use crate::inputs::{parse_bill_amount, parse_decimal, parse_party_size};
pub use crate::session::{DisplayFields, TipSession};
pub use crate::types::{CalculationStep, TipError, TipLabel};
