use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Qualitative rating of the chosen tip percentage.
///
/// Buckets are inclusive integer ranges checked in ascending order:
/// - **Poor**: 0–9
/// - **Acceptable**: 10–14
/// - **Good**: 15–19
/// - **Great**: 20–24
/// - **Amazing**: 25 and above
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter, EnumString,
)]
pub enum TipLabel {
    Poor,
    Acceptable,
    Good,
    Great,
    Amazing,
}

impl TipLabel {
    /// Maps a tip percentage to its bucket. Anything from 25 upwards is `Amazing`.
    pub fn from_percent(tip_percent: u32) -> Self {
        match tip_percent {
            0..=9 => TipLabel::Poor,
            10..=14 => TipLabel::Acceptable,
            15..=19 => TipLabel::Good,
            20..=24 => TipLabel::Great,
            _ => TipLabel::Amazing,
        }
    }
}

/// A single step in a tip calculation.
///
/// The trace is informational only; it lets the CLI explain how the
/// displayed figures were derived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationStep {
    /// Human-readable description of what this step does.
    pub description: String,
    /// The value at this step (if applicable).
    pub amount: Option<Decimal>,
    /// The operation type: "initial", "rate", "add", "divide", "result", "info".
    pub operation: String,
}

impl CalculationStep {
    pub fn initial(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "initial".to_string(),
        }
    }

    pub fn rate(description: impl Into<String>, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(rate),
            operation: "rate".to_string(),
        }
    }

    pub fn add(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "add".to_string(),
        }
    }

    pub fn divide(description: impl Into<String>, divisor: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(divisor),
            operation: "divide".to_string(),
        }
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "result".to_string(),
        }
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            operation: "info".to_string(),
        }
    }
}

/// Errors raised by the strict parsing and configuration APIs.
///
/// The engine entry points that consume raw user text never surface these;
/// they recover locally with a default value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TipError {
    #[error("Invalid input [{}]: {msg}", context_label(.context))]
    InvalidInput { msg: String, context: Option<String> },

    #[error("Numeric parse failure [{}]: could not read {input:?} as a number", context_label(.context))]
    NumericParse { input: String, context: Option<String> },

    #[error("Configuration error [{}]: {msg}", context_label(.context))]
    ConfigurationError { msg: String, context: Option<String> },
}

fn context_label(context: &Option<String>) -> &str {
    context.as_deref().unwrap_or("Unknown")
}

impl TipError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        TipError::InvalidInput { msg: msg.into(), context: None }
    }

    pub fn numeric_parse(input: impl Into<String>) -> Self {
        TipError::NumericParse { input: input.into(), context: None }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        TipError::ConfigurationError { msg: msg.into(), context: None }
    }

    /// Attaches the name of the field or component that produced the error.
    pub fn with_source(self, source: impl Into<String>) -> Self {
        let context = Some(source.into());
        match self {
            TipError::InvalidInput { msg, .. } => TipError::InvalidInput { msg, context },
            TipError::NumericParse { input, .. } => TipError::NumericParse { input, context },
            TipError::ConfigurationError { msg, .. } => TipError::ConfigurationError { msg, context },
        }
    }
}
