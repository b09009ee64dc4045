//! # Calculation Engine
//!
//! Pure functions mapping the current screen inputs (bill amount, tip percent,
//! party size) to the figures shown to the user. Every call recomputes from
//! scratch; nothing is cached between calls.
//!
//! Amounts are kept unrounded internally and rounded half-up to two decimal
//! places only when formatted for display.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{interpolate_color, Rgba};
use crate::config::TipConfig;
use crate::inputs::{parse_bill_amount, parse_party_size};
use crate::types::{CalculationStep, TipLabel};

/// Immutable snapshot of the three user inputs, taken when an input changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipInputs {
    /// Raw bill amount text as typed.
    pub bill_text: String,
    /// Slider position, expected in `[0, slider_max]`.
    pub tip_percent: u32,
    /// Raw number-of-people text as typed.
    pub party_size_text: String,
}

impl TipInputs {
    pub fn new(bill_text: impl Into<String>, tip_percent: u32, party_size_text: impl Into<String>) -> Self {
        Self {
            bill_text: bill_text.into(),
            tip_percent,
            party_size_text: party_size_text.into(),
        }
    }

    /// The parsed bill amount; unparsable text reads as zero.
    pub fn bill_amount(&self) -> Decimal {
        parse_bill_amount(&self.bill_text)
    }
}

/// Tip and total for a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TipAmounts {
    pub tip_amount: Decimal,
    pub total_amount: Decimal,
}

impl TipAmounts {
    pub const ZERO: TipAmounts = TipAmounts {
        tip_amount: Decimal::ZERO,
        total_amount: Decimal::ZERO,
    };

    pub fn tip_text(&self) -> String {
        format_amount(self.tip_amount)
    }

    pub fn total_text(&self) -> String {
        format_amount(self.total_amount)
    }
}

/// Tip, total and the share of the total for each person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerPersonBill {
    #[serde(flatten)]
    pub amounts: TipAmounts,
    pub bill_per_person: Decimal,
    /// Number of people the total was split between, when a split applied.
    pub party_size: Option<u32>,
}

impl PerPersonBill {
    pub fn per_person_text(&self) -> String {
        format_amount(self.bill_per_person)
    }
}

/// Qualitative tip rating plus the position of the tip on the slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipRating {
    pub label: TipLabel,
    /// `tip_percent / slider_max`, clamped to `[0, 1]`.
    pub fraction: f64,
}

impl TipRating {
    /// Label color between the configured worst and best tip colors.
    pub fn color(&self, config: &TipConfig) -> Rgba {
        interpolate_color(self.fraction, config.worst_tip_color, config.best_tip_color)
    }
}

/// Computes the tip and the total for a bill.
///
/// A zero bill short-circuits to zero amounts.
pub fn compute_tip(bill_amount: Decimal, tip_percent: u32) -> TipAmounts {
    if bill_amount.is_zero() {
        return TipAmounts::ZERO;
    }

    let rate = Decimal::from(tip_percent) / dec!(100);
    let amounts = bill_amount
        .checked_mul(rate)
        .and_then(|tip| bill_amount.checked_add(tip).map(|total| (tip, total)));

    match amounts {
        Some((tip_amount, total_amount)) => {
            debug!(%bill_amount, tip_percent, %tip_amount, %total_amount, "Computed tip");
            TipAmounts { tip_amount, total_amount }
        }
        None => {
            warn!(%bill_amount, tip_percent, "Tip calculation overflowed, treating as 0");
            TipAmounts::ZERO
        }
    }
}

/// Computes tip, total and the per-person share.
///
/// The party size text is only consulted for a non-zero bill. Unparsable,
/// zero or negative party sizes leave the per-person share at zero while the
/// tip and total are still reported.
pub fn compute_per_person_bill(bill_amount: Decimal, tip_percent: u32, party_size_text: &str) -> PerPersonBill {
    if bill_amount.is_zero() {
        return PerPersonBill::default();
    }

    let amounts = compute_tip(bill_amount, tip_percent);

    let party_size = match parse_party_size(party_size_text) {
        Ok(n) if n > 0 => u32::try_from(n).ok(),
        Ok(n) => {
            debug!(party_size = n, "Non-positive party size, no split");
            None
        }
        Err(e) => {
            warn!(error = %e, "Invalid number of people");
            None
        }
    };

    let bill_per_person = party_size
        .map(|n| amounts.total_amount / Decimal::from(n))
        .unwrap_or(Decimal::ZERO);

    PerPersonBill {
        amounts,
        bill_per_person,
        party_size,
    }
}

/// Buckets a tip percent into its label and slider fraction.
pub fn classify_tip(tip_percent: u32, slider_max: u32) -> TipRating {
    let fraction = if slider_max == 0 {
        1.0
    } else {
        (f64::from(tip_percent) / f64::from(slider_max)).clamp(0.0, 1.0)
    };

    TipRating {
        label: TipLabel::from_percent(tip_percent),
        fraction,
    }
}

/// Renders an amount with exactly two decimal places, rounding half-up.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Renders the slider label, e.g. `15%`.
pub fn format_percent(tip_percent: u32) -> String {
    format!("{}%", tip_percent)
}

/// Amounts leave the engine as two-decimal strings, the same text the screen shows.
fn serialize_amount<S: serde::Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_amount(*amount))
}

/// Everything the screen shows, derived from one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    #[serde(serialize_with = "serialize_amount")]
    pub bill_amount: Decimal,
    pub tip_percent: u32,
    #[serde(serialize_with = "serialize_amount")]
    pub tip_amount: Decimal,
    #[serde(serialize_with = "serialize_amount")]
    pub total_amount: Decimal,
    #[serde(serialize_with = "serialize_amount")]
    pub bill_per_person: Decimal,
    pub party_size: Option<u32>,
    pub tip_label: TipLabel,
    pub tip_label_color: Rgba,
    /// Step-by-step trace of how the figures were derived.
    pub calculation_trace: Vec<CalculationStep>,
}

impl CalculationResult {
    pub fn tip_text(&self) -> String {
        format_amount(self.tip_amount)
    }

    pub fn total_text(&self) -> String {
        format_amount(self.total_amount)
    }

    pub fn per_person_text(&self) -> String {
        format_amount(self.bill_per_person)
    }

    pub fn percent_text(&self) -> String {
        format_percent(self.tip_percent)
    }
}

/// Runs every engine operation against one input snapshot.
pub fn calculate(inputs: &TipInputs, config: &TipConfig) -> CalculationResult {
    let tip_percent = inputs.tip_percent.min(config.slider_max);
    let bill_amount = inputs.bill_amount();

    let split = compute_per_person_bill(bill_amount, tip_percent, &inputs.party_size_text);
    let rating = classify_tip(tip_percent, config.slider_max);

    let mut trace = vec![CalculationStep::initial("Bill Amount", bill_amount)];
    if bill_amount.is_zero() {
        trace.push(CalculationStep::info("No bill entered - all amounts are 0"));
    } else {
        trace.push(CalculationStep::rate("Tip Rate", Decimal::from(tip_percent) / dec!(100)));
        trace.push(CalculationStep::add("Tip Amount", split.amounts.tip_amount));
        trace.push(CalculationStep::result("Total Amount", split.amounts.total_amount));
        match split.party_size {
            Some(n) => {
                trace.push(CalculationStep::divide("Split Between People", Decimal::from(n)));
                trace.push(CalculationStep::result("Bill Per Person", split.bill_per_person));
            }
            None => trace.push(CalculationStep::info("No valid party size - bill is not split")),
        }
    }
    trace.push(CalculationStep::info(format!("Tip rated {}", rating.label)));

    CalculationResult {
        bill_amount,
        tip_percent,
        tip_amount: split.amounts.tip_amount,
        total_amount: split.amounts.total_amount,
        bill_per_person: split.bill_per_person,
        party_size: split.party_size,
        tip_label: rating.label,
        tip_label_color: rating.color(config),
        calculation_trace: trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_tip_basic() {
        let result = compute_tip(dec!(100), 15);
        assert_eq!(result.tip_amount, dec!(15));
        assert_eq!(result.total_amount, dec!(115));
        assert_eq!(result.tip_text(), "15.00");
        assert_eq!(result.total_text(), "115.00");
    }

    #[test]
    fn test_compute_tip_zero_bill_short_circuits() {
        for pct in [0, 15, 100] {
            let result = compute_tip(Decimal::ZERO, pct);
            assert_eq!(result, TipAmounts::ZERO);
            assert_eq!(result.tip_text(), "0.00");
            assert_eq!(result.total_text(), "0.00");
        }
    }

    #[test]
    fn test_compute_tip_rounds_half_up() {
        // 10.05 * 15% = 1.5075
        let result = compute_tip(dec!(10.05), 15);
        assert_eq!(result.tip_text(), "1.51");
        assert_eq!(result.total_text(), "11.56");

        // 0.10 * 5% = 0.005
        let result = compute_tip(dec!(0.10), 5);
        assert_eq!(result.tip_text(), "0.01");
        assert_eq!(result.total_text(), "0.11");
    }

    #[test]
    fn test_compute_tip_overflow_does_not_panic() {
        let result = compute_tip(Decimal::MAX, 100);
        assert_eq!(result, TipAmounts::ZERO);
    }

    #[test]
    fn test_per_person_split() {
        let result = compute_per_person_bill(dec!(100), 15, "4");
        assert_eq!(result.amounts.tip_text(), "15.00");
        assert_eq!(result.amounts.total_text(), "115.00");
        assert_eq!(result.per_person_text(), "28.75");
        assert_eq!(result.party_size, Some(4));
    }

    #[test]
    fn test_per_person_uneven_split_rounds() {
        // 115 / 3 = 38.3333...
        let result = compute_per_person_bill(dec!(100), 15, "3");
        assert_eq!(result.per_person_text(), "38.33");
    }

    #[test]
    fn test_per_person_non_positive_party() {
        for text in ["0", "-2"] {
            let result = compute_per_person_bill(dec!(100), 15, text);
            assert_eq!(result.per_person_text(), "0.00");
            assert_eq!(result.party_size, None);
            assert_eq!(result.amounts.total_text(), "115.00");
        }
    }

    #[test]
    fn test_per_person_unparsable_party_still_reports_tip_and_total() {
        for text in ["abc", "", "2.5"] {
            let result = compute_per_person_bill(dec!(100), 15, text);
            assert_eq!(result.per_person_text(), "0.00");
            assert_eq!(result.amounts.tip_text(), "15.00");
            assert_eq!(result.amounts.total_text(), "115.00");
        }
    }

    #[test]
    fn test_per_person_zero_bill_ignores_party() {
        for text in ["4", "abc", "", "0"] {
            let result = compute_per_person_bill(Decimal::ZERO, 15, text);
            assert_eq!(result.per_person_text(), "0.00");
            assert_eq!(result.amounts, TipAmounts::ZERO);
        }
    }

    #[test]
    fn test_classify_fraction() {
        let rating = classify_tip(15, 100);
        assert_eq!(rating.label, TipLabel::Good);
        assert!((rating.fraction - 0.15).abs() < f64::EPSILON);

        assert_eq!(classify_tip(0, 100).fraction, 0.0);
        assert_eq!(classify_tip(100, 100).fraction, 1.0);
        assert_eq!(classify_tip(150, 100).fraction, 1.0);
    }

    #[test]
    fn test_classify_is_total() {
        for pct in 0..=100 {
            let label = classify_tip(pct, 100).label;
            let expected = match pct {
                0..=9 => TipLabel::Poor,
                10..=14 => TipLabel::Acceptable,
                15..=19 => TipLabel::Good,
                20..=24 => TipLabel::Great,
                _ => TipLabel::Amazing,
            };
            assert_eq!(label, expected, "percent {}", pct);
        }
    }

    #[test]
    fn test_rating_color_endpoints() {
        let config = TipConfig::default();
        assert_eq!(classify_tip(0, 100).color(&config), Rgba::RED);
        assert_eq!(classify_tip(100, 100).color(&config), Rgba::GREEN);
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_amount(dec!(28.75)), "28.75");
        assert_eq!(format_amount(dec!(3)), "3.00");
        assert_eq!(format_amount(dec!(2.345)), "2.35");
        assert_eq!(format_percent(15), "15%");
    }

    #[test]
    fn test_calculate_snapshot() {
        let config = TipConfig::default();
        let result = calculate(&TipInputs::new("50", 20, ""), &config);
        assert_eq!(result.tip_label, TipLabel::Great);
        assert_eq!(result.tip_text(), "10.00");
        assert_eq!(result.total_text(), "60.00");
        assert_eq!(result.per_person_text(), "0.00");
        assert_eq!(result.percent_text(), "20%");
        assert_eq!(result.tip_label_color, Rgba::rgb(204, 51, 0));
        assert!(result.calculation_trace.iter().any(|s| s.description == "Tip Amount"));
    }

    #[test]
    fn test_calculate_clamps_percent_to_slider() {
        let config = TipConfig::default().with_slider_max(30);
        let result = calculate(&TipInputs::new("100", 80, "2"), &config);
        assert_eq!(result.tip_percent, 30);
        assert_eq!(result.total_text(), "130.00");
        assert_eq!(result.per_person_text(), "65.00");
    }
}
