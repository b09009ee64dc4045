//! One-shot output for `tippy-cli calc`.

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tippy::CalculationResult;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct TraceRow {
    #[tabled(rename = "Step")]
    step: String,
    #[tabled(rename = "Operation")]
    operation: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Renders the result as a table. The rating is drawn in its blended color
/// unless `plain` is set.
pub fn render_table(result: &CalculationResult, plain: bool) -> String {
    let label = result.tip_label.to_string();
    let label = if plain {
        label
    } else {
        let c = result.tip_label_color;
        label.truecolor(c.r, c.g, c.b).bold().to_string()
    };

    let party = result
        .party_size
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());

    let rows = vec![
        SummaryRow { item: "Bill".into(), value: tippy::engine::format_amount(result.bill_amount) },
        SummaryRow { item: "Tip %".into(), value: result.percent_text() },
        SummaryRow { item: "Tip".into(), value: result.tip_text() },
        SummaryRow { item: "Total".into(), value: result.total_text() },
        SummaryRow { item: "People".into(), value: party },
        SummaryRow { item: "Per Person".into(), value: result.per_person_text() },
        SummaryRow { item: "Rating".into(), value: label },
    ];

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Renders the calculation trace as a table.
pub fn render_trace(result: &CalculationResult) -> String {
    let rows: Vec<TraceRow> = result
        .calculation_trace
        .iter()
        .map(|step| TraceRow {
            step: step.description.clone(),
            operation: step.operation.clone(),
            amount: step.amount.map(|a| a.normalize().to_string()).unwrap_or_default(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Serializes the full result as pretty JSON. Amounts carry two decimals,
/// matching the table.
pub fn render_json(result: &CalculationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tippy::{engine, TipConfig, TipInputs};

    fn sample() -> CalculationResult {
        engine::calculate(&TipInputs::new("100", 15, "4"), &TipConfig::default())
    }

    #[test]
    fn test_plain_table_lists_figures() {
        let table = render_table(&sample(), true);
        assert!(table.contains("115.00"));
        assert!(table.contains("28.75"));
        assert!(table.contains("Good"));
        assert!(table.contains("15%"));
    }

    #[test]
    fn test_trace_table_has_steps() {
        let table = render_trace(&sample());
        assert!(table.contains("Bill Per Person"));
        assert!(table.contains("divide"));
    }

    #[test]
    fn test_json_output() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tip_label"], "Good");
        assert_eq!(value["party_size"], 4);
        assert_eq!(value["tip_label_color"], "#D92600");
    }

    #[test]
    fn test_json_amounts_match_table() {
        let result = engine::calculate(&TipInputs::new("100", 15, "3"), &TipConfig::default());
        let value: serde_json::Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();
        assert_eq!(value["bill_amount"], "100.00");
        assert_eq!(value["tip_amount"], "15.00");
        assert_eq!(value["total_amount"], "115.00");
        assert_eq!(value["bill_per_person"], "38.33");
        assert!(render_table(&result, true).contains("38.33"));
    }
}
