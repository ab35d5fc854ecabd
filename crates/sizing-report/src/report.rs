//! Calculation reports.

use serde::{Deserialize, Serialize};
use sizing_core::{CalculationResult, TradeInput};

use crate::format::{
    format_currency, format_fixed, format_optional, format_percentage, format_shares,
    NOT_APPLICABLE,
};
use crate::ReportError;

/// An accepted calculation together with the input that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    /// Input as submitted
    pub input: TradeInput,
    /// Engine output
    pub result: CalculationResult,
}

impl CalculationReport {
    pub fn new(input: TradeInput, result: CalculationResult) -> Self {
        Self { input, result }
    }

    pub fn ticker(&self) -> &str {
        self.input.ticker().unwrap_or(NOT_APPLICABLE)
    }

    /// Labelled input values, in display order.
    pub fn input_lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![("Ticker Symbol", self.ticker().to_string())];

        match &self.input {
            TradeInput::TotalRisk(input) => {
                lines.push(("Account Value", dollars(input.account_value)));
                lines.push(("Total Account Risk", format!("{}%", input.risk_percentage)));
                lines.push(("Entry Price", dollars(input.entry_price)));
                lines.push(("Stop Loss", dollars(input.stop_loss)));
                lines.push(("Position Type", self.result.direction.to_string()));
                lines.push((
                    "Max Positions Allowed",
                    input
                        .max_positions
                        .map_or_else(|| NOT_APPLICABLE.to_string(), |n| n.to_string()),
                ));
            }
            TradeInput::DollarRisk(input) => {
                lines.push(("Dollar Risk", dollars(input.dollar_risk)));
                lines.push(("Entry Price", dollars(input.entry_price)));
                lines.push(("Stop Loss", dollars(input.stop_loss)));
                lines.push((
                    "Account Size",
                    format_optional(input.account_size.filter(|s| *s > 0.0), dollars),
                ));
                lines.push(("Position Type", self.result.direction.to_string()));
            }
            TradeInput::PositionPercent(input) => {
                lines.push(("Account Value", dollars(input.account_value)));
                lines.push(("Position Risk %", format!("{}%", input.position_percentage)));
                lines.push(("Entry Price", dollars(input.entry_price)));
                lines.push(("Stop Loss", dollars(input.stop_loss)));
                lines.push(("Position Type", self.result.direction.to_string()));
            }
        }

        lines
    }

    /// Labelled result values, in display order.
    pub fn result_lines(&self) -> Vec<(&'static str, String)> {
        let result = &self.result;
        let mut lines = vec![
            ("Max Shares", format_shares(result.max_shares)),
            ("Position Size", dollars(result.position_size)),
            ("Risk per Share", dollars(result.risk_per_share)),
        ];

        if let Some(pct) = result.percent_risked {
            lines.push(("Trade Risk", format!("{}%", format_percentage(pct))));
        }
        lines.push(("Dollars Risked", dollars(result.dollars_risked)));

        if let Some(allocation) = result.position_allocation {
            lines.push(("Position Allocation", dollars(allocation)));
        }

        if let Some(targets) = result.targets {
            lines.push(("1R", dollars(targets.one_r)));
            lines.push(("2R", dollars(targets.two_r)));
            lines.push(("3R", dollars(targets.three_r)));
        }

        if let TradeInput::TotalRisk(_) = self.input {
            lines.push((
                "Max Positions",
                result
                    .max_positions
                    .map_or_else(|| NOT_APPLICABLE.to_string(), |n| n.to_string()),
            ));
            lines.push((
                "Position Allotment",
                format_optional(result.position_allotment, |v| format!("${}", format_fixed(v, 4))),
            ));
        }

        if let TradeInput::DollarRisk(_) = self.input {
            lines.push((
                "Position Size as % of Account",
                format_optional(result.position_percent_of_account, |v| {
                    format!("{}%", format_percentage(v))
                }),
            ));
        }

        lines
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  {} CALCULATION\n", self.result.mode.to_string().to_uppercase()));
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("INPUT\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        push_lines(&mut s, &self.input_lines());
        s.push('\n');

        s.push_str("RESULT\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        push_lines(&mut s, &self.result_lines());
        s.push('\n');

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn dollars(value: f64) -> String {
    format!("${}", format_currency(value))
}

pub(crate) fn push_lines(s: &mut String, lines: &[(&'static str, String)]) {
    for (label, value) in lines {
        s.push_str(&format!("  {:<30} {}\n", format!("{}:", label), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizing_core::{DollarRiskInput, PositionPercentInput, TotalRiskInput};
    use sizing_engine::Calculator;

    fn report(input: TradeInput) -> CalculationReport {
        let result = Calculator::default().calculate(&input).unwrap();
        CalculationReport::new(input, result)
    }

    fn value<'a>(lines: &'a [(&'static str, String)], label: &str) -> &'a str {
        lines
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("missing line {label}"))
    }

    #[test]
    fn test_total_risk_unconstrained_lines() {
        let report = report(TotalRiskInput::new(10000.0, 1.0, 100.0, 90.0).into());
        let lines = report.result_lines();

        assert_eq!(value(&lines, "Max Shares"), "10.0000");
        assert_eq!(value(&lines, "Position Size"), "$1000.00");
        assert_eq!(value(&lines, "Risk per Share"), "$10.00");
        assert_eq!(value(&lines, "Dollars Risked"), "$100.00");
        assert_eq!(value(&lines, "1R"), "$110.00");
        assert_eq!(value(&lines, "2R"), "$120.00");
        assert_eq!(value(&lines, "3R"), "$130.00");
        assert_eq!(value(&lines, "Max Positions"), "N/A");
        assert_eq!(value(&lines, "Position Allotment"), "N/A");

        let inputs = report.input_lines();
        assert_eq!(value(&inputs, "Ticker Symbol"), "N/A");
        assert_eq!(value(&inputs, "Position Type"), "Long Position");
    }

    #[test]
    fn test_total_risk_constrained_lines() {
        let report = report(
            TotalRiskInput::new(10000.0, 1.0, 100.0, 90.0)
                .with_max_positions(5)
                .with_ticker("MSFT")
                .into(),
        );
        let lines = report.result_lines();

        assert_eq!(value(&lines, "Max Positions"), "5");
        assert_eq!(value(&lines, "Position Allotment"), "$2000.0000");
        assert_eq!(report.ticker(), "MSFT");
    }

    #[test]
    fn test_dollar_risk_lines() {
        let report = report(DollarRiskInput::new(100.0, 50.0, 45.0).into());
        let lines = report.result_lines();

        assert_eq!(value(&lines, "Max Shares"), "20.0000");
        assert_eq!(value(&lines, "Position Size"), "$1000.00");
        assert_eq!(value(&lines, "Dollars Risked"), "$100.00");
        assert_eq!(value(&lines, "Position Size as % of Account"), "N/A");
        assert_eq!(value(&report.input_lines(), "Account Size"), "N/A");
    }

    #[test]
    fn test_position_percent_lines() {
        let report = report(PositionPercentInput::new(10000.0, 10.0, 50.0, 45.0).into());
        let lines = report.result_lines();

        assert_eq!(value(&lines, "Max Shares"), "20.0000");
        assert_eq!(value(&lines, "Position Size"), "$1000.00");
        assert_eq!(value(&lines, "Dollars Risked"), "$100.00");
        assert_eq!(value(&lines, "Trade Risk"), "1.00%");
        assert!(lines.iter().all(|(label, _)| *label != "1R"));
    }

    #[test]
    fn test_summary_and_json() {
        let report = report(TotalRiskInput::new(10000.0, 1.0, 100.0, 90.0).into());

        let summary = report.summary();
        assert!(summary.contains("TOTAL RISK CALCULATION"));
        assert!(summary.contains("Max Shares:"));
        assert!(summary.contains("10.0000"));

        let json = report.to_json().unwrap();
        let parsed: CalculationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
