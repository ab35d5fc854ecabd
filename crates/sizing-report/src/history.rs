//! In-memory history of calculations for the current session.
//!
//! Nothing is persisted: the history lives as long as the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::format::{format_currency, format_shares};
use crate::report::{push_lines, CalculationReport};
use crate::ReportError;

/// One accepted calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the calculation ran
    pub timestamp: DateTime<Utc>,
    /// What was calculated
    pub report: CalculationReport,
}

impl HistoryEntry {
    pub fn new(timestamp: DateTime<Utc>, report: CalculationReport) -> Self {
        Self { timestamp, report }
    }

    /// Render as a labelled text block.
    pub fn render(&self) -> String {
        let mut s = String::new();
        push_lines(&mut s, &self.report.input_lines());
        s.push_str("  Result:\n");
        push_lines(&mut s, &self.report.result_lines());
        push_lines(
            &mut s,
            &[("Timestamp", self.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string())],
        );
        s
    }
}

/// Flat row for CSV export.
#[derive(Debug, Serialize)]
struct HistoryRow<'a> {
    timestamp: String,
    mode: String,
    ticker: &'a str,
    direction: String,
    max_shares: String,
    position_size: String,
    risk_per_share: String,
    dollars_risked: String,
}

/// Session history, newest entry first.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    entries: VecDeque<HistoryEntry>,
    max_entries: Option<usize>,
}

impl SessionHistory {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `max` entries, evicting the oldest.
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self.entries.truncate(max);
        self
    }

    /// Add an entry at the front.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if let Some(max) = self.max_entries {
            self.entries.truncate(max);
        }
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Render every entry, newest first.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Export the headline figures to CSV.
    pub fn to_csv(&self) -> Result<String, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for entry in &self.entries {
            let result = &entry.report.result;
            writer.serialize(HistoryRow {
                timestamp: entry.timestamp.to_rfc3339(),
                mode: result.mode.to_string(),
                ticker: entry.report.ticker(),
                direction: result.direction.to_string(),
                max_shares: format_shares(result.max_shares),
                position_size: format_currency(result.position_size),
                risk_per_share: format_currency(result.risk_per_share),
                dollars_risked: format_currency(result.dollars_risked),
            })?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sizing_core::{DollarRiskInput, TotalRiskInput, TradeInput};
    use sizing_engine::Calculator;

    fn entry(input: TradeInput, second: u32) -> HistoryEntry {
        let result = Calculator::default().calculate(&input).unwrap();
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, second).unwrap();
        HistoryEntry::new(timestamp, CalculationReport::new(input, result))
    }

    #[test]
    fn test_newest_first() {
        let mut history = SessionHistory::new();
        history.push(entry(TotalRiskInput::new(10000.0, 1.0, 100.0, 90.0).into(), 0));
        history.push(entry(DollarRiskInput::new(100.0, 50.0, 45.0).into(), 1));

        assert_eq!(history.len(), 2);
        let latest = history.latest().unwrap();
        assert_eq!(latest.timestamp.format("%S").to_string(), "01");

        let modes: Vec<_> = history.iter().map(|e| e.report.result.mode.to_string()).collect();
        assert_eq!(modes, vec!["Dollar Risk", "Total Risk"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = SessionHistory::new().with_max_entries(2);
        for second in 0..3 {
            history.push(entry(DollarRiskInput::new(100.0, 50.0, 45.0).into(), second));
        }

        assert_eq!(history.len(), 2);
        let seconds: Vec<_> = history
            .iter()
            .map(|e| e.timestamp.format("%S").to_string())
            .collect();
        assert_eq!(seconds, vec!["02", "01"]);

        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_render_entry() {
        let entry = entry(
            TotalRiskInput::new(10000.0, 1.0, 100.0, 90.0)
                .with_ticker("AAPL")
                .into(),
            0,
        );
        let text = entry.render();

        assert!(text.contains("Ticker Symbol:"));
        assert!(text.contains("AAPL"));
        assert!(text.contains("Result:"));
        assert!(text.contains("$130.00"));
        assert!(text.contains("2024-03-01 14:30:00 UTC"));
    }

    #[test]
    fn test_csv_export() {
        let mut history = SessionHistory::new();
        history.push(entry(
            DollarRiskInput::new(100.0, 50.0, 45.0).with_ticker("SPY").into(),
            0,
        ));

        let csv = history.to_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "timestamp,mode,ticker,direction,max_shares,position_size,risk_per_share,dollars_risked"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024-03-01T14:30:00+00:00,Dollar Risk,SPY,Long Position,20.0000,1000.00,5.00,100.00"
        );
    }

    #[test]
    fn test_json_export() {
        let mut history = SessionHistory::new();
        history.push(entry(TotalRiskInput::new(10000.0, 1.0, 100.0, 90.0).into(), 0));

        let json = history.to_json().unwrap();
        let parsed: Vec<HistoryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0], *history.latest().unwrap());
    }
}
