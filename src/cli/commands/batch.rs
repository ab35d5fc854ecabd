//! Batch command implementation.
//!
//! Each CSV row is submitted like an automatic recomputation: accepted rows
//! land in the session history, rejected rows are reported by row number.

use anyhow::{Context, Result};
use serde::Deserialize;
use sizing_core::{
    CalculatorMode, DollarRiskInput, PositionPercentInput, RawNumber, TotalRiskInput, TradeInput,
};
use sizing_report::{Session, Trigger};
use std::path::Path;
use tracing::{info, warn};

use super::print_failure;
use crate::cli::{BatchArgs, OutputFormat};

/// One CSV row. Numeric cells stay raw so bad values reach validation.
#[derive(Debug, Deserialize)]
struct BatchRow {
    mode: CalculatorMode,
    #[serde(default)]
    ticker: Option<String>,
    #[serde(default)]
    account_value: Option<String>,
    #[serde(default)]
    risk_percentage: Option<String>,
    #[serde(default)]
    entry_price: Option<String>,
    #[serde(default)]
    stop_loss: Option<String>,
    #[serde(default)]
    max_positions: Option<String>,
    #[serde(default)]
    dollar_risk: Option<String>,
    #[serde(default)]
    account_size: Option<String>,
}

impl BatchRow {
    fn into_input(self) -> TradeInput {
        let entry = number(&self.entry_price);
        let stop = number(&self.stop_loss);

        match self.mode {
            CalculatorMode::TotalRisk => {
                let mut input = TotalRiskInput::new(
                    number(&self.account_value),
                    number(&self.risk_percentage),
                    entry,
                    stop,
                );
                // Fractional counts truncate; zero or less means no limit
                input.max_positions = self
                    .max_positions
                    .as_deref()
                    .to_finite()
                    .filter(|n| *n >= 1.0)
                    .map(|n| n.min(f64::from(u32::MAX)) as u32);
                input.ticker = self.ticker;
                TradeInput::TotalRisk(input)
            }
            CalculatorMode::DollarRisk => {
                let mut input = DollarRiskInput::new(number(&self.dollar_risk), entry, stop);
                input.account_size = self.account_size.as_deref().to_finite();
                input.ticker = self.ticker;
                TradeInput::DollarRisk(input)
            }
            CalculatorMode::PositionPercent => {
                let mut input = PositionPercentInput::new(
                    number(&self.account_value),
                    number(&self.risk_percentage),
                    entry,
                    stop,
                );
                input.ticker = self.ticker;
                TradeInput::PositionPercent(input)
            }
        }
    }
}

/// Parse a cell, using NaN for anything that is not a finite number.
fn number(cell: &Option<String>) -> f64 {
    cell.as_deref().to_finite().unwrap_or(f64::NAN)
}

pub fn run(args: BatchArgs, session: &mut Session) -> Result<()> {
    info!("Running batch from {:?}", args.file);

    let rows = load_rows(&args.file)?;
    let total = rows.len();
    let mut rejected = 0usize;

    for (index, row) in rows.into_iter().enumerate() {
        // Header is line 1
        let line = index + 2;
        let mode = row.mode;
        let submission = session.submit(row.into_input(), Trigger::Auto);

        if let Err(failure) = &submission.outcome {
            rejected += 1;
            warn!(line, mode = %mode, stage = %failure.stage, "row rejected");
            println!("Row {} ({}) rejected: {}", line, mode, failure.summary);
            print_failure(failure);
        }
    }

    info!(total, accepted = total - rejected, rejected, "Batch complete");

    let history = session.history();
    match args.output {
        OutputFormat::Json => println!("{}", history.to_json()?),
        OutputFormat::Text => {
            println!();
            println!(
                "Session history ({} of {} rows accepted, newest first)",
                total - rejected,
                total
            );
            println!("{}", history.render());
        }
    }

    if let Some(save_path) = &args.save {
        std::fs::write(save_path, history.to_csv()?)
            .with_context(|| format!("Failed to write {:?}", save_path))?;
        info!("History saved to {:?}", save_path);
    }

    Ok(())
}

fn load_rows(path: &Path) -> Result<Vec<BatchRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {:?}", path))?;

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let row: BatchRow =
            record.with_context(|| format!("Malformed row at line {}", index + 2))?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> Vec<BatchRow> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        reader.deserialize().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_rows_to_inputs() {
        let rows = parse(
            "mode,ticker,account_value,risk_percentage,entry_price,stop_loss,max_positions,dollar_risk,account_size\n\
             total-risk,AAPL,10000,1,100,90,5,,\n\
             dollar-risk,,,,50,45,,100,10000\n\
             position-percent,MSFT,10000,10,50,45,,,\n",
        );
        let inputs: Vec<_> = rows.into_iter().map(BatchRow::into_input).collect();

        match &inputs[0] {
            TradeInput::TotalRisk(input) => {
                assert_eq!(input.max_positions, Some(5));
                assert_eq!(input.ticker.as_deref(), Some("AAPL"));
            }
            other => panic!("unexpected input {:?}", other),
        }
        match &inputs[1] {
            TradeInput::DollarRisk(input) => {
                assert_eq!(input.dollar_risk, 100.0);
                assert_eq!(input.account_size, Some(10000.0));
            }
            other => panic!("unexpected input {:?}", other),
        }
        assert_eq!(inputs[2].mode(), CalculatorMode::PositionPercent);
    }

    #[test]
    fn test_bad_cells_become_nan() {
        let rows = parse(
            "mode,account_value,risk_percentage,entry_price,stop_loss,max_positions\n\
             total-risk,abc,1,,90,2.7\n",
        );
        let input = rows.into_iter().next().unwrap().into_input();

        match input {
            TradeInput::TotalRisk(input) => {
                assert!(input.account_value.is_nan());
                assert!(input.entry_price.is_nan());
                assert_eq!(input.stop_loss, 90.0);
                assert_eq!(input.max_positions, Some(2));
            }
            other => panic!("unexpected input {:?}", other),
        }
    }

    #[test]
    fn test_batch_session_reports_rejections() {
        let rows = parse(
            "mode,account_value,risk_percentage,entry_price,stop_loss\n\
             total-risk,10000,1,100,90\n\
             total-risk,10000,1,100,100\n",
        );
        let mut session = Session::default();
        let outcomes: Vec<_> = rows
            .into_iter()
            .map(|row| session.submit(row.into_input(), Trigger::Auto))
            .collect();

        assert!(outcomes[0].is_accepted());
        assert!(outcomes[1].outcome.as_ref().unwrap_err().is_entry_stop_equal());
        assert!(outcomes.iter().all(|s| s.notification.is_none()));
        assert_eq!(session.history().len(), 1);
    }
}
