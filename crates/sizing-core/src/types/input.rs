//! Trade inputs for each calculator mode.
//!
//! Required numeric fields are plain `f64`. A value that failed to parse
//! upstream is carried as NaN and rejected during validation.

use serde::{Deserialize, Serialize};

use super::{CalculatorMode, Field};

/// Input for the total-risk calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalRiskInput {
    /// Account value in dollars
    pub account_value: f64,
    /// Share of the account put at risk, in percent
    pub risk_percentage: f64,
    /// Entry price
    pub entry_price: f64,
    /// Stop-loss price
    pub stop_loss: f64,
    /// Maximum number of concurrent positions
    #[serde(default)]
    pub max_positions: Option<u32>,
    /// Display-only ticker symbol
    #[serde(default)]
    pub ticker: Option<String>,
}

impl TotalRiskInput {
    pub fn new(account_value: f64, risk_percentage: f64, entry_price: f64, stop_loss: f64) -> Self {
        Self {
            account_value,
            risk_percentage,
            entry_price,
            stop_loss,
            max_positions: None,
            ticker: None,
        }
    }

    /// Cap each position at `account_value / max_positions`.
    pub fn with_max_positions(mut self, max_positions: u32) -> Self {
        self.max_positions = Some(max_positions);
        self
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = normalize_ticker(ticker.into());
        self
    }

    /// Required numeric fields, in display order.
    pub fn required_fields(&self) -> [(Field, f64); 4] {
        [
            (Field::AccountValue, self.account_value),
            (Field::RiskPercentage, self.risk_percentage),
            (Field::EntryPrice, self.entry_price),
            (Field::StopLoss, self.stop_loss),
        ]
    }
}

/// Input for the dollar-risk calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DollarRiskInput {
    /// Dollars the trader is willing to lose
    pub dollar_risk: f64,
    pub entry_price: f64,
    pub stop_loss: f64,
    /// Account size, used only to express the position as a share of it
    #[serde(default)]
    pub account_size: Option<f64>,
    #[serde(default)]
    pub ticker: Option<String>,
}

impl DollarRiskInput {
    pub fn new(dollar_risk: f64, entry_price: f64, stop_loss: f64) -> Self {
        Self {
            dollar_risk,
            entry_price,
            stop_loss,
            account_size: None,
            ticker: None,
        }
    }

    pub fn with_account_size(mut self, account_size: f64) -> Self {
        self.account_size = Some(account_size);
        self
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = normalize_ticker(ticker.into());
        self
    }

    pub fn required_fields(&self) -> [(Field, f64); 3] {
        [
            (Field::DollarRisk, self.dollar_risk),
            (Field::EntryPrice, self.entry_price),
            (Field::StopLoss, self.stop_loss),
        ]
    }
}

/// Input for the position-percent calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionPercentInput {
    pub account_value: f64,
    /// Share of the account allocated to the position, in percent
    pub position_percentage: f64,
    pub entry_price: f64,
    pub stop_loss: f64,
    #[serde(default)]
    pub ticker: Option<String>,
}

impl PositionPercentInput {
    pub fn new(
        account_value: f64,
        position_percentage: f64,
        entry_price: f64,
        stop_loss: f64,
    ) -> Self {
        Self {
            account_value,
            position_percentage,
            entry_price,
            stop_loss,
            ticker: None,
        }
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = normalize_ticker(ticker.into());
        self
    }

    pub fn required_fields(&self) -> [(Field, f64); 4] {
        [
            (Field::AccountValue, self.account_value),
            (Field::RiskPercentage, self.position_percentage),
            (Field::EntryPrice, self.entry_price),
            (Field::StopLoss, self.stop_loss),
        ]
    }
}

/// Input for any calculator mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum TradeInput {
    TotalRisk(TotalRiskInput),
    DollarRisk(DollarRiskInput),
    PositionPercent(PositionPercentInput),
}

impl TradeInput {
    pub fn mode(&self) -> CalculatorMode {
        match self {
            TradeInput::TotalRisk(_) => CalculatorMode::TotalRisk,
            TradeInput::DollarRisk(_) => CalculatorMode::DollarRisk,
            TradeInput::PositionPercent(_) => CalculatorMode::PositionPercent,
        }
    }

    pub fn ticker(&self) -> Option<&str> {
        let ticker = match self {
            TradeInput::TotalRisk(input) => &input.ticker,
            TradeInput::DollarRisk(input) => &input.ticker,
            TradeInput::PositionPercent(input) => &input.ticker,
        };
        ticker.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn entry_price(&self) -> f64 {
        match self {
            TradeInput::TotalRisk(input) => input.entry_price,
            TradeInput::DollarRisk(input) => input.entry_price,
            TradeInput::PositionPercent(input) => input.entry_price,
        }
    }

    pub fn stop_loss(&self) -> f64 {
        match self {
            TradeInput::TotalRisk(input) => input.stop_loss,
            TradeInput::DollarRisk(input) => input.stop_loss,
            TradeInput::PositionPercent(input) => input.stop_loss,
        }
    }
}

impl From<TotalRiskInput> for TradeInput {
    fn from(input: TotalRiskInput) -> Self {
        TradeInput::TotalRisk(input)
    }
}

impl From<DollarRiskInput> for TradeInput {
    fn from(input: DollarRiskInput) -> Self {
        TradeInput::DollarRisk(input)
    }
}

impl From<PositionPercentInput> for TradeInput {
    fn from(input: PositionPercentInput) -> Self {
        TradeInput::PositionPercent(input)
    }
}

fn normalize_ticker(ticker: String) -> Option<String> {
    let trimmed = ticker.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_ticker_is_absent() {
        let input = TotalRiskInput::new(10000.0, 1.0, 100.0, 90.0).with_ticker("   ");
        assert_eq!(input.ticker, None);

        let input = TradeInput::from(DollarRiskInput::new(100.0, 50.0, 45.0).with_ticker(" AAPL "));
        assert_eq!(input.ticker(), Some("AAPL"));
        assert_eq!(input.mode(), CalculatorMode::DollarRisk);
    }

    #[test]
    fn test_tagged_json() {
        let json = r#"{"mode":"total-risk","account_value":10000,"risk_percentage":1,"entry_price":100,"stop_loss":90,"max_positions":5}"#;
        let input: TradeInput = serde_json::from_str(json).unwrap();

        match input {
            TradeInput::TotalRisk(ref total) => {
                assert_eq!(total.max_positions, Some(5));
                assert_eq!(total.ticker, None);
            }
            _ => panic!("expected total-risk input"),
        }
        assert_eq!(input.entry_price(), 100.0);
        assert_eq!(input.stop_loss(), 90.0);
    }
}
