//! Calculation sessions.
//!
//! A session always computes. What a trigger changes is only the
//! presentation side effect: manual submissions produce a notification,
//! automatic recomputation stays silent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sizing_core::{TradeInput, ValidationFailure};
use sizing_engine::Calculator;
use tracing::{debug, info};

use crate::history::{HistoryEntry, SessionHistory};
use crate::report::CalculationReport;

/// What started a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Recomputed after an input change
    Auto,
    /// Explicitly requested by the user
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyLevel {
    Info,
    Success,
    Error,
}

/// A toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotifyLevel,
    pub message: String,
}

/// Outcome of one submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub outcome: Result<CalculationReport, ValidationFailure>,
    /// Only set for manual triggers
    pub notification: Option<Notification>,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// A calculator plus the history of what it accepted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    calculator: Calculator,
    history: SessionHistory,
}

impl Session {
    pub fn new(calculator: Calculator, history: SessionHistory) -> Self {
        Self {
            calculator,
            history,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut SessionHistory {
        &mut self.history
    }

    /// Run a calculation now.
    pub fn submit(&mut self, input: TradeInput, trigger: Trigger) -> Submission {
        self.submit_at(input, trigger, Utc::now())
    }

    /// Run a calculation, stamping any history entry with `timestamp`.
    pub fn submit_at(
        &mut self,
        input: TradeInput,
        trigger: Trigger,
        timestamp: DateTime<Utc>,
    ) -> Submission {
        let mode = input.mode();
        let messages = self.calculator.messages();

        match self.calculator.calculate(&input) {
            Ok(result) => {
                let report = CalculationReport::new(input, result);
                self.history
                    .push(HistoryEntry::new(timestamp, report.clone()));

                let notification = (trigger == Trigger::Manual).then(|| Notification {
                    level: NotifyLevel::Success,
                    message: messages.calculation_complete.clone(),
                });

                info!(
                    mode = %mode,
                    ?trigger,
                    ticker = report.ticker(),
                    history = self.history.len(),
                    "calculation recorded"
                );

                Submission {
                    outcome: Ok(report),
                    notification,
                }
            }
            Err(failure) => {
                let notification = (trigger == Trigger::Manual).then(|| Notification {
                    level: NotifyLevel::Error,
                    message: failure.summary.clone(),
                });

                debug!(mode = %mode, ?trigger, stage = %failure.stage, "submission rejected");

                Submission {
                    outcome: Err(failure),
                    notification,
                }
            }
        }
    }
}
