//! CLI command implementations.

pub mod batch;
pub mod dollar_risk;
pub mod position_percent;
pub mod total_risk;
pub mod validate;

use anyhow::{anyhow, Result};
use sizing_core::ValidationFailure;
use sizing_report::{NotifyLevel, Submission};

use crate::cli::OutputFormat;

/// Print a manual submission; a rejection becomes the command's error.
pub(crate) fn print_submission(submission: Submission, output: OutputFormat) -> Result<()> {
    if let Some(notification) = &submission.notification {
        match notification.level {
            NotifyLevel::Error => eprintln!("✗ {}", notification.message),
            _ => eprintln!("✓ {}", notification.message),
        }
    }

    match submission.outcome {
        Ok(report) => {
            match output {
                OutputFormat::Json => println!("{}", report.to_json()?),
                OutputFormat::Text => println!("{}", report.summary()),
            }
            Ok(())
        }
        Err(failure) => {
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&failure)?),
                OutputFormat::Text => print_failure(&failure),
            }
            Err(rejection_error(&failure))
        }
    }
}

/// Exit error for a rejected calculation. The summary was already shown
/// with the notification, so only the stage is named here.
fn rejection_error(failure: &ValidationFailure) -> anyhow::Error {
    anyhow!(
        "calculation rejected while {} ({} field(s))",
        failure.stage,
        failure.len()
    )
}

pub(crate) fn print_failure(failure: &ValidationFailure) {
    for error in failure.field_errors.values() {
        println!("  {:<18} {}", error.field.label(), error.message);
        println!("  {:<18} {}", "", error.hint);
    }
}
