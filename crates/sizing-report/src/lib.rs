//! Presentation support for the sizing calculators.
//!
//! Formats engine output for display, keeps the in-memory session history
//! and sets up logging.

mod error;
pub mod format;
mod history;
mod logging;
mod report;
mod session;

pub use error::ReportError;
pub use format::{
    format_currency, format_fixed, format_optional, format_percentage, format_shares,
};
pub use history::{HistoryEntry, SessionHistory};
pub use logging::setup_logging;
pub use report::CalculationReport;
pub use session::{Notification, NotifyLevel, Session, Submission, Trigger};
