//! Report errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
