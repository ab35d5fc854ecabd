//! Logging setup.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::ReportError;

/// Setup logging with the given level, optionally mirroring to a file.
///
/// `RUST_LOG` overrides `level`. The returned guard must be held for as long
/// as file logging should keep flushing.
pub fn setup_logging(
    level: &str,
    json: bool,
    file: Option<&Path>,
) -> Result<Option<WorkerGuard>, ReportError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(fmt::layer().pretty())
            .init();
    }

    Ok(guard)
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, ReportError> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ReportError::Logging(format!("invalid log file path {:?}", path)))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| ReportError::Logging(e.to_string()))
}
