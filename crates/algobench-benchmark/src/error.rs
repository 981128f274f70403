//! Report and chart errors.

use std::io;

use thiserror::Error;

/// Error writing a report or chart.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no benchmark results to chart")]
    EmptyChart,
}
