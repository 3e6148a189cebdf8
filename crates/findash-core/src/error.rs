use std::path::PathBuf;

use thiserror::Error;

/// Fatal dataset load errors.
///
/// Cell-level coercion failures (unparseable price or date) are not errors;
/// they surface as `None` fields on the loaded record and are excluded from
/// downstream aggregation.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read dataset file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{name}'")]
    MissingColumn { name: &'static str },
}

/// Validation errors for control values arriving from the UI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid chart kind '{value}', expected one of line, bar")]
    InvalidChartKind { value: String },

    #[error("invalid year-month '{value}', expected YYYY-MM")]
    InvalidYearMonth { value: String },
}
