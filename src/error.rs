use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn the source CSV into a [`SaleDataset`](crate::data::model::SaleDataset).
///
/// Every variant is fatal at startup: the dashboard never opens without data.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV has no data rows")]
    NoRecords,

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("row {row}: '{value}' is not a date in YYYY-MM-DD format")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}, {column}: '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: unknown avocado type '{value}'")]
    UnknownType { row: usize, value: String },
}
