use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Column '{column}' has an unexpected type: {source}")]
    ColumnType {
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Invalid timestamp '{value}' for location '{location}'")]
    InvalidTimestamp {
        location: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("No measurements found for location '{location}'")]
    NoData { location: String },
}
