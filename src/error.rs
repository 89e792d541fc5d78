use crate::config::ConfigError;
use crate::measurements::error::{DecodeError, FetchError};
use crate::pipeline::error::PipelineError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirQualityError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] PolarsError),
}

impl AirQualityError {
    /// True when the error means "the request worked but there was nothing to show".
    pub fn is_no_data(&self) -> bool {
        matches!(self, AirQualityError::Pipeline(PipelineError::NoData { .. }))
    }
}
