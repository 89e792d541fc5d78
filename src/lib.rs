mod air_quality;
mod config;
mod error;
mod frame_ext;
mod measurements;
mod pipeline;
mod types;

pub use air_quality::*;
pub use config::{AirQualityConfig, ConfigError, DEFAULT_ENDPOINT};
pub use error::AirQualityError;
pub use frame_ext::AirQualityFrameExt;

pub use measurements::error::{DecodeError, FetchError};
pub use measurements::fetcher::MeasurementsFetcher;
pub use measurements::raw_table::RawTable;

pub use pipeline::aggregate::aggregate;
pub use pipeline::columns;
pub use pipeline::error::PipelineError;
pub use pipeline::normalize::normalize;
pub use pipeline::rank::{rank, rank_top, TOP_N};
pub use pipeline::time_series::filter_and_order;

pub use types::into_utc_trait::IntoUtcDateTime;
pub use types::pollutant::Pollutant;
pub use types::query::{MeasurementQuery, SortOrder, DEFAULT_LIMIT};
pub use types::records::{location_options, LocationAverage, RankedLocation, TimeSeriesPoint};
