//! This module provides the main entry point: the [`AirQuality`] client, which runs the
//! fetch, normalize, aggregate and rank steps for one query at a time.

use crate::config::AirQualityConfig;
use crate::error::AirQualityError;
use crate::measurements::fetcher::MeasurementsFetcher;
use crate::measurements::raw_table::RawTable;
use crate::pipeline::aggregate::aggregate;
use crate::pipeline::normalize::normalize;
use crate::pipeline::rank::rank;
use crate::pipeline::time_series::filter_and_order;
use crate::types::query::MeasurementQuery;
use crate::types::records::{location_options, TimeSeriesPoint};
use polars::prelude::DataFrame;
use reqwest::Client;

/// Everything the map dashboard shows, computed from a single fetch.
#[derive(Debug, Clone)]
pub struct LocationOverview {
    /// One row per location: `Location, Latitude, Longitude, Concentration`.
    pub averages: DataFrame,
    /// The ten most polluted locations, with a leading `Rank` column.
    pub ranking: DataFrame,
    /// Location names in the order of `averages`.
    pub location_options: Vec<String>,
}

/// The client for the OpenAQ measurements endpoint.
///
/// Each method performs exactly one request and builds its tables from scratch; nothing is
/// cached between calls. An error from the request ends the call before any aggregation.
///
/// # Examples
///
/// ```no_run
/// # use airquality::{AirQuality, AirQualityError, IntoUtcDateTime, MeasurementQuery};
/// # use chrono::NaiveDate;
/// # #[tokio::main]
/// # async fn main() -> Result<(), AirQualityError> {
/// let client = AirQuality::from_env()?;
/// let query = MeasurementQuery::builder()
///     .date_from(NaiveDate::from_ymd_opt(2024, 2, 17).unwrap().into_utc())
///     .date_to(NaiveDate::from_ymd_opt(2024, 2, 18).unwrap().into_utc())
///     .build();
///
/// let ranking = client.top_locations(&query).await?;
/// println!("{}", ranking);
/// # Ok(())
/// # }
/// ```
pub struct AirQuality {
    fetcher: MeasurementsFetcher,
}

impl AirQuality {
    pub fn new(config: AirQualityConfig) -> Result<Self, AirQualityError> {
        Ok(Self {
            fetcher: MeasurementsFetcher::new(config)?,
        })
    }

    /// Creates a client from the `airquality.*` config file and `OPENAQ_*` variables.
    /// See [`AirQualityConfig::from_env`].
    pub fn from_env() -> Result<Self, AirQualityError> {
        Self::new(AirQualityConfig::from_env()?)
    }

    pub fn with_client(config: AirQualityConfig, client: Client) -> Self {
        Self {
            fetcher: MeasurementsFetcher::with_client(config, client),
        }
    }

    /// The undecoded `results` list of one request.
    pub async fn fetch(&self, query: &MeasurementQuery) -> Result<RawTable, AirQualityError> {
        self.fetcher.fetch(query).await
    }

    /// The normalized measurement table, one row per measurement.
    pub async fn measurements(&self, query: &MeasurementQuery) -> Result<DataFrame, AirQualityError> {
        let raw = self.fetch(query).await?;
        Ok(normalize(&raw)?)
    }

    /// Mean concentration per location over the query window.
    ///
    /// Pass a query built with [`MeasurementQuery::for_location`] to refresh a single
    /// location, as the dashboard does when one is picked.
    pub async fn location_averages(
        &self,
        query: &MeasurementQuery,
    ) -> Result<DataFrame, AirQualityError> {
        let measurements = self.measurements(query).await?;
        Ok(aggregate(&measurements)?)
    }

    /// The ten locations with the highest mean concentration.
    pub async fn top_locations(&self, query: &MeasurementQuery) -> Result<DataFrame, AirQualityError> {
        let averages = self.location_averages(query).await?;
        Ok(rank(&averages)?)
    }

    /// Averages, ranking and location list from one request.
    pub async fn overview(&self, query: &MeasurementQuery) -> Result<LocationOverview, AirQualityError> {
        let averages = self.location_averages(query).await?;
        let ranking = rank(&averages)?;
        let location_options = location_options(&averages)?;
        Ok(LocationOverview {
            averages,
            ranking,
            location_options,
        })
    }

    /// Raw measurements of one location, oldest first.
    ///
    /// The request is restricted to `location`; the rows are then matched against it
    /// exactly. No rows gives [`crate::PipelineError::NoData`].
    pub async fn location_history(
        &self,
        query: &MeasurementQuery,
        location: &str,
    ) -> Result<Vec<TimeSeriesPoint>, AirQualityError> {
        let measurements = self.measurements(&query.for_location(location)).await?;
        Ok(filter_and_order(&measurements, location)?)
    }
}
