//! Typed row views over the pipeline's frames, for table, map and chart consumers.

use crate::pipeline::columns::{CONCENTRATION, LATITUDE, LOCATION, LONGITUDE, RANK};
use crate::pipeline::error::PipelineError;
use chrono::{DateTime, FixedOffset};
use polars::prelude::*;
use serde::Serialize;

/// Mean concentration of one location over the queried window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationAverage {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Concentration")]
    pub concentration: f64,
}

/// A [`LocationAverage`] with its position in the ranking (1 is the most polluted).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedLocation {
    #[serde(rename = "Rank")]
    pub rank: u32,
    #[serde(flatten)]
    pub average: LocationAverage,
}

/// One raw measurement of the historical series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub location: String,
    pub timestamp: DateTime<FixedOffset>,
    pub concentration: f64,
}

/// Retrieves a column by name from a DataFrame.
pub(crate) fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, PipelineError> {
    df.column(name)
        .map_err(|e| PipelineError::ColumnNotFound(name.to_string(), e))
}

pub(crate) fn get_str<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked, PipelineError> {
    get_column(df, name)?
        .str()
        .map_err(|e| PipelineError::ColumnType {
            column: name.to_string(),
            source: e,
        })
}

pub(crate) fn get_f64<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Float64Chunked, PipelineError> {
    get_column(df, name)?
        .f64()
        .map_err(|e| PipelineError::ColumnType {
            column: name.to_string(),
            source: e,
        })
}

impl LocationAverage {
    /// Reads every row of an aggregated (or ranked) frame.
    ///
    /// Rows with a null field cannot come out of the aggregator; if one is present anyway it
    /// is skipped.
    pub fn from_frame(df: &DataFrame) -> Result<Vec<Self>, PipelineError> {
        let locations = get_str(df, LOCATION)?;
        let latitudes = get_f64(df, LATITUDE)?;
        let longitudes = get_f64(df, LONGITUDE)?;
        let concentrations = get_f64(df, CONCENTRATION)?;

        Ok((0..df.height())
            .filter_map(|idx| {
                Some(LocationAverage {
                    location: locations.get(idx)?.to_string(),
                    latitude: latitudes.get(idx)?,
                    longitude: longitudes.get(idx)?,
                    concentration: concentrations.get(idx)?,
                })
            })
            .collect())
    }
}

impl RankedLocation {
    /// Reads every row of a ranked frame, in rank order.
    pub fn from_frame(df: &DataFrame) -> Result<Vec<Self>, PipelineError> {
        let ranks = get_column(df, RANK)?.cast(&DataType::UInt32)?;
        let ranks = ranks.u32().map_err(|e| PipelineError::ColumnType {
            column: RANK.to_string(),
            source: e,
        })?;
        let averages = LocationAverage::from_frame(df)?;

        Ok(ranks
            .into_iter()
            .zip(averages)
            .filter_map(|(rank, average)| Some(RankedLocation { rank: rank?, average }))
            .collect())
    }
}

/// Distinct location names of a frame in row order, e.g. the options of a location picker.
pub fn location_options(df: &DataFrame) -> Result<Vec<String>, PipelineError> {
    let mut options: Vec<String> = Vec::new();
    for location in get_str(df, LOCATION)?.into_iter().flatten() {
        if !options.iter().any(|known| known == location) {
            options.push(location.to_string());
        }
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregated_frame() -> PolarsResult<DataFrame> {
        df!(
            LOCATION => ["A", "B", "A"],
            LATITUDE => [51.5, 52.0, 51.5],
            LONGITUDE => [-0.1, 1.2, -0.1],
            CONCENTRATION => [10.0, 7.5, 3.0]
        )
    }

    #[test]
    fn test_location_average_from_frame() -> Result<(), Box<dyn std::error::Error>> {
        let rows = LocationAverage::from_frame(&aggregated_frame()?)?;
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[1],
            LocationAverage {
                location: "B".to_string(),
                latitude: 52.0,
                longitude: 1.2,
                concentration: 7.5,
            }
        );
        Ok(())
    }

    #[test]
    fn test_missing_column_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(LOCATION => ["A"])?;
        let result = LocationAverage::from_frame(&df);
        assert!(matches!(result, Err(PipelineError::ColumnNotFound(name, _)) if name == LATITUDE));
        Ok(())
    }

    #[test]
    fn test_location_options_are_distinct_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let options = location_options(&aggregated_frame()?)?;
        assert_eq!(options, vec!["A".to_string(), "B".to_string()]);
        Ok(())
    }

    #[test]
    fn test_ranked_location_serializes_flat() -> Result<(), Box<dyn std::error::Error>> {
        let ranked = RankedLocation {
            rank: 1,
            average: LocationAverage {
                location: "A".to_string(),
                latitude: 51.5,
                longitude: -0.1,
                concentration: 10.0,
            },
        };
        let json = serde_json::to_value(&ranked)?;
        assert_eq!(json["Rank"], 1);
        assert_eq!(json["Location"], "A");
        assert_eq!(json["Concentration"], 10.0);
        Ok(())
    }
}
