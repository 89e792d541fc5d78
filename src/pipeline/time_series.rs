//! Historical series of a single location.

use crate::frame_ext::AirQualityFrameExt;
use crate::pipeline::columns::{CONCENTRATION, LOCAL_TIME, LOCATION};
use crate::pipeline::error::PipelineError;
use crate::types::records::{get_column, get_f64, get_str, TimeSeriesPoint};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use log::{debug, warn};
use polars::prelude::*;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Selects the rows of `location` (exact, case-sensitive match) and returns them ordered by
/// local timestamp, oldest first.
///
/// Concentrations are rounded to one decimal. The API returns newest first, so the rows are
/// always re-sorted here. A location without usable rows gives [`PipelineError::NoData`].
pub fn filter_and_order(
    df: &DataFrame,
    location: &str,
) -> Result<Vec<TimeSeriesPoint>, PipelineError> {
    get_column(df, LOCATION)?;

    let selected = df
        .clone()
        .lazy()
        .for_location(location)
        .with_column(col(CONCENTRATION).round(1))
        .collect()?;
    if selected.height() == 0 {
        return Err(PipelineError::NoData {
            location: location.to_string(),
        });
    }

    let times = get_str(&selected, LOCAL_TIME)?;
    let concentrations = get_f64(&selected, CONCENTRATION)?;

    let mut points = Vec::with_capacity(selected.height());
    let mut skipped = 0usize;
    for (time, concentration) in times.into_iter().zip(concentrations.into_iter()) {
        let (Some(time), Some(concentration)) = (time, concentration) else {
            skipped += 1;
            continue;
        };
        points.push(TimeSeriesPoint {
            location: location.to_string(),
            timestamp: parse_local_time(location, time)?,
            concentration,
        });
    }
    if skipped > 0 {
        warn!(
            "Skipped {} measurements for '{}' without a timestamp or value",
            skipped, location
        );
    }
    if points.is_empty() {
        return Err(PipelineError::NoData {
            location: location.to_string(),
        });
    }

    points.sort_by_key(|point| point.timestamp);
    debug!("Selected {} measurements for '{}'", points.len(), location);
    Ok(points)
}

/// Parses an RFC 3339 timestamp; values without an offset are read as UTC.
fn parse_local_time(location: &str, value: &str) -> Result<DateTime<FixedOffset>, PipelineError> {
    DateTime::parse_from_rfc3339(value).or_else(|rfc_error| {
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .map(|naive| naive.and_utc().fixed_offset())
            .ok_or_else(|| PipelineError::InvalidTimestamp {
                location: location.to_string(),
                value: value.to_string(),
                source: rfc_error,
            })
    })
}
