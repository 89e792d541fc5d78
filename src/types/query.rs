//! The parameter set of a single measurements request.

use crate::types::pollutant::Pollutant;
use bon::Builder;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// Result page size used when none is given.
pub const DEFAULT_LIMIT: u32 = 10_000;

/// Ordering of the results returned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    Asc,
    /// Newest measurements first; the API default.
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Query parameters for one call to the measurements endpoint.
///
/// Only a single page is ever requested. To read further, issue another query with a
/// larger `offset`.
///
/// # Examples
///
/// ```
/// use airquality::{IntoUtcDateTime, MeasurementQuery, Pollutant};
/// use chrono::NaiveDate;
///
/// let query = MeasurementQuery::builder()
///     .date_from(NaiveDate::from_ymd_opt(2024, 2, 17).unwrap().into_utc())
///     .date_to(NaiveDate::from_ymd_opt(2024, 2, 18).unwrap().into_utc())
///     .parameter(Pollutant::Pm10)
///     .build();
///
/// let params = query.params();
/// assert!(params.contains(&("parameter", "pm10".to_string())));
/// assert!(params.contains(&("country", "GB".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct MeasurementQuery {
    /// Start of the window (inclusive).
    date_from: DateTime<Utc>,
    /// End of the window.
    date_to: DateTime<Utc>,
    #[builder(default)]
    parameter: Pollutant,
    /// ISO 3166-1 alpha-2 country code.
    #[builder(into, default = "GB".to_string())]
    country: String,
    /// Restricts the results to one location.
    #[builder(into)]
    location: Option<String>,
    #[builder(default = DEFAULT_LIMIT)]
    limit: u32,
    #[builder(default)]
    offset: u32,
    #[builder(default)]
    sort: SortOrder,
}

impl MeasurementQuery {
    /// Renders the query as the key/value pairs sent in the URL.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("date_from", format_instant(&self.date_from)),
            ("date_to", format_instant(&self.date_to)),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("sort", self.sort.to_string()),
            ("parameter", self.parameter.to_string()),
            ("country", self.country.clone()),
        ];
        if let Some(location) = &self.location {
            params.push(("location", location.clone()));
        }
        params
    }

    /// The same query restricted to a single location, as used when a location is
    /// picked from the dropdown.
    pub fn for_location(&self, location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..self.clone()
        }
    }

    /// The same query asking for a different page.
    pub fn with_offset(&self, offset: u32) -> Self {
        Self {
            offset,
            ..self.clone()
        }
    }

    pub fn parameter(&self) -> Pollutant {
        self.parameter
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn date_from(&self) -> DateTime<Utc> {
        self.date_from
    }

    pub fn date_to(&self) -> DateTime<Utc> {
        self.date_to
    }
}

fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2024, 2, 17, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 18, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_params_defaults() {
        let (from, to) = window();
        let query = MeasurementQuery::builder().date_from(from).date_to(to).build();

        assert_eq!(
            query.params(),
            vec![
                ("date_from", "2024-02-17T00:00:00Z".to_string()),
                ("date_to", "2024-02-18T00:00:00Z".to_string()),
                ("limit", "10000".to_string()),
                ("offset", "0".to_string()),
                ("sort", "desc".to_string()),
                ("parameter", "pm25".to_string()),
                ("country", "GB".to_string()),
            ]
        );
    }

    #[test]
    fn test_for_location_adds_location_key() {
        let (from, to) = window();
        let query = MeasurementQuery::builder()
            .date_from(from)
            .date_to(to)
            .limit(498)
            .build()
            .for_location("London Marylebone Road");

        let params = query.params();
        assert_eq!(params.len(), 8);
        assert_eq!(
            params.last(),
            Some(&("location", "London Marylebone Road".to_string()))
        );
        assert!(params.contains(&("limit", "498".to_string())));
        assert_eq!(query.location(), Some("London Marylebone Road"));
    }

    #[test]
    fn test_with_offset_keeps_everything_else() {
        let (from, to) = window();
        let query = MeasurementQuery::builder()
            .date_from(from)
            .date_to(to)
            .country("NL")
            .sort(SortOrder::Asc)
            .build();
        let next = query.with_offset(10_000);

        assert!(next.params().contains(&("offset", "10000".to_string())));
        assert!(next.params().contains(&("country", "NL".to_string())));
        assert!(next.params().contains(&("sort", "asc".to_string())));
        assert_eq!(next.date_from(), query.date_from());
    }
}
