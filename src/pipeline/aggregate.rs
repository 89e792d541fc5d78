use crate::frame_ext::AirQualityFrameExt;
use crate::pipeline::columns::REQUIRED;
use crate::pipeline::error::PipelineError;
use crate::types::records::get_column;
use log::{debug, warn};
use polars::prelude::*;

/// Averages a normalized table per location.
///
/// Concentrations are rounded half away from zero (`15.25` becomes `15.3`). Rows missing a
/// location or a coordinate are dropped, never grouped.
pub fn aggregate(df: &DataFrame) -> Result<DataFrame, PipelineError> {
    for name in REQUIRED {
        get_column(df, name)?;
    }

    let located = df.clone().lazy().located().collect()?;
    let dropped = df.height() - located.height();
    if dropped > 0 {
        warn!(
            "Dropped {} of {} measurements without a location or coordinates",
            dropped,
            df.height()
        );
    }

    let averaged = located.lazy().average_by_location().collect()?;
    debug!(
        "Aggregated {} measurements into {} locations",
        df.height() - dropped,
        averaged.height()
    );
    Ok(averaged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::columns::{CONCENTRATION, LATITUDE, LOCATION, LONGITUDE};
    use crate::types::records::LocationAverage;

    #[test]
    fn test_mean_of_one_triple() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            LOCATION => ["A", "A", "A"],
            LATITUDE => [51.5, 51.5, 51.5],
            LONGITUDE => [-0.1, -0.1, -0.1],
            CONCENTRATION => [10.0, 20.0, 15.0]
        )?;
        let rows = LocationAverage::from_frame(&aggregate(&df)?)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].concentration, 15.0);
        Ok(())
    }

    #[test]
    fn test_rounds_half_away_from_zero() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            LOCATION => ["up", "up", "down", "down", "small", "small"],
            LATITUDE => [1.0, 1.0, 2.0, 2.0, 3.0, 3.0],
            LONGITUDE => [1.0, 1.0, 2.0, 2.0, 3.0, 3.0],
            CONCENTRATION => [15.0, 15.5, -15.0, -15.5, 0.0, 0.5]
        )?;
        let rows = LocationAverage::from_frame(&aggregate(&df)?)?;
        let means: Vec<f64> = rows.iter().map(|r| r.concentration).collect();
        assert_eq!(means, vec![15.3, -15.3, 0.3]);
        Ok(())
    }

    #[test]
    fn test_groups_keep_first_occurrence_order() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            LOCATION => ["C", "A", "C", "B", "A"],
            LATITUDE => [3.0, 1.0, 3.0, 2.0, 1.0],
            LONGITUDE => [3.0, 1.0, 3.0, 2.0, 1.0],
            CONCENTRATION => [1.0, 2.0, 3.0, 4.0, 6.0]
        )?;
        let rows = LocationAverage::from_frame(&aggregate(&df)?)?;
        let names: Vec<&str> = rows.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(rows[0].concentration, 2.0);
        assert_eq!(rows[1].concentration, 4.0);
        Ok(())
    }

    #[test]
    fn test_same_name_different_coordinates_are_separate() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            LOCATION => ["A", "A"],
            LATITUDE => [51.5, 51.6],
            LONGITUDE => [-0.1, -0.1],
            CONCENTRATION => [4.0, 8.0]
        )?;
        assert_eq!(aggregate(&df)?.height(), 2);
        Ok(())
    }

    #[test]
    fn test_rows_without_coordinates_are_dropped() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            LOCATION => [Some("A"), Some("A"), Some("B"), None],
            LATITUDE => [Some(51.5), None, Some(52.0), Some(1.0)],
            LONGITUDE => [Some(-0.1), Some(-0.1), None, Some(1.0)],
            CONCENTRATION => [Some(5.0), Some(100.0), Some(7.0), Some(9.0)]
        )?;
        let rows = LocationAverage::from_frame(&aggregate(&df)?)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].location, "A");
        assert_eq!(rows[0].concentration, 5.0);
        Ok(())
    }

    #[test]
    fn test_all_null_concentrations_drop_the_group() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            LOCATION => ["A", "B"],
            LATITUDE => [1.0, 2.0],
            LONGITUDE => [1.0, 2.0],
            CONCENTRATION => [None, Some(3.0)]
        )?;
        let rows = LocationAverage::from_frame(&aggregate(&df)?)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].location, "B");
        Ok(())
    }

    #[test]
    fn test_missing_column_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(LOCATION => ["A"], LATITUDE => [1.0], LONGITUDE => [1.0])?;
        assert!(matches!(
            aggregate(&df),
            Err(PipelineError::ColumnNotFound(name, _)) if name == CONCENTRATION
        ));
        Ok(())
    }
}
