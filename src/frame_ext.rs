use crate::pipeline::columns::{CONCENTRATION, LATITUDE, LOCATION, LONGITUDE, RANK};
use polars::prelude::{col, lit, IdxSize, LazyFrame, SortMultipleOptions};

/// Lazy building blocks of the pipeline, usable on any frame with the normalized columns.
pub trait AirQualityFrameExt {
    /// Keeps only rows that have a location name and both coordinates.
    fn located(self) -> LazyFrame;

    /// Mean `Concentration` per `(Location, Latitude, Longitude)`, rounded to one decimal.
    ///
    /// Groups keep the order in which their first row appears. Rows without a location or
    /// coordinates are dropped first, and groups whose mean is null are removed.
    fn average_by_location(self) -> LazyFrame;

    /// Sorts by descending `Concentration` (stable), keeps the first `n` rows and prepends a
    /// 1-based `Rank` column.
    fn ranked(self, n: usize) -> LazyFrame;

    /// Rows whose `Location` equals `location` exactly.
    fn for_location(self, location: &str) -> LazyFrame;
}

impl AirQualityFrameExt for LazyFrame {
    fn located(self) -> LazyFrame {
        self.filter(
            col(LOCATION)
                .is_not_null()
                .and(col(LATITUDE).is_not_null())
                .and(col(LONGITUDE).is_not_null()),
        )
    }

    fn average_by_location(self) -> LazyFrame {
        self.located()
            .group_by_stable([col(LOCATION), col(LATITUDE), col(LONGITUDE)])
            .agg([col(CONCENTRATION).mean().round(1)])
            .filter(col(CONCENTRATION).is_not_null())
    }

    fn ranked(self, n: usize) -> LazyFrame {
        let n = IdxSize::try_from(n).unwrap_or(IdxSize::MAX);
        self.sort(
            [CONCENTRATION],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_nulls_last(true)
                .with_maintain_order(true),
        )
        .limit(n)
        .with_row_index(RANK, Some(1))
    }

    fn for_location(self, location: &str) -> LazyFrame {
        self.filter(col(LOCATION).eq(lit(location)))
    }
}
