use crate::frame_ext::AirQualityFrameExt;
use crate::pipeline::columns::CONCENTRATION;
use crate::pipeline::error::PipelineError;
use crate::types::records::get_column;
use polars::prelude::*;

/// Number of locations kept by [`rank`].
pub const TOP_N: usize = 10;

/// The ten most polluted locations of an aggregated table, with a `Rank` column.
pub fn rank(df: &DataFrame) -> Result<DataFrame, PipelineError> {
    rank_top(df, TOP_N)
}

/// Like [`rank`], keeping `n` rows instead of ten.
///
/// Equal concentrations keep their input order.
pub fn rank_top(df: &DataFrame, n: usize) -> Result<DataFrame, PipelineError> {
    get_column(df, CONCENTRATION)?;
    Ok(df.clone().lazy().ranked(n).collect()?)
}
