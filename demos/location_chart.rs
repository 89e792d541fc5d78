//! demos/location_chart.rs
//!
//! Fetches one day of PM2.5 measurements for a location and plots them as a line with
//! markers using `plotlars`.
//!
//! To run this example:
//! cargo run --example location_chart --features examples -- "London Marylebone Road"

use std::error::Error;

use airquality::{AirQuality, IntoUtcDateTime, MeasurementQuery, TimeSeriesPoint};
use chrono::NaiveDate;
use plotlars::{Legend, Line, Plot, Rgb, Shape, Text, TimeSeriesPlot};
use polars::prelude::*;

const X_COLUMN: &str = "Date and Time";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let location = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "London Marylebone Road".to_string());

    let client = AirQuality::from_env()?;
    let day = NaiveDate::from_ymd_opt(2023, 11, 26).unwrap();
    let query = MeasurementQuery::builder()
        .date_from(day.into_utc())
        .date_to(day.succ_opt().unwrap().into_utc())
        .limit(499)
        .build();

    let points = match client.location_history(&query, &location).await {
        Ok(points) => points,
        Err(e) if e.is_no_data() => {
            println!("No data for '{}' on {}, nothing to plot.", location, day);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let label = query.parameter().label();
    plot_series(&series_frame(&points, label)?, &location, label);
    println!("Plot shown in browser.");
    Ok(())
}

fn series_frame(points: &[TimeSeriesPoint], label: &str) -> PolarsResult<DataFrame> {
    let times: Vec<String> = points
        .iter()
        .map(|p| p.timestamp.format("%Y-%m-%d %H:%M").to_string())
        .collect();
    let values: Vec<f64> = points.iter().map(|p| p.concentration).collect();
    df!(X_COLUMN => times, label => values)
}

fn plot_series(data: &DataFrame, location: &str, label: &str) {
    TimeSeriesPlot::builder()
        .data(data)
        .x(X_COLUMN)
        .y(label)
        .size(8)
        .colors(vec![Rgb(235, 64, 52)])
        .lines(vec![Line::Solid])
        .with_shape(true)
        .shapes(vec![Shape::Circle])
        .plot_title(Text::from(format!("{} levels in {}", label, location).as_str()).size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title(X_COLUMN)
        .y_title(label)
        .build()
        .plot();
}
