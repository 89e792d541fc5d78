//! demos/top_locations.rs
//!
//! Fetches one day of PM2.5 measurements for Great Britain and prints the ten most
//! polluted locations, followed by the locations a user could pick from.
//!
//! Needs an OpenAQ API key in `OPENAQ_API_KEY` (or in an `airquality.toml` file).
//! To run this example:
//! RUST_LOG=info cargo run --example top_locations

use airquality::{AirQuality, AirQualityError, IntoUtcDateTime, MeasurementQuery, RankedLocation};
use chrono::NaiveDate;
use std::env;

#[tokio::main]
async fn main() -> Result<(), AirQualityError> {
    env_logger::init();
    configure_polars_display();

    let client = AirQuality::from_env()?;
    let day = NaiveDate::from_ymd_opt(2024, 2, 17).unwrap();
    let query = MeasurementQuery::builder()
        .date_from(day.into_utc())
        .date_to(day.succ_opt().unwrap().into_utc())
        .build();

    let overview = client.overview(&query).await?;
    if overview.ranking.height() == 0 {
        println!("No measurements found for {}.", day);
        return Ok(());
    }

    println!("Average concentration per location:\n{}", overview.averages);
    println!("\nMost polluted locations on {}:", day);
    for row in RankedLocation::from_frame(&overview.ranking)? {
        println!(
            "{:>2}. {:<40} {:>6.1} {}",
            row.rank,
            row.average.location,
            row.average.concentration,
            query.parameter().label()
        );
    }
    println!(
        "\n{} locations available: {}",
        overview.location_options.len(),
        overview.location_options.join(", ")
    );

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
