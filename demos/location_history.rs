//! demos/location_history.rs
//!
//! Prints every PM2.5 measurement of one location over a day, oldest first.
//! The location is taken from the first argument, or asked for on stdin.
//!
//! To run this example:
//! cargo run --example location_history -- "London Marylebone Road"

use airquality::{AirQuality, IntoUtcDateTime, MeasurementQuery};
use chrono::NaiveDate;
use std::error::Error;
use std::io::{self, BufRead, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let location = match std::env::args().nth(1) {
        Some(location) => location,
        None => prompt("What location do you want to see? ")?,
    };

    let client = AirQuality::from_env()?;
    let day = NaiveDate::from_ymd_opt(2023, 11, 26).unwrap();
    let query = MeasurementQuery::builder()
        .date_from(day.into_utc())
        .date_to(day.succ_opt().unwrap().into_utc())
        .limit(499)
        .build();

    match client.location_history(&query, &location).await {
        Ok(points) => {
            println!("{} levels in {}:", query.parameter().label(), location);
            for point in points {
                println!(
                    "{}  {:>6.1}",
                    point.timestamp.format("%d-%m-%Y %H:%M"),
                    point.concentration
                );
            }
        }
        Err(e) if e.is_no_data() => println!("No data for '{}' on {}.", location, day),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn prompt(question: &str) -> io::Result<String> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
