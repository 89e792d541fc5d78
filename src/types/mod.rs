pub mod into_utc_trait;
pub mod pollutant;
pub mod query;
pub mod records;
