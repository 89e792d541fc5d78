pub mod aggregate;
pub mod columns;
pub mod error;
pub mod normalize;
pub mod rank;
pub mod time_series;
