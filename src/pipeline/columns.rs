//! Column names of the working measurement table.

// Renamed columns, always present after normalization.
pub const LOCATION: &str = "Location";
pub const LATITUDE: &str = "Latitude";
pub const LONGITUDE: &str = "Longitude";
pub const CONCENTRATION: &str = "Concentration";

// Added by the ranker.
pub const RANK: &str = "Rank";

// Flattened API field holding the station-local timestamp.
pub const LOCAL_TIME: &str = "date.local";

/// Maps a flattened API field name to its column name in the working table.
pub(crate) fn renamed(field: &str) -> &str {
    match field {
        "value" => CONCENTRATION,
        "coordinates.latitude" => LATITUDE,
        "coordinates.longitude" => LONGITUDE,
        "location" => LOCATION,
        other => other,
    }
}

/// The renamed columns, in the order they lead the normalized table.
pub(crate) const REQUIRED: [&str; 4] = [LOCATION, LATITUDE, LONGITUDE, CONCENTRATION];
