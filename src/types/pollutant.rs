//! Defines the pollutant parameters the measurements endpoint can be queried for.

use std::fmt;
use std::str::FromStr;

/// A pollutant parameter accepted by the `parameter` query key.
///
/// # Examples
///
/// ```
/// use airquality::Pollutant;
///
/// assert_eq!(Pollutant::Pm25.to_string(), "pm25");
/// assert_eq!("no2".parse::<Pollutant>(), Ok(Pollutant::No2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pollutant {
    /// Fine particulate matter, 2.5 μm or less.
    #[default]
    Pm25,
    /// Particulate matter, 10 μm or less.
    Pm10,
    /// Ozone.
    O3,
    /// Nitrogen dioxide.
    No2,
    /// Sulphur dioxide.
    So2,
    /// Carbon monoxide.
    Co,
    /// Black carbon.
    Bc,
}

impl Pollutant {
    /// The value sent as the `parameter` query key.
    pub fn parameter_name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::O3 => "o3",
            Pollutant::No2 => "no2",
            Pollutant::So2 => "so2",
            Pollutant::Co => "co",
            Pollutant::Bc => "bc",
        }
    }

    /// Human readable label used for axis and table headings, e.g. `PM2.5 (μg/m³)`.
    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5 (μg/m³)",
            Pollutant::Pm10 => "PM10 (μg/m³)",
            Pollutant::O3 => "O₃ (ppm)",
            Pollutant::No2 => "NO₂ (ppm)",
            Pollutant::So2 => "SO₂ (ppm)",
            Pollutant::Co => "CO (ppm)",
            Pollutant::Bc => "BC (μg/m³)",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parameter_name())
    }
}

impl FromStr for Pollutant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pm25" | "pm2.5" => Ok(Pollutant::Pm25),
            "pm10" => Ok(Pollutant::Pm10),
            "o3" => Ok(Pollutant::O3),
            "no2" => Ok(Pollutant::No2),
            "so2" => Ok(Pollutant::So2),
            "co" => Ok(Pollutant::Co),
            "bc" => Ok(Pollutant::Bc),
            other => Err(format!("'{}' is not a supported pollutant parameter", other)),
        }
    }
}
