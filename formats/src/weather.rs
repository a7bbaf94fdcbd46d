//! Current weather conditions from the Open-Meteo forecast API.
//!
//! Used for independent display next to an airport, never folded into any
//! traffic score.
//!
//! Documentation: [Open-Meteo](https://open-meteo.com/en/docs)
//!

use eyre::Result;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Visibility the API omits outside of bad weather, meters.
const DEF_VISIBILITY: f64 = 10_000.;

/// Current conditions at a coordinate.
///
#[derive(Clone, Debug, Serialize)]
pub struct WeatherReport {
    /// °C at 2m
    pub temperature: f64,
    /// km/h at 10m
    pub wind_speed: f64,
    /// Degrees clockwise from N
    pub wind_direction: f64,
    /// Meters
    pub visibility: f64,
    /// Percent
    pub cloud_cover: f64,
    /// mm over the last hour
    pub precipitation: f64,
    /// WMO weather interpretation code
    pub weather_code: u32,
}

impl WeatherReport {
    /// Deserialize from the forecast payload.
    ///
    #[tracing::instrument(skip(input))]
    pub fn from_json(input: &str) -> Result<Self> {
        trace!("weatherreport::from_json");

        let data: Forecast = serde_json::from_str(input)?;
        let current = data.current;

        Ok(WeatherReport {
            temperature: current.temperature_2m,
            wind_speed: current.wind_speed_10m,
            wind_direction: current.wind_direction_10m,
            visibility: current.visibility.unwrap_or(DEF_VISIBILITY),
            cloud_cover: current.cloud_cover,
            precipitation: current.precipitation,
            weather_code: current.weather_code,
        })
    }

    /// Human label for our weather code.
    ///
    pub fn describe(&self) -> &'static str {
        describe_code(self.weather_code)
    }
}

/// Map a WMO weather interpretation code to a human label.
///
pub fn describe_code(code: u32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

// Private structs

/// Relevant part of the forecast answer.
///
#[derive(Debug, Deserialize)]
struct Forecast {
    current: Current,
}

/// The `current=` variables we request.
///
#[derive(Debug, Deserialize)]
struct Current {
    temperature_2m: f64,
    wind_speed_10m: f64,
    wind_direction_10m: f64,
    cloud_cover: f64,
    precipitation: f64,
    weather_code: u32,
    /// Only present when the variable list asks for it and the model has it
    visibility: Option<f64>,
}
