//! Open-Meteo client, current conditions only.
//!
//! Anonymous, no API key.  We always request the same set of `current=`
//! variables; the decode lives in `skywatch_formats::weather`.
//!

use clap::{crate_name, crate_version};
use eyre::Result;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, trace};

use skywatch_formats::WeatherReport;

use crate::http_get_basic;
use crate::{Auth, SourceError};

/// Default API endpoint
const BASE_URL: &str = "https://api.open-meteo.com/v1";

/// The `current=` variable list we always ask for.
const CURRENT_VARS: &str = "temperature_2m,wind_speed_10m,wind_direction_10m,cloud_cover,precipitation,weather_code,visibility";

/// This is the Open-Meteo client/source struct.
///
#[derive(Clone, Debug)]
pub struct OpenMeteo {
    /// Base site url, overridable for tests
    base_url: String,
    /// Always `Anon`, kept for the shared GET macro
    auth: Auth,
    /// reqwest blocking client
    client: Client,
}

impl OpenMeteo {
    #[tracing::instrument]
    pub fn new() -> Self {
        trace!("openmeteo::new");

        OpenMeteo {
            base_url: BASE_URL.to_owned(),
            auth: Auth::Anon,
            client: Client::new(),
        }
    }

    /// Fetch the current conditions at a coordinate.
    ///
    #[tracing::instrument(skip(self))]
    pub fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherReport> {
        trace!("openmeteo::current_weather");

        let url = self.forecast_url(lat, lon);
        trace!("Fetching data from {}…", url);

        let resp = http_get_basic!(self, url)?;

        debug!("{:?}", &resp);

        match resp.status() {
            StatusCode::OK => (),
            code => {
                let h = format!("{:?}", resp.headers());
                return Err(SourceError::Status(code.as_u16(), h).into());
            }
        }

        WeatherReport::from_json(&resp.text()?)
    }

    fn forecast_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}",
            self.base_url, lat, lon, CURRENT_VARS
        )
    }
}

impl Default for OpenMeteo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_url() {
        let client = OpenMeteo::new();
        let url = client.forecast_url(51.47, -0.4543);

        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?latitude=51.47&longitude=-0.4543"));
        assert!(url.contains("temperature_2m"));
        assert!(url.contains("visibility"));
    }
}
