//! This is the module handling the `weather` sub-command.
//!

use eyre::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{info, trace, warn};

use skywatch_formats::{Airport, WeatherReport};
use skywatch_sources::{mock_weather, OpenMeteo};

use crate::AirportOpts;

/// Fetch and render the current conditions at one airport.
///
/// Open-Meteo is anonymous, no credentials involved.
///
#[tracing::instrument]
pub fn show_weather(opts: &AirportOpts) -> Result<String> {
    trace!("show_weather");

    let apt = super::resolve_airport(&opts.icao)?;

    let client = OpenMeteo::new();
    let wx = match client.current_weather(apt.lat, apt.lon) {
        Ok(wx) => wx,
        Err(e) => {
            warn!("weather fetch failed ({e}), using synthetic data");
            mock_weather()
        }
    };

    info!("{}: {} ({:.1}°C)", apt.icao, wx.describe(), wx.temperature);
    render_weather(&apt, &wx)
}

fn render_weather(apt: &Airport, wx: &WeatherReport) -> Result<String> {
    let header = vec!["Conditions", "Value"];

    let mut builder = Builder::default();
    builder.push_record(header);
    builder.push_record(vec!["Sky", wx.describe()]);
    builder.push_record(vec!["Temperature", &format!("{:.1} °C", wx.temperature)]);
    builder.push_record(vec![
        "Wind",
        &format!("{:.0} km/h from {:.0}°", wx.wind_speed, wx.wind_direction),
    ]);
    builder.push_record(vec!["Visibility", &format!("{:.0} m", wx.visibility)]);
    builder.push_record(vec!["Cloud cover", &format!("{:.0} %", wx.cloud_cover)]);
    builder.push_record(vec![
        "Precipitation",
        &format!("{:.1} mm", wx.precipitation),
    ]);

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("Weather at {} ({}):\n{allf}", apt.icao, apt.name))
}
