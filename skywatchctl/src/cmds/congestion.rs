//! This is the module handling the `congestion` sub-command.
//!

use eyre::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{info, trace, warn};

use skywatch_analytics::{assess, CongestionAssessment};
use skywatch_common::BoundingBox;
use skywatch_formats::Airport;
use skywatch_sources::{mock_states, Config, Opensky};

use crate::AirportOpts;

/// Inbound traffic radius for the area query, km.
const QUERY_RADIUS_KM: u32 = 100;

/// Assess and render the congestion around one airport.
///
#[tracing::instrument(skip(cfg))]
pub fn show_congestion(cfg: &Config, opts: &AirportOpts) -> Result<String> {
    trace!("show_congestion");

    let apt = super::resolve_airport(&opts.icao)?;
    let bb = BoundingBox::from_lat_lon(apt.lat, apt.lon, QUERY_RADIUS_KM);

    let client = Opensky::with_auth(cfg.auth_for("opensky"));
    let batch = match client.states(Some(bb)) {
        Ok(batch) => batch,
        Err(e) => {
            warn!("states fetch failed ({e}), using synthetic data");
            mock_states()
        }
    };

    let out = assess(batch.vectors(), apt.lat, apt.lon);
    info!("{}: score {} ({})", apt.icao, out.score, out.level);

    render_congestion(&apt, &out)
}

fn render_congestion(apt: &Airport, ca: &CongestionAssessment) -> Result<String> {
    let header = vec!["Indicator", "Value"];

    let mut builder = Builder::default();
    builder.push_record(header);
    builder.push_record(vec!["Score", &format!("{} / 100", ca.score)]);
    builder.push_record(vec!["Level", &ca.level.to_string()]);
    builder.push_record(vec!["Inbound (100 km)", &ca.inbound.to_string()]);
    builder.push_record(vec!["Holding", &ca.holding.to_string()]);
    builder.push_record(vec!["On ground (10 km)", &ca.on_ground.to_string()]);
    builder.push_record(vec!["Approaching", &ca.approaching.to_string()]);
    builder.push_record(vec!["Departing", &ca.departing.to_string()]);
    builder.push_record(vec![
        "Estimated delay",
        &format!("{} min", ca.estimated_delay),
    ]);

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("Congestion around {} ({}):\n{allf}", apt.icao, apt.name))
}
