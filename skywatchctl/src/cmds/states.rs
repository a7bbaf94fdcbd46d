//! This is the module handling the `states` sub-command.
//!

use eyre::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{info, trace, warn};

use skywatch_analytics::FlightPhase;
use skywatch_common::BoundingBox;
use skywatch_formats::StateList;
use skywatch_sources::{mock_states, Config, Opensky};

use crate::StatesOpts;

/// Fetch the current state vectors and render them with their flight phase.
///
#[tracing::instrument(skip(cfg))]
pub fn show_states(cfg: &Config, opts: &StatesOpts) -> Result<String> {
    trace!("show_states");

    // Restrict the query when an airport was given
    //
    let bb = match &opts.airport {
        Some(code) => {
            let apt = super::resolve_airport(code)?;
            Some(BoundingBox::from_lat_lon(apt.lat, apt.lon, opts.radius))
        }
        None => None,
    };

    let client = Opensky::with_auth(cfg.auth_for("opensky"));
    let batch = fetch_or_mock(&client, bb);

    info!("{} aircraft in batch", batch.vectors().len());
    render_states(&batch)
}

/// Live fetch with synthetic fallback.
///
fn fetch_or_mock(client: &Opensky, bb: Option<BoundingBox>) -> StateList {
    match client.states(bb) {
        Ok(batch) => batch,
        Err(e) => {
            warn!("states fetch failed ({e}), using synthetic data");
            mock_states()
        }
    }
}

fn render_states(batch: &StateList) -> Result<String> {
    let header = vec![
        "Callsign", "ICAO24", "Country", "Alt (m)", "Speed (m/s)", "V/S (m/s)", "Phase",
    ];

    let mut builder = Builder::default();
    builder.push_record(header);

    batch.vectors().iter().for_each(|s| {
        let callsign = s.callsign.clone().unwrap_or_else(|| "-".to_string());
        let alt = s
            .baro_altitude
            .map_or_else(|| "-".to_string(), |v| format!("{:.0}", v));
        let speed = s
            .velocity
            .map_or_else(|| "-".to_string(), |v| format!("{:.0}", v));
        let vrate = s
            .vertical_rate
            .map_or_else(|| "-".to_string(), |v| format!("{:+.1}", v));
        let phase = FlightPhase::of(s).to_string();

        let row = vec![
            &callsign,
            &s.icao24,
            &s.origin_country,
            &alt,
            &speed,
            &vrate,
            &phase,
        ];
        builder.push_record(row);
    });

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!(
        "{} aircraft at {}:\n{allf}",
        batch.vectors().len(),
        batch.time
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_states_empty() -> Result<()> {
        let batch = StateList {
            time: 1716823200,
            states: None,
        };
        let out = render_states(&batch)?;

        assert!(out.starts_with("0 aircraft"));
        assert!(out.contains("Phase"));
        Ok(())
    }
}
