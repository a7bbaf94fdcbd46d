//! This is the module handling the `traffic` sub-command.
//!
//! Shows the recent arrivals and departures of one airport, both as a short
//! list and as an hourly histogram (local time).
//!

use chrono::Utc;
use eyre::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{info, trace, warn};

use skywatch_analytics::hourly_distribution;
use skywatch_formats::FlightRecord;
use skywatch_sources::{mock_flights, Config, Opensky};

use crate::TrafficOpts;

/// How many flights the listing shows per direction.
const LIST_MAX: usize = 10;

/// Fetch and render the recent traffic of one airport.
///
#[tracing::instrument(skip(cfg))]
pub fn show_traffic(cfg: &Config, opts: &TrafficOpts) -> Result<String> {
    trace!("show_traffic");

    let apt = super::resolve_airport(&opts.icao)?;

    let end = Utc::now().timestamp();
    let begin = end - i64::from(opts.window) * 3600;

    let client = Opensky::with_auth(cfg.auth_for("opensky"));
    let arrivals = fetch_or_mock(&client, &apt.icao, begin, end, true);
    let departures = fetch_or_mock(&client, &apt.icao, begin, end, false);

    info!(
        "{}: {} arrivals, {} departures over {}h",
        apt.icao,
        arrivals.len(),
        departures.len(),
        opts.window
    );

    let mut out = format!(
        "Traffic at {} ({}), last {}h:\n\n",
        apt.icao, apt.name, opts.window
    );
    out.push_str(&render_flights(&arrivals, true)?);
    out.push('\n');
    out.push_str(&render_flights(&departures, false)?);
    out.push('\n');
    out.push_str(&render_histogram(&arrivals, &departures)?);
    Ok(out)
}

/// Live fetch with synthetic fallback.
///
fn fetch_or_mock(
    client: &Opensky,
    icao: &str,
    begin: i64,
    end: i64,
    arrivals: bool,
) -> Vec<FlightRecord> {
    let fetched = if arrivals {
        client.arrivals(icao, begin, end)
    } else {
        client.departures(icao, begin, end)
    };
    match fetched {
        Ok(flights) => flights,
        Err(e) => {
            warn!("flights fetch failed ({e}), using synthetic data");
            mock_flights(icao, arrivals)
        }
    }
}

fn render_flights(flights: &[FlightRecord], arrivals: bool) -> Result<String> {
    let (label, other) = if arrivals {
        ("Arrivals", "From")
    } else {
        ("Departures", "To")
    };
    let header = vec!["Callsign", "ICAO24", other, "Duration"];

    let mut builder = Builder::default();
    builder.push_record(header);

    flights.iter().take(LIST_MAX).for_each(|f| {
        let callsign = f
            .callsign
            .clone()
            .map(|c| c.trim().to_string())
            .unwrap_or_else(|| "-".to_string());
        let other = if arrivals {
            f.est_departure_airport.clone()
        } else {
            f.est_arrival_airport.clone()
        }
        .unwrap_or_else(|| "????".to_string());
        let dur = f.duration_secs();
        let dur = format!("{}h{:02}m", dur / 3600, (dur % 3600) / 60);

        let row = vec![callsign, f.icao24.clone(), other, dur];
        builder.push_record(row);
    });

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("{label} ({} total):\n{allf}\n", flights.len()))
}

fn render_histogram(arrivals: &[FlightRecord], departures: &[FlightRecord]) -> Result<String> {
    let arr = hourly_distribution(arrivals, true);
    let dep = hourly_distribution(departures, false);

    let header = vec!["Hour", "Arrivals", "Departures"];

    let mut builder = Builder::default();
    builder.push_record(header);

    (0..24).for_each(|h| {
        let row = vec![
            format!("{:02}:00", h),
            "∎".repeat(arr[h] as usize),
            "∎".repeat(dep[h] as usize),
        ];
        builder.push_record(row);
    });

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("Hourly distribution (local time):\n{allf}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(first_seen: i64, last_seen: i64) -> FlightRecord {
        FlightRecord {
            icao24: "3c6675".to_string(),
            first_seen,
            est_departure_airport: Some("EDDF".to_string()),
            last_seen,
            est_arrival_airport: Some("EGLL".to_string()),
            callsign: Some("DLH456  ".to_string()),
            est_departure_airport_horiz_distance: None,
            est_departure_airport_vert_distance: None,
            est_arrival_airport_horiz_distance: None,
            est_arrival_airport_vert_distance: None,
            departure_airport_candidates_count: 1,
            arrival_airport_candidates_count: 1,
        }
    }

    #[test]
    fn test_render_flights() -> Result<()> {
        let flights = vec![flight(1716800000, 1716807200)];
        let out = render_flights(&flights, true)?;

        assert!(out.starts_with("Arrivals (1 total):"));
        assert!(out.contains("DLH456"));
        assert!(out.contains("2h00m"));
        assert!(out.contains("EDDF"));
        Ok(())
    }

    #[test]
    fn test_render_histogram_empty() -> Result<()> {
        let out = render_histogram(&[], &[])?;

        assert!(out.contains("00:00"));
        assert!(out.contains("23:00"));
        Ok(())
    }
}
