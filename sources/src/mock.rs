//! Synthetic fallback data.
//!
//! When a live fetch fails (the anonymous OpenSky tier throttles hard), the
//! caller can substitute data from here and keep the display alive.  Traffic
//! is generated clustered around the major hubs with plausible phase mixes,
//! so the downstream analytics still produce something worth looking at.
//!

use std::f64::consts::PI;

use chrono::Utc;
use rand::prelude::*;
use tracing::trace;

use skywatch_formats::{FlightRecord, Source, StateList, StateVector, WeatherReport};

/// Hubs the synthetic traffic clusters around, with a relative traffic weight.
///
/// Same airports as the embedded reference file, in file order, so every
/// airport the rankings display gets some synthetic traffic.
///
struct Hub {
    icao: &'static str,
    lat: f64,
    lon: f64,
    weight: f64,
}

const HUBS: [Hub; 15] = [
    Hub { icao: "KJFK", lat: 40.6413, lon: -73.7781, weight: 1.0 },
    Hub { icao: "EGLL", lat: 51.4700, lon: -0.4543, weight: 0.95 },
    Hub { icao: "LFPG", lat: 49.0097, lon: 2.5479, weight: 0.9 },
    Hub { icao: "EDDF", lat: 50.0379, lon: 8.5622, weight: 0.85 },
    Hub { icao: "EHAM", lat: 52.3086, lon: 4.7639, weight: 0.8 },
    Hub { icao: "KLAX", lat: 33.9425, lon: -118.4081, weight: 0.95 },
    Hub { icao: "RJTT", lat: 35.5494, lon: 139.7798, weight: 0.85 },
    Hub { icao: "VHHH", lat: 22.3080, lon: 113.9185, weight: 0.8 },
    Hub { icao: "WSSS", lat: 1.3644, lon: 103.9915, weight: 0.75 },
    Hub { icao: "OMDB", lat: 25.2532, lon: 55.3657, weight: 0.8 },
    Hub { icao: "KATL", lat: 33.6407, lon: -84.4277, weight: 0.95 },
    Hub { icao: "KORD", lat: 41.9742, lon: -87.9073, weight: 0.9 },
    Hub { icao: "ZBAA", lat: 40.0799, lon: 116.6031, weight: 0.85 },
    Hub { icao: "YSSY", lat: -33.9399, lon: 151.1753, weight: 0.8 },
    Hub { icao: "LEMD", lat: 40.4983, lon: -3.5676, weight: 0.75 },
];

const AIRLINES: [&str; 14] = [
    "AAL", "UAL", "DAL", "SWA", "BAW", "DLH", "AFR", "KLM", "JAL", "ANA", "CPA", "SIA", "QFA",
    "UAE",
];

const COUNTRIES: [&str; 8] = [
    "United States",
    "United Kingdom",
    "Germany",
    "France",
    "Japan",
    "China",
    "United Arab Emirates",
    "Singapore",
];

/// WMO codes the fake weather picks from.
const WX_CODES: [u32; 8] = [0, 1, 2, 3, 45, 61, 63, 80];

/// Generate a batch of synthetic state vectors clustered around the hubs.
///
#[tracing::instrument]
pub fn mock_states() -> StateList {
    trace!("mock::states");

    let mut rng = rand::thread_rng();
    let now = Utc::now().timestamp();
    let mut states = vec![];

    for hub in &HUBS {
        // Traffic volume varies by hub weight
        //
        let count = (8. + rng.gen::<f64>() * 25. * hub.weight).floor() as usize;

        for _ in 0..count {
            // Random position within ~70-80 km of the hub
            //
            let angle = rng.gen::<f64>() * 2. * PI;
            let dist = rng.gen::<f64>() * 0.7;
            let lat = hub.lat + angle.sin() * dist;
            let lon = hub.lon + angle.cos() * dist;

            // Phase mix: some parked, some circling, some on approach,
            // the rest climbing out or passing through
            //
            let r = rng.gen::<f64>();
            let on_ground = r < 0.15;
            let holding = !on_ground && r < 0.25;
            let approaching = !on_ground && !holding && r < 0.5;

            let (altitude, velocity, vertical_rate) = if on_ground {
                (0., rng.gen_range(0.0..30.), 0.)
            } else if holding {
                (
                    rng.gen_range(1000.0..2500.),
                    rng.gen_range(80.0..130.),
                    rng.gen_range(-1.5..1.5),
                )
            } else if approaching {
                (
                    rng.gen_range(500.0..3500.),
                    rng.gen_range(100.0..180.),
                    -rng.gen_range(2.0..10.),
                )
            } else {
                (
                    rng.gen_range(3000.0..11000.),
                    rng.gen_range(150.0..300.),
                    rng.gen_range(0.0..10.),
                )
            };

            states.push(StateVector {
                icao24: format!("{:06x}", rng.gen_range(0..0x100_0000)),
                callsign: Some(format!(
                    "{}{}",
                    AIRLINES[rng.gen_range(0..AIRLINES.len())],
                    rng.gen_range(1000..10000)
                )),
                origin_country: COUNTRIES[rng.gen_range(0..COUNTRIES.len())].to_string(),
                time_position: Some(now),
                last_contact: now,
                longitude: Some(lon),
                latitude: Some(lat),
                baro_altitude: Some(altitude),
                on_ground,
                velocity: Some(velocity),
                true_track: Some(rng.gen_range(0.0..360.)),
                vertical_rate: Some(vertical_rate),
                sensors: None,
                geo_altitude: Some(altitude),
                squawk: Some(format!("{:04}", rng.gen_range(0..7777))),
                spi: false,
                position_source: Source::AdsB,
            });
        }
    }

    StateList {
        time: now,
        states: Some(states),
    }
}

/// Generate a synthetic arrival or departure list for one airport,
/// most recent first.
///
#[tracing::instrument]
pub fn mock_flights(icao: &str, arrivals: bool) -> Vec<FlightRecord> {
    trace!("mock::flights");

    let mut rng = rand::thread_rng();
    let now = Utc::now().timestamp();
    let mut flights = vec![];

    for _ in 0..20 {
        // 1-11 hours in the air, ended some time in the last two hours
        //
        let duration = rng.gen_range(3600..11 * 3600);
        let last_seen = now - rng.gen_range(0..7200);
        let first_seen = last_seen - duration;

        let other = HUBS[rng.gen_range(0..HUBS.len())].icao.to_string();
        let (dep, arr) = if arrivals {
            (Some(other), Some(icao.to_string()))
        } else {
            (Some(icao.to_string()), Some(other))
        };

        flights.push(FlightRecord {
            icao24: format!("{:06x}", rng.gen_range(0..0x100_0000)),
            first_seen,
            est_departure_airport: dep,
            last_seen,
            est_arrival_airport: arr,
            callsign: Some(format!("FL{}", rng.gen_range(1000..10000))),
            est_departure_airport_horiz_distance: Some(rng.gen_range(0.0..5000.)),
            est_departure_airport_vert_distance: Some(rng.gen_range(0.0..500.)),
            est_arrival_airport_horiz_distance: Some(rng.gen_range(0.0..5000.)),
            est_arrival_airport_vert_distance: Some(rng.gen_range(0.0..500.)),
            departure_airport_candidates_count: 1,
            arrival_airport_candidates_count: 1,
        });
    }

    flights.sort_by(|a, b| b.last_seen.cmp(&a.last_seen));
    flights
}

/// Generate plausible current conditions.
///
#[tracing::instrument]
pub fn mock_weather() -> WeatherReport {
    trace!("mock::weather");

    let mut rng = rand::thread_rng();

    WeatherReport {
        temperature: rng.gen_range(5.0..35.),
        wind_speed: rng.gen_range(0.0..30.),
        wind_direction: rng.gen_range(0.0..360.),
        visibility: rng.gen_range(1000.0..10000.),
        cloud_cover: rng.gen_range(0.0..100.),
        precipitation: if rng.gen::<f64>() < 0.3 {
            rng.gen_range(0.0..5.)
        } else {
            0.
        },
        weather_code: WX_CODES[rng.gen_range(0..WX_CODES.len())],
    }
}

#[cfg(test)]
mod tests {
    use skywatch_formats::{find_airport, load_airports};

    use super::*;

    #[test]
    fn test_hubs_match_airport_file() {
        let airports = load_airports(None).unwrap();

        assert_eq!(airports.len(), HUBS.len());
        for (hub, apt) in HUBS.iter().zip(airports.iter()) {
            // same airports, same order as the reference file
            //
            assert_eq!(apt.icao, hub.icao);

            let known = find_airport(&airports, hub.icao).unwrap();
            assert!((known.lat - hub.lat).abs() < 0.01, "{} lat", hub.icao);
            assert!((known.lon - hub.lon).abs() < 0.01, "{} lon", hub.icao);
        }
    }

    #[test]
    fn test_mock_states_shape() {
        let batch = mock_states();
        let states = batch.vectors();

        // at least 8 aircraft per hub
        //
        assert!(states.len() >= 8 * HUBS.len());
        assert!(batch.time > 0);

        for s in states {
            assert!(s.has_position());
            assert_eq!(6, s.icao24.len());
            assert!(s.baro_altitude.is_some());
        }
    }

    #[test]
    fn test_mock_flights_sorted() {
        let flights = mock_flights("EGLL", true);

        assert_eq!(20, flights.len());
        assert!(flights.windows(2).all(|w| w[0].last_seen >= w[1].last_seen));

        for f in &flights {
            assert_eq!(Some("EGLL".to_string()), f.est_arrival_airport);
            assert!(f.duration_secs() >= 3600);
        }
    }

    #[test]
    fn test_mock_flights_departures() {
        let flights = mock_flights("KJFK", false);
        for f in &flights {
            assert_eq!(Some("KJFK".to_string()), f.est_departure_airport);
        }
    }

    #[test]
    fn test_mock_weather_ranges() {
        let wx = mock_weather();

        assert!(wx.temperature >= 5. && wx.temperature < 35.);
        assert!(wx.cloud_cover <= 100.);
        assert!(WX_CODES.contains(&wx.weather_code));
        assert_ne!("Unknown", wx.describe());
    }
}
