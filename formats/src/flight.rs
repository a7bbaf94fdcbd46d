//! Per-flight summaries from the OpenSky `/flights/arrival` and
//! `/flights/departure` endpoints.
//!
//! Unlike the state vector feed these come out as proper JSON objects,
//! camelCase field names and all.  Airport attribution is an estimate made
//! by OpenSky, hence the `est_` prefixes and the candidate counts.
//!

use serde::{Deserialize, Serialize};

/// One completed-or-ongoing flight as seen by the network.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    /// ICAO ID
    pub icao24: String,
    /// First seen, UNIX timestamp
    pub first_seen: i64,
    /// Estimated departure airport (ICAO).  Can be null
    pub est_departure_airport: Option<String>,
    /// Last seen, UNIX timestamp
    pub last_seen: i64,
    /// Estimated arrival airport (ICAO).  Can be null
    pub est_arrival_airport: Option<String>,
    /// Call-sign.  Can be null
    pub callsign: Option<String>,
    /// Horizontal distance from the last position to the departure airport, meters
    pub est_departure_airport_horiz_distance: Option<f64>,
    /// Vertical distance, meters
    pub est_departure_airport_vert_distance: Option<f64>,
    /// Horizontal distance from the last position to the arrival airport, meters
    pub est_arrival_airport_horiz_distance: Option<f64>,
    /// Vertical distance, meters
    pub est_arrival_airport_vert_distance: Option<f64>,
    /// Number of airports within the departure attribution radius
    pub departure_airport_candidates_count: u32,
    /// Number of airports within the arrival attribution radius
    pub arrival_airport_candidates_count: u32,
}

impl FlightRecord {
    /// Observed flight duration in seconds.
    ///
    pub fn duration_secs(&self) -> i64 {
        self.last_seen - self.first_seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
[
  {
    "icao24": "3c6675",
    "firstSeen": 1716800000,
    "estDepartureAirport": "EDDF",
    "lastSeen": 1716807200,
    "estArrivalAirport": "EGLL",
    "callsign": "DLH456  ",
    "estDepartureAirportHorizDistance": 1523.0,
    "estDepartureAirportVertDistance": 112.0,
    "estArrivalAirportHorizDistance": 980.0,
    "estArrivalAirportVertDistance": 54.0,
    "departureAirportCandidatesCount": 1,
    "arrivalAirportCandidatesCount": 2
  },
  {
    "icao24": "a835af",
    "firstSeen": 1716790000,
    "estDepartureAirport": null,
    "lastSeen": 1716801000,
    "estArrivalAirport": "KJFK",
    "callsign": null,
    "estDepartureAirportHorizDistance": null,
    "estDepartureAirportVertDistance": null,
    "estArrivalAirportHorizDistance": 2100.0,
    "estArrivalAirportVertDistance": 89.0,
    "departureAirportCandidatesCount": 0,
    "arrivalAirportCandidatesCount": 1
  }
]
"##;

    #[test]
    fn test_flightrecord_decode() {
        let flights: Vec<FlightRecord> = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(2, flights.len());
        assert_eq!("3c6675", flights[0].icao24);
        assert_eq!(Some("EGLL".to_string()), flights[0].est_arrival_airport);
        assert_eq!(7200, flights[0].duration_secs());

        assert_eq!(None, flights[1].est_departure_airport);
        assert_eq!(0, flights[1].departure_airport_candidates_count);
    }
}
