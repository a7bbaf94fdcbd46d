//! Module to load and process live state vectors coming from the OpenSky API.
//!
//! The `/states/all` endpoint sends out an array of arrays, each representing a
//! specific state vector, with every nullable column actually null whenever the
//! feed has no fresh report for that aircraft.  We map those positional tuples
//! onto a named struct with explicit `Option` fields.
//!
//! Documentation is taken from [The Opensky site](https://openskynetwork.github.io/opensky-api/rest.html)
//!

use eyre::Result;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use tracing::trace;

/// Origin of state's position
///
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum Source {
    #[default]
    AdsB = 0,
    Asterix,
    MLAT,
    FLARM,
}

/// This is the main container for packets sent by the API.
/// It includes a UNIX timestamp and a set of `StateVector`.
///
/// `states` is null (not an empty array) when the query matched nothing,
/// e.g. a bounding box over open ocean at night.
///
#[derive(Debug, Deserialize)]
pub struct StateList {
    /// UNIX timestamp
    pub time: i64,
    /// The state vectors
    pub states: Option<Vec<StateVector>>,
}

impl StateList {
    /// Deserialize from json
    ///
    #[tracing::instrument(skip(input))]
    pub fn from_json(input: &str) -> Result<Self> {
        trace!("statelist::from_json");

        let data: Payload = serde_json::from_str(input)?;

        let states = data.states.map(|v| {
            v.into_iter()
                .map(|r| StateVector {
                    icao24: r.0,
                    callsign: clean_callsign(r.1),
                    origin_country: r.2,
                    time_position: r.3,
                    last_contact: r.4,
                    longitude: r.5,
                    latitude: r.6,
                    baro_altitude: r.7,
                    on_ground: r.8,
                    velocity: r.9,
                    true_track: r.10,
                    vertical_rate: r.11,
                    sensors: r.12,
                    geo_altitude: r.13,
                    squawk: r.14,
                    spi: r.15,
                    position_source: r.16,
                })
                .collect::<Vec<_>>()
        });

        trace!("{} points", states.as_ref().map_or(0, Vec::len));

        Ok(StateList {
            time: data.time,
            states,
        })
    }

    /// All vectors, null payload flattened into an empty slice.
    ///
    pub fn vectors(&self) -> &[StateVector] {
        self.states.as_deref().unwrap_or_default()
    }
}

/// Definition of a state vector as generated
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StateVector {
    /// ICAO ID
    pub icao24: String,
    /// Call-sign of the vehicule, trimmed.  Can be null
    pub callsign: Option<String>,
    /// Origin Country
    pub origin_country: String,
    /// Time of last position report, UNIX timestamp.  Can be null
    pub time_position: Option<i64>,
    /// Time of last update received, UNIX timestamp
    pub last_contact: i64,
    /// Position, decimal degrees.  Can be null
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// Barometric altitude, meters.  Can be null
    pub baro_altitude: Option<f64>,
    pub on_ground: bool,
    /// Ground speed, m/s.  Can be null
    pub velocity: Option<f64>,
    /// Decimal degrees clockwise from N.  Can be null
    pub true_track: Option<f64>,
    /// m/s, positive means climbing.  Can be null
    pub vertical_rate: Option<f64>,
    /// Source sensor IDs, only present for sensor-owner queries
    pub sensors: Option<Vec<i32>>,
    /// Geometric altitude, meters.  Can be null
    pub geo_altitude: Option<f64>,
    /// Transponder code.  Can be null
    pub squawk: Option<String>,
    /// Special purpose indicator
    pub spi: bool,
    /// Position source
    pub position_source: Source,
}

impl StateVector {
    /// True when both coordinates were received.
    ///
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// The feed pads call-signs to 8 characters and sends empty strings for
/// aircraft that never reported one.  Normalise both cases away.
///
fn clean_callsign(raw: Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

// Private structs

/// Struct returned by the Opensky API
///
#[derive(Debug, Deserialize)]
struct Payload {
    /// UNIX timestamp
    pub time: i64,
    /// State vectors
    pub states: Option<Vec<Rawdata>>,
}

/// Opensky sends out tuples we need to match with real field names.
/// cf. [StateVector]
///
/// [StateVector]: https://openskynetwork.github.io/opensky-api/rest.html#all-state-vectors
///
#[derive(Debug, Deserialize)]
struct Rawdata(
    String,
    Option<String>,
    String,
    Option<i64>,
    i64,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    bool,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<Vec<i32>>,
    Option<f64>,
    Option<String>,
    bool,
    Source,
);
