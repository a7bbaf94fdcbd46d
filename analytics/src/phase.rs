//! Flight phase classification.
//!
//! A fixed decision list mapping one state vector onto a closed set of phase
//! labels.  Rules are evaluated in order, first match wins.  The thresholds
//! are constants in raw OpenSky units (altitude in meters, speeds in m/s) and
//! are not configurable.
//!

use serde::Serialize;
use strum::EnumString;

use skywatch_formats::StateVector;

/// Above this ground speed a grounded aircraft is taxiing, m/s.
const TAXI_SPEED: f64 = 5.;
/// Below this altitude we are in the takeoff/landing band, meters.
const LOW_BAND: f64 = 1000.;
/// Below this altitude we are in the approach band, meters.
const APPROACH_BAND: f64 = 3000.;
/// Above this altitude level flight counts as cruise, meters.
const CRUISE_FLOOR: f64 = 9000.;

/// The closed set of phases we report.
///
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, strum::Display, EnumString,
)]
pub enum FlightPhase {
    Parked,
    Taxiing,
    #[strum(to_string = "Taking Off")]
    TakingOff,
    Landing,
    #[strum(to_string = "Low Altitude")]
    LowAltitude,
    Climbing,
    Descending,
    Approach,
    Cruising,
    #[strum(to_string = "En Route")]
    EnRoute,
    #[default]
    Unknown,
}

impl FlightPhase {
    /// Classify a full state vector.
    ///
    pub fn of(state: &StateVector) -> Self {
        classify(
            state.baro_altitude,
            state.velocity,
            state.vertical_rate,
            state.on_ground,
        )
    }
}

/// Map (altitude, ground speed, vertical rate, ground flag) to a phase.
///
/// A missing vertical rate behaves as 0.  Missing altitude or speed on an
/// airborne aircraft means the report is too stale to call, hence `Unknown`.
///
pub fn classify(
    altitude: Option<f64>,
    velocity: Option<f64>,
    vertical_rate: Option<f64>,
    on_ground: bool,
) -> FlightPhase {
    if on_ground {
        return if velocity.unwrap_or(0.) > TAXI_SPEED {
            FlightPhase::Taxiing
        } else {
            FlightPhase::Parked
        };
    }

    let altitude = match (altitude, velocity) {
        (Some(alt), Some(_)) => alt,
        _ => return FlightPhase::Unknown,
    };
    let vrate = vertical_rate.unwrap_or(0.);

    if altitude < LOW_BAND {
        return if vrate > 2. {
            FlightPhase::TakingOff
        } else if vrate < -2. {
            FlightPhase::Landing
        } else {
            FlightPhase::LowAltitude
        };
    }

    if altitude < APPROACH_BAND {
        return if vrate > 5. {
            FlightPhase::Climbing
        } else if vrate < -5. {
            FlightPhase::Descending
        } else {
            FlightPhase::Approach
        };
    }

    if altitude > CRUISE_FLOOR && vrate.abs() < 3. {
        return FlightPhase::Cruising;
    }

    if vrate > 3. {
        FlightPhase::Climbing
    } else if vrate < -3. {
        FlightPhase::Descending
    } else {
        FlightPhase::EnRoute
    }
}
