//! Congestion assessment around one airport.
//!
//! Takes the current observation batch and the airport coordinates, buckets
//! the nearby traffic into a few categories and folds the counts into a
//! weighted score, clamped to 0..=100.  A heuristic for dashboards, not a
//! validated delay model.
//!

use serde::Serialize;
use strum::EnumString;
use tracing::trace;

use skywatch_common::distance;
use skywatch_formats::StateVector;

/// Airborne traffic within this radius counts as inbound, km.
const INBOUND_RADIUS_KM: f64 = 100.;
/// Ground traffic within this radius counts as the airport's, km.
const GROUND_RADIUS_KM: f64 = 10.;
/// Holding band, meters (exclusive bounds).
const HOLDING_ALT_MIN: f64 = 500.;
const HOLDING_ALT_MAX: f64 = 3000.;
/// Below this ground speed a low-flying aircraft may be circling, m/s.
const HOLDING_SPEED: f64 = 150.;
/// Altitude ceilings for the approach/departure buckets, meters.
const APPROACH_CEILING: f64 = 3000.;
const DEPARTURE_CEILING: f64 = 5000.;

/// Discrete congestion bands derived from the score.
///
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, strum::Display, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    #[default]
    Low,
    Moderate,
    High,
    Severe,
}

impl CongestionLevel {
    /// Band cut-points are fixed at 25/50/75.
    ///
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=24 => CongestionLevel::Low,
            25..=49 => CongestionLevel::Moderate,
            50..=74 => CongestionLevel::High,
            _ => CongestionLevel::Severe,
        }
    }
}

/// Everything we derive for one airport out of one observation batch.
///
/// The categories overlap on purpose: an aircraft can be counted as both
/// holding and approaching.  This mirrors how the buckets are defined, do
/// not deduplicate.
///
#[derive(Clone, Debug, Default, Serialize)]
pub struct CongestionAssessment {
    /// Weighted score, clamped to 0..=100
    pub score: u32,
    /// Discrete band for the score
    pub level: CongestionLevel,
    /// Airborne within 100 km
    pub inbound: usize,
    /// Inbound, low and slow
    pub holding: usize,
    /// On the ground within 10 km
    pub on_ground: usize,
    /// Inbound, low and descending
    pub approaching: usize,
    /// Inbound, below 5000 m and climbing
    pub departing: usize,
    /// Rough delay estimate, minutes
    pub estimated_delay: u32,
}

/// True when the vector sits in the holding band.
///
/// Missing altitude or speed falls back to 0 here: no altitude means the
/// band check fails on its own, and a missing speed never disqualifies.
///
pub(crate) fn is_holding(state: &StateVector) -> bool {
    let alt = state.baro_altitude.unwrap_or(0.);
    let speed = state.velocity.unwrap_or(0.);
    alt > HOLDING_ALT_MIN && alt < HOLDING_ALT_MAX && speed < HOLDING_SPEED
}

/// Assess the congestion around one airport.
///
/// Total over its inputs: an empty batch yields the zero assessment with
/// level `low`, never an error.
///
#[tracing::instrument(skip(states))]
pub fn assess(states: &[StateVector], lat: f64, lon: f64) -> CongestionAssessment {
    trace!("congestion::assess");

    let inbound: Vec<&StateVector> = states
        .iter()
        .filter(|a| match (a.latitude, a.longitude) {
            (Some(alat), Some(alon)) => {
                !a.on_ground && distance(lat, lon, alat, alon) < INBOUND_RADIUS_KM
            }
            _ => false,
        })
        .collect();

    let holding = inbound.iter().filter(|a| is_holding(a)).count();

    let on_ground = states
        .iter()
        .filter(|a| match (a.latitude, a.longitude) {
            (Some(alat), Some(alon)) => {
                a.on_ground && distance(lat, lon, alat, alon) < GROUND_RADIUS_KM
            }
            _ => false,
        })
        .count();

    let approaching = inbound
        .iter()
        .filter(|a| {
            a.baro_altitude.unwrap_or(0.) < APPROACH_CEILING
                && a.vertical_rate.unwrap_or(0.) < -2.
        })
        .count();

    let departing = inbound
        .iter()
        .filter(|a| {
            a.baro_altitude.unwrap_or(0.) < DEPARTURE_CEILING
                && a.vertical_rate.unwrap_or(0.) > 2.
        })
        .count();

    let inbound = inbound.len();

    // Weighted linear combination, capped
    //
    let score = (inbound * 2 + holding * 10 + on_ground * 3 + approaching * 5).min(100) as u32;
    let level = CongestionLevel::from_score(score);

    let estimated_delay = (holding * 5 + approaching.saturating_sub(3) * 2) as u32;

    CongestionAssessment {
        score,
        level,
        inbound,
        holding,
        on_ground,
        approaching,
        departing,
        estimated_delay,
    }
}
