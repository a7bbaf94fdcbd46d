//! Airport rankings over the whole reference list.
//!
//! For every airport we summarise the traffic within 100 km, then sort the
//! list by the requested category.  The sort is stable: airports with equal
//! keys keep their reference-list order.
//!

use serde::Serialize;
use strum::EnumString;
use tracing::trace;

use skywatch_common::distance;
use skywatch_formats::{Airport, StateVector};

use crate::congestion::is_holding;

/// Traffic within this radius belongs to the airport, km.
const NEARBY_RADIUS_KM: f64 = 100.;

/// What to order the airports by.
///
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, strum::Display, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum RankingCategory {
    /// Most aircraft nearby
    #[default]
    Busiest,
    /// Highest reliability score
    Reliable,
    /// Most aircraft in the holding band
    Holding,
}

/// Per-airport traffic summary for one observation batch.
///
#[derive(Clone, Debug, Serialize)]
pub struct TrafficSummary {
    /// The airport being summarised
    pub airport: Airport,
    /// Aircraft with a position within 100 km, airborne or not
    pub total_nearby: usize,
    /// Airborne subset
    pub inbound: usize,
    /// On-ground subset
    pub grounded: usize,
    /// Airborne, low and slow
    pub holding: usize,
    /// inbound + 3·holding + 0.5·grounded
    pub congestion_score: f64,
    /// max(0, 100 − congestion)
    pub reliability_score: f64,
}

/// Summarise the traffic around a single airport.
///
#[tracing::instrument(skip(airport, states), fields(icao = %airport.icao))]
pub fn summarize(airport: &Airport, states: &[StateVector]) -> TrafficSummary {
    trace!("ranking::summarize");

    let nearby: Vec<&StateVector> = states
        .iter()
        .filter(|a| match (a.latitude, a.longitude) {
            (Some(alat), Some(alon)) => {
                distance(airport.lat, airport.lon, alat, alon) < NEARBY_RADIUS_KM
            }
            _ => false,
        })
        .collect();

    let inbound = nearby.iter().filter(|a| !a.on_ground).count();
    let grounded = nearby.iter().filter(|a| a.on_ground).count();
    let holding = nearby
        .iter()
        .filter(|a| !a.on_ground && is_holding(a))
        .count();

    let congestion_score = inbound as f64 + holding as f64 * 3. + grounded as f64 * 0.5;
    let reliability_score = (100. - congestion_score).max(0.);

    TrafficSummary {
        airport: airport.clone(),
        total_nearby: nearby.len(),
        inbound,
        grounded,
        holding,
        congestion_score,
        reliability_score,
    }
}

/// Rank the airport list by the given category, most significant first.
///
#[tracing::instrument(skip(airports, states))]
pub fn rank(
    airports: &[Airport],
    states: &[StateVector],
    category: RankingCategory,
) -> Vec<TrafficSummary> {
    trace!("ranking::rank");

    let mut all: Vec<TrafficSummary> = airports.iter().map(|a| summarize(a, states)).collect();

    // `sort_by` is stable so equal keys keep the reference-list order
    //
    match category {
        RankingCategory::Busiest => all.sort_by(|a, b| b.total_nearby.cmp(&a.total_nearby)),
        RankingCategory::Reliable => {
            all.sort_by(|a, b| b.reliability_score.total_cmp(&a.reliability_score))
        }
        RankingCategory::Holding => all.sort_by(|a, b| b.holding.cmp(&a.holding)),
    }

    all
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use eyre::Result;

    use skywatch_formats::{load_airports, Source};

    use super::*;

    fn sv_at(lat: f64, lon: f64, alt: Option<f64>, speed: Option<f64>, on_ground: bool) -> StateVector {
        StateVector {
            icao24: "abc123".to_string(),
            callsign: None,
            origin_country: "United States".to_string(),
            time_position: None,
            last_contact: 1716823199,
            longitude: Some(lon),
            latitude: Some(lat),
            baro_altitude: alt,
            on_ground,
            velocity: speed,
            true_track: None,
            vertical_rate: None,
            sensors: None,
            geo_altitude: None,
            squawk: None,
            spi: false,
            position_source: Source::AdsB,
        }
    }

    #[test]
    fn test_category_from_str() -> Result<()> {
        assert_eq!(RankingCategory::Busiest, RankingCategory::from_str("busiest")?);
        assert_eq!(RankingCategory::Reliable, RankingCategory::from_str("Reliable")?);
        assert!(RankingCategory::from_str("loudest").is_err());
        Ok(())
    }

    #[test]
    fn test_summarize_partition() -> Result<()> {
        let airports = load_airports(None)?;
        let jfk = &airports[0];

        let states = vec![
            sv_at(jfk.lat, jfk.lon, Some(1500.), Some(100.), false), // holding
            sv_at(jfk.lat + 0.1, jfk.lon, Some(11000.), Some(250.), false),
            sv_at(jfk.lat, jfk.lon, Some(0.), Some(2.), true),
        ];

        let out = summarize(jfk, &states);
        assert_eq!(3, out.total_nearby);
        assert_eq!(2, out.inbound);
        assert_eq!(1, out.grounded);
        assert_eq!(1, out.holding);
        assert_eq!(2. + 3. + 0.5, out.congestion_score);
        assert_eq!(100. - 5.5, out.reliability_score);
        Ok(())
    }

    #[test]
    fn test_rank_busiest() -> Result<()> {
        let airports = load_airports(None)?;
        let lhr = airports.iter().find(|a| a.icao == "EGLL").unwrap();

        // two around LHR, none anywhere else
        //
        let states = vec![
            sv_at(lhr.lat, lhr.lon, Some(11000.), Some(250.), false),
            sv_at(lhr.lat + 0.2, lhr.lon, Some(9000.), Some(240.), false),
        ];

        let ranked = rank(&airports, &states, RankingCategory::Busiest);
        assert_eq!("EGLL", ranked[0].airport.icao);
        assert_eq!(2, ranked[0].total_nearby);
        Ok(())
    }

    #[test]
    fn test_rank_stable_on_ties() -> Result<()> {
        let airports = load_airports(None)?;

        // empty batch: every airport scores the same, order must be preserved
        //
        let ranked = rank(&airports, &[], RankingCategory::Busiest);
        let order: Vec<&str> = ranked.iter().map(|t| t.airport.icao.as_str()).collect();
        let reference: Vec<&str> = airports.iter().map(|a| a.icao.as_str()).collect();
        assert_eq!(reference, order);

        let ranked = rank(&airports, &[], RankingCategory::Reliable);
        let order: Vec<&str> = ranked.iter().map(|t| t.airport.icao.as_str()).collect();
        assert_eq!(reference, order);
        Ok(())
    }

    #[test]
    fn test_rank_reliable_is_inverse_of_congestion() -> Result<()> {
        let airports = load_airports(None)?;
        let cdg = airports.iter().find(|a| a.icao == "LFPG").unwrap();

        // pile holding traffic onto CDG, it must come out last on reliability
        //
        let states: Vec<StateVector> = (0..10)
            .map(|_| sv_at(cdg.lat, cdg.lon, Some(1000.), Some(90.), false))
            .collect();

        let ranked = rank(&airports, &states, RankingCategory::Reliable);
        assert_eq!("LFPG", ranked.last().unwrap().airport.icao);

        let ranked = rank(&airports, &states, RankingCategory::Holding);
        assert_eq!("LFPG", ranked[0].airport.icao);
        assert_eq!(10, ranked[0].holding);
        Ok(())
    }
}
