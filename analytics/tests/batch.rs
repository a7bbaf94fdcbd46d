//! End-to-end check: decode a raw OpenSky payload, then run the whole
//! analytics pass over it the way a dashboard refresh would.
//!

use eyre::Result;

use skywatch_analytics::{assess, classify, rank, CongestionLevel, FlightPhase, RankingCategory};
use skywatch_formats::{load_airports, StateList};

/// Three aircraft around JFK: one holding, one landing, one taxiing.
const PAYLOAD: &str = r##"
{
  "time": 1716823200,
  "states": [
    ["a1b2c3", "DAL100  ", "United States", 1716823195, 1716823199,
     -73.7781, 40.6413, 1500.0, false, 100.0, 180.0, 0.5,
     null, 1550.0, "2200", false, 0],
    ["d4e5f6", "JBU42   ", "United States", 1716823190, 1716823199,
     -73.8, 40.7, 600.0, false, 90.0, 220.0, -3.5,
     null, 640.0, "2301", false, 0],
    ["0a1b2c", null, "United States", 1716823180, 1716823199,
     -73.7781, 40.6413, null, true, 8.0, null, null,
     null, null, null, false, 0]
  ]
}
"##;

#[test]
fn test_refresh_cycle() -> Result<()> {
    let batch = StateList::from_json(PAYLOAD)?;
    let states = batch.vectors();
    assert_eq!(3, states.len());

    // Phases
    //
    let phases: Vec<FlightPhase> = states
        .iter()
        .map(|s| classify(s.baro_altitude, s.velocity, s.vertical_rate, s.on_ground))
        .collect();
    assert_eq!(
        vec![
            FlightPhase::Approach,
            FlightPhase::Landing,
            FlightPhase::Taxiing
        ],
        phases
    );

    // Congestion at JFK
    //
    let airports = load_airports(None)?;
    let jfk = &airports[0];
    assert_eq!("KJFK", jfk.icao);

    let out = assess(states, jfk.lat, jfk.lon);
    assert_eq!(2, out.inbound);
    assert_eq!(2, out.holding);
    assert_eq!(1, out.on_ground);
    assert_eq!(1, out.approaching);
    // 2*2 + 2*10 + 1*3 + 1*5
    //
    assert_eq!(32, out.score);
    assert_eq!(CongestionLevel::Moderate, out.level);
    assert_eq!(10, out.estimated_delay);

    // Rankings: JFK on top everywhere, everything else untouched
    //
    let ranked = rank(&airports, states, RankingCategory::Busiest);
    assert_eq!("KJFK", ranked[0].airport.icao);
    assert_eq!(3, ranked[0].total_nearby);

    let ranked = rank(&airports, states, RankingCategory::Reliable);
    assert_eq!("KJFK", ranked.last().unwrap().airport.icao);

    Ok(())
}

#[test]
fn test_refresh_cycle_empty_feed() -> Result<()> {
    let batch = StateList::from_json(r##"{"time": 1716823200, "states": null}"##)?;
    let airports = load_airports(None)?;

    let out = assess(batch.vectors(), airports[0].lat, airports[0].lon);
    assert_eq!(0, out.score);
    assert_eq!(CongestionLevel::Low, out.level);
    Ok(())
}
