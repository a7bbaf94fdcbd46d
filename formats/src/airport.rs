//! Airport reference data.
//!
//! A small, static list of major airports with their runways, loaded once
//! from an HCL file (embedded by default) and never mutated afterwards.
//!

use std::fs;

use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::trace;

/// Current airports.hcl version
const AIRPORT_FILE_VER: usize = 1;

/// One runway of an airport.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Runway {
    /// Designator, e.g. "09L/27R"
    pub id: String,
    /// Length in meters
    pub length: u32,
    /// Width in meters
    pub width: u32,
    /// Surface material
    pub surface: String,
    /// Magnetic heading of the lower designator
    pub heading: u32,
}

/// Static description of one airport.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Airport {
    /// ICAO code, e.g. "EGLL"
    pub icao: String,
    /// IATA code, e.g. "LHR"
    pub iata: String,
    /// Display name
    pub name: String,
    pub city: String,
    pub country: String,
    /// Latitude, decimal degrees
    pub lat: f64,
    /// Longitude, decimal degrees
    pub lon: f64,
    /// Field elevation in meters
    pub elevation: i32,
    /// IANA timezone name
    pub timezone: String,
    /// Fixed list of runways
    pub runways: Vec<Runway>,
}

/// On-disk structure for the airports file
///
#[derive(Debug, Deserialize)]
struct AirportFile {
    /// Version number for safety
    pub version: usize,
    /// Airport blocks, in file order
    pub airport: Vec<Airport>,
}

/// Parse the airports file content, checking the version.
///
fn parse_airports(data: &str) -> Result<Vec<Airport>> {
    let file: AirportFile = hcl::from_str(data)?;
    if file.version != AIRPORT_FILE_VER {
        return Err(eyre!("Bad airports file version, aborting…"));
    }
    Ok(file.airport)
}

/// Load all airports, keeping file order.
///
#[tracing::instrument]
pub fn load_airports(fname: Option<String>) -> Result<Vec<Airport>> {
    trace!("enter");

    // Load from file if specified
    //
    let data = if let Some(fname) = fname {
        fs::read_to_string(fname)?
    } else {
        include_str!("airports.hcl").to_owned()
    };

    parse_airports(&data)
}

/// Look an airport up by ICAO or IATA code, case insensitive.
///
pub fn find_airport<'a>(airports: &'a [Airport], code: &str) -> Option<&'a Airport> {
    let code = code.to_uppercase();
    airports
        .iter()
        .find(|a| a.icao == code || a.iata == code)
}

/// List loaded airports
///
#[tracing::instrument(skip(data))]
pub fn list_airports(data: &[Airport]) -> Result<String> {
    trace!("enter");
    let header = vec!["ICAO", "IATA", "Name", "City", "Country", "Lat/Lon", "Elev (m)", "Runways"];

    let mut builder = Builder::default();
    builder.push_record(header);

    data.iter().for_each(|a| {
        let point = format!("{:.4}, {:.4}", a.lat, a.lon);
        let elev = format!("{}", a.elevation);
        let rwys = format!("{}", a.runways.len());

        let row = vec![
            &a.icao, &a.iata, &a.name, &a.city, &a.country, &point, &elev, &rwys,
        ];
        builder.push_record(row);
    });

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("Known airports:\n{allf}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_airports_embedded() -> Result<()> {
        let airports = load_airports(None)?;

        assert_eq!(15, airports.len());

        // File order is preserved
        //
        assert_eq!("KJFK", airports[0].icao);
        assert_eq!("LEMD", airports[14].icao);

        let jfk = &airports[0];
        assert_eq!("JFK", jfk.iata);
        assert_eq!(4, jfk.runways.len());
        assert_eq!("04L/22R", jfk.runways[0].id);
        Ok(())
    }

    #[test]
    fn test_find_airport() -> Result<()> {
        let airports = load_airports(None)?;

        assert_eq!("EGLL", find_airport(&airports, "lhr").unwrap().icao);
        assert_eq!("EGLL", find_airport(&airports, "EGLL").unwrap().icao);
        assert!(find_airport(&airports, "XXXX").is_none());
        Ok(())
    }

    #[test]
    fn test_parse_airports_bad_version() {
        let data = r##"
version = 99

airport {
  icao = "KJFK"
  iata = "JFK"
  name = "John F. Kennedy International Airport"
  city = "New York"
  country = "United States"
  lat = 40.6413
  lon = -73.7781
  elevation = 13
  timezone = "America/New_York"
  runways = []
}
"##;
        assert!(parse_airports(data).is_err());
    }

    #[test]
    fn test_list_airports() -> Result<()> {
        let airports = load_airports(None)?;
        let out = list_airports(&airports)?;

        assert!(out.contains("EGLL"));
        assert!(out.contains("Singapore Changi Airport"));
        Ok(())
    }
}
