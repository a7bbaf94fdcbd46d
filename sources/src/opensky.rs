//! OpenSky (.org) specific client code.
//!
//! Three REST calls, all blocking, all one-shot:
//!
//! - `/states/all` with an optional bounding box,
//! - `/flights/arrival` for a given airport and time window,
//! - `/flights/departure` ditto.
//!
//! Anonymous access works but is rate-limited harder; credentials are passed
//! as basic auth on every call, there is no token dance.
//!

use clap::{crate_name, crate_version};
use eyre::Result;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, trace};

use skywatch_common::BoundingBox;
use skywatch_formats::{FlightRecord, StateList};

use crate::http_get_basic;
use crate::{Auth, SourceError};

/// Default API endpoint
const BASE_URL: &str = "https://opensky-network.org/api";

/// This is the Opensky client/source struct.
///
#[derive(Clone, Debug)]
pub struct Opensky {
    /// Base site url, overridable for tests
    base_url: String,
    /// Credentials, if any
    auth: Auth,
    /// reqwest blocking client
    client: Client,
}

impl Opensky {
    #[tracing::instrument]
    pub fn new() -> Self {
        trace!("opensky::new");

        Opensky {
            base_url: BASE_URL.to_owned(),
            auth: Auth::Anon,
            client: Client::new(),
        }
    }

    /// Same, with credentials from the config file.
    ///
    pub fn with_auth(auth: Auth) -> Self {
        Opensky {
            auth,
            ..Self::new()
        }
    }

    /// Fetch all current state vectors, optionally restricted to a bounding box.
    ///
    #[tracing::instrument(skip(self))]
    pub fn states(&self, bb: Option<BoundingBox>) -> Result<StateList> {
        trace!("opensky::states");

        let url = self.states_url(bb);
        let body = self.fetch(&url)?;

        StateList::from_json(&body)
    }

    /// Fetch flights that arrived at `icao` within [begin, end] (UNIX timestamps).
    ///
    #[tracing::instrument(skip(self))]
    pub fn arrivals(&self, icao: &str, begin: i64, end: i64) -> Result<Vec<FlightRecord>> {
        trace!("opensky::arrivals");

        let url = self.flights_url("arrival", icao, begin, end)?;
        let body = self.fetch(&url)?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch flights that departed from `icao` within [begin, end].
    ///
    #[tracing::instrument(skip(self))]
    pub fn departures(&self, icao: &str, begin: i64, end: i64) -> Result<Vec<FlightRecord>> {
        trace!("opensky::departures");

        let url = self.flights_url("departure", icao, begin, end)?;
        let body = self.fetch(&url)?;

        Ok(serde_json::from_str(&body)?)
    }

    fn states_url(&self, bb: Option<BoundingBox>) -> String {
        let url = format!("{}/states/all", self.base_url);
        match bb {
            Some(bb) => format!(
                "{}?lamin={}&lomin={}&lamax={}&lomax={}",
                url, bb.min_lat, bb.min_lon, bb.max_lat, bb.max_lon
            ),
            None => url,
        }
    }

    fn flights_url(&self, kind: &str, icao: &str, begin: i64, end: i64) -> Result<String> {
        if end <= begin {
            return Err(SourceError::BadParam(format!("end {end} <= begin {begin}")).into());
        }
        Ok(format!(
            "{}/flights/{}?airport={}&begin={}&end={}",
            self.base_url, kind, icao, begin, end
        ))
    }

    /// GET one URL, check the status, return the body.
    ///
    fn fetch(&self, url: &str) -> Result<String> {
        trace!("Fetching data from {}…", url);

        let url = url.to_owned();
        let resp = http_get_basic!(self, url)?;

        debug!("{:?}", &resp);

        // Check status
        //
        match resp.status() {
            StatusCode::OK => (),
            code => {
                let h = format!("{:?}", resp.headers());
                return Err(SourceError::Status(code.as_u16(), h).into());
            }
        }

        Ok(resp.text()?)
    }
}

impl Default for Opensky {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_states_url_plain() {
        let client = Opensky::new();
        assert_eq!(
            "https://opensky-network.org/api/states/all",
            client.states_url(None)
        );
    }

    #[test]
    fn test_states_url_with_bb() {
        let client = Opensky::new();
        let bb = BoundingBox {
            min_lon: -74.7,
            min_lat: 39.7,
            max_lon: -72.9,
            max_lat: 41.5,
        };
        assert_eq!(
            "https://opensky-network.org/api/states/all?lamin=39.7&lomin=-74.7&lamax=41.5&lomax=-72.9",
            client.states_url(Some(bb))
        );
    }

    #[rstest]
    #[case("arrival", "EGLL")]
    #[case("departure", "KJFK")]
    fn test_flights_url(#[case] kind: &str, #[case] icao: &str) -> Result<()> {
        let client = Opensky::new();
        assert_eq!(
            format!(
                "https://opensky-network.org/api/flights/{}?airport={}&begin=1716736800&end=1716823200",
                kind, icao
            ),
            client.flights_url(kind, icao, 1716736800, 1716823200)?
        );
        Ok(())
    }

    #[test]
    fn test_flights_url_bad_window() {
        let client = Opensky::new();
        assert!(client.flights_url("arrival", "EGLL", 100, 100).is_err());
    }
}
