//! Geodesic helpers shared by all skywatch crates.
//!
//! Everything here works on plain latitude/longitude pairs in decimal degrees,
//! positive north/east.  Distances are in kilometers.
//!

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Mean Earth radius in km, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.;

/// One degree is circumference of earth / 360°, in km.
const ONE_DEG_KM: f64 = 40_000. / 360.;

/// Great-circle distance between two points, haversine formula.
///
/// Symmetric and zero for identical points.  Good enough for the traffic
/// radii we deal with (tens to a few thousand km), no need for Vincenty.
///
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.).sin().powi(2);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// A flat bounding box around a point, used to restrict OpenSky area queries.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Longitude - X0
    pub min_lon: f64,
    /// Latitude - Y0
    pub min_lat: f64,
    /// Longitude - X1
    pub max_lon: f64,
    /// Latitude - Y1
    pub max_lat: f64,
}

impl BoundingBox {
    /// Take a lat/lon pair and create a bounding box of `dist` km away.
    ///
    /// So from (lat, lon) we generate the following bounding box:
    /// (lat - dist, lon - dist, lat + dist, lon + dist)
    ///
    /// NOTE: `dist` is in km, converted through the one-degree approximation
    /// so the box is slightly larger than the circle it encloses.  Callers
    /// are expected to re-filter with `distance()`.
    ///
    #[tracing::instrument]
    pub fn from_lat_lon(lat: f64, lon: f64, dist: u32) -> Self {
        trace!("bb::from_lat_lon");

        let dist = dist as f64 / ONE_DEG_KM;

        // Calculate the four corners
        //
        let (min_lat, max_lat) = (lat - dist, lat + dist);
        let (min_lon, max_lon) = (lon - dist, lon + dist);

        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }
}
