//! Definition of the data formats used by skywatch.
//!
//! This crate holds the in-memory model for everything the toolkit consumes:
//!
//! - `opensky`: live state vectors from the OpenSky `/states/all` endpoint,
//! - `flight`: per-flight arrival/departure summaries from `/flights/*`,
//! - `weather`: current conditions from the Open-Meteo forecast API,
//! - `airport`: the static airport reference file (embedded HCL).
//!
//! No I/O happens here besides decoding payloads handed over by the caller.
//!

// Re-export for convenience
//
pub use airport::*;
pub use flight::*;
pub use opensky::*;
pub use weather::*;

mod airport;
mod flight;
mod opensky;
mod weather;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
