//! Module to deal with the different kind of sources we can connect to to fetch data.
//!
//! The different submodules deal with the differences between sources:
//!
//! - `opensky`: live state vectors and flight summaries (REST, optional basic auth)
//! - `openmeteo`: current weather conditions (REST, anonymous)
//! - `mock`: synthetic fallback data for when a fetch fails
//!
//! All clients are blocking, one-shot fetchers.  Rate limiting, caching and
//! retry policy are the caller's business.
//!

// Re-export these modules for a shorter import path.
//
pub use config::*;
pub use error::*;
pub use mock::*;
pub use openmeteo::*;
pub use opensky::*;

mod config;
mod error;
mod mock;
mod openmeteo;
mod opensky;

#[macro_use]
mod macros;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
