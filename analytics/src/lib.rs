//! Traffic analytics over a batch of OpenSky state vectors.
//!
//! Everything in this crate is a pure function of the observation batch and
//! the static airport reference data: no I/O, no clock, no state carried
//! between refreshes.  Callers fetch a fresh batch on their own schedule and
//! recompute; each result atomically replaces the previous one.
//!
//! The heuristics are deliberately simple threshold filters tuned for the raw
//! OpenSky units (meters, m/s).  They are meant for relative comparison on a
//! dashboard, not for operational use.
//!

// Re-export for convenience
//
pub use congestion::*;
pub use hourly::*;
pub use phase::*;
pub use ranking::*;

mod congestion;
mod hourly;
mod phase;
mod ranking;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
