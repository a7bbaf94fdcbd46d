pub use airports::*;
pub use congestion::*;
pub use rankings::*;
pub use states::*;
pub use traffic::*;
pub use weather::*;

mod airports;
mod congestion;
mod rankings;
mod states;
mod traffic;
mod weather;

use eyre::Result;

use skywatch_formats::{load_airports, Airport};
use skywatch_sources::SourceError;

/// Resolve an ICAO/IATA code against the reference list.
///
pub(crate) fn resolve_airport(code: &str) -> Result<Airport> {
    let airports = load_airports(None)?;
    match skywatch_formats::find_airport(&airports, code) {
        Some(a) => Ok(a.clone()),
        None => Err(SourceError::UnknownAirport(code.to_string()).into()),
    }
}
