//! Hour-of-day distribution of flight arrivals or departures.
//!

use chrono::{Local, TimeZone, Timelike};
use tracing::trace;

use skywatch_formats::FlightRecord;

/// Bucket flights into 24 hour-of-day bins, local time.
///
/// Arrivals bucket on `last_seen`, departures on `first_seen`.  All 24 bins
/// are always present, zero-filled, and their sum equals the input length
/// (timestamps outside the representable range are impossible for real
/// feed data).
///
#[tracing::instrument(skip(flights))]
pub fn hourly_distribution(flights: &[FlightRecord], arrivals: bool) -> [u32; 24] {
    trace!("hourly::distribution");

    let mut bins = [0u32; 24];
    for flight in flights {
        let ts = if arrivals {
            flight.last_seen
        } else {
            flight.first_seen
        };

        // `earliest` also resolves the ambiguous hour around DST changes
        //
        if let Some(dt) = Local.timestamp_opt(ts, 0).earliest() {
            bins[dt.hour() as usize] += 1;
        }
    }

    bins
}
