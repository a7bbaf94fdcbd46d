//! This is the module handling the `airports` sub-command.
//!

use eyre::Result;
use tracing::trace;

use skywatch_formats::{list_airports, load_airports};

/// Render the airport reference data.
///
#[tracing::instrument]
pub fn list_all_airports() -> Result<String> {
    trace!("list_all_airports");

    let airports = load_airports(None)?;
    list_airports(&airports)
}
