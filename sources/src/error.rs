use thiserror::Error;

/// Custom error type for the API clients, allow us to differentiate between errors.
///
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Bad parameter {0}")]
    BadParam(String),
    #[error("HTTP Error: {0}")]
    HTTP(#[from] reqwest::Error),
    #[error("Error({0}): {1}")]
    Status(u16, String),
    #[error("Unknown airport {0}")]
    UnknownAirport(String),
}
