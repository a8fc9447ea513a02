//! Error types for yatra-routes

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutesError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Location error: {0}")]
    Location(String),

    #[error("Simulator error: {0}")]
    Simulator(String),

    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RoutesError>;

impl From<RoutesError> for yatra_core::Error {
    fn from(err: RoutesError) -> Self {
        yatra_core::Error::Data(err.to_string())
    }
}
