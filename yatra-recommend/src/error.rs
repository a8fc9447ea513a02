//! Error types for yatra-recommend

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RecommendError>;

impl From<RecommendError> for yatra_core::Error {
    fn from(err: RecommendError) -> Self {
        yatra_core::Error::Data(err.to_string())
    }
}
