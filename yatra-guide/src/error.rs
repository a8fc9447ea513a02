use thiserror::Error;
use yatra_core::Error as CoreError;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("API key not set for provider: {0}")]
    MissingApiKey(String),

    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),

    #[error("No place selected yet")]
    NoPlaceSelected,

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, GuideError>;

impl From<GuideError> for CoreError {
    fn from(err: GuideError) -> Self {
        CoreError::External(format!("Guide error: {}", err))
    }
}
