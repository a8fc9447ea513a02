//! Error types for yatra-speak

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Recognition error: {0}")]
    Recognition(String),

    #[error("Could not understand the audio")]
    CouldNotUnderstand,

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Synthesis error: {0}")]
    Synthesis(String),

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpeechError>;

impl From<SpeechError> for yatra_core::Error {
    fn from(err: SpeechError) -> Self {
        yatra_core::Error::External(err.to_string())
    }
}
