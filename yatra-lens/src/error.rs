//! Error types for yatra-lens

use thiserror::Error;
use yatra_core::Error as CoreError;

#[derive(Error, Debug)]
pub enum LensError {
    #[error("Label set error: {0}")]
    Labels(String),

    #[error("Encoder error: {0}")]
    Encoder(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Summary lookup error: {0}")]
    Summary(String),

    #[error("Frame error: {0}")]
    Frame(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<LensError> for CoreError {
    fn from(err: LensError) -> Self {
        CoreError::Pipeline(format!("Lens error: {}", err))
    }
}
