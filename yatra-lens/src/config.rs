//! Configuration for the landmark recognition pipeline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Lens pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensConfig {
    /// Path to the landmark label file (JSON object of name -> description).
    pub labels_path: PathBuf,
    /// Minimum scaled cosine similarity for a detection to be displayed.
    pub similarity_threshold: f32,
    /// How long a single-shot classification waits for its result before
    /// reporting a pending state.
    pub single_shot_timeout: Duration,
    /// Minimum interval between frame submissions in continuous mode.
    /// Frames arriving faster than this are rendered but not classified.
    pub min_submit_interval: Duration,
    /// Column width for wrapped overlay description text.
    pub wrap_width: usize,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            labels_path: PathBuf::from("landmarks.json"),
            similarity_threshold: 22.0,
            single_shot_timeout: Duration::from_secs(5),
            min_submit_interval: Duration::from_secs(2),
            wrap_width: 40,
        }
    }
}

impl LensConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.similarity_threshold.is_finite() {
            return Err("similarity_threshold must be finite".to_string());
        }
        if self.single_shot_timeout.is_zero() {
            return Err("single_shot_timeout must be > 0".to_string());
        }
        if self.wrap_width == 0 {
            return Err("wrap_width must be > 0".to_string());
        }
        if self.wrap_width > 1000 {
            return Err("wrap_width too large (max 1000)".to_string());
        }
        Ok(())
    }
}
