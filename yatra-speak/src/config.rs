//! Speech pipeline configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakConfig {
    /// Language code spoken replies default to when the caller passes
    /// no target.
    pub default_target: String,
    /// Hint passed to the recognizer; recognizers may ignore it.
    pub recognition_hint: Option<String>,
    /// Seconds to wait on each remote stage before giving up.
    pub stage_timeout_secs: u64,
}

impl Default for SpeakConfig {
    fn default() -> Self {
        Self {
            default_target: "en".to_string(),
            recognition_hint: None,
            stage_timeout_secs: 15,
        }
    }
}

impl SpeakConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_target.trim().is_empty() {
            return Err("default_target must not be empty".to_string());
        }
        if self.stage_timeout_secs == 0 {
            return Err("stage_timeout_secs must be positive".to_string());
        }
        Ok(())
    }
}
