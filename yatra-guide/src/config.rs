use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Generative model identifier passed to the provider.
    pub model: String,
    pub temperature: f32,
    pub enable_caching: bool,
    pub cache_capacity: usize,
    pub cache_ttl_seconds: u64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.7,
            enable_caching: true,
            cache_capacity: 256,
            cache_ttl_seconds: 3600,
        }
    }
}

impl GuideConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.model.is_empty() {
            return Err("model must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be within [0, 2]".to_string());
        }
        if self.enable_caching && self.cache_capacity == 0 {
            return Err("cache_capacity must be > 0 when caching is enabled".to_string());
        }
        Ok(())
    }
}
