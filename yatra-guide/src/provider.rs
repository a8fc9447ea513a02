//! Generative text providers

use crate::error::{GuideError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;

/// Generative text collaborator. The guide only needs prompt-in,
/// prose-out.
#[async_trait]
pub trait GuideProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &str, model: &str, temperature: f32) -> Result<String>;
}

/// Gemini-backed provider.
pub struct GeminiProvider {
    api_key: Arc<RwLock<Option<String>>>,
    client: Client,
    base_url: String,
}

impl GeminiProvider {
    pub fn new() -> Self {
        Self {
            api_key: Arc::new(RwLock::new(None)),
            client: Client::new(),
            base_url: "https://generativelanguage.googleapis.com/v1".to_string(),
        }
    }

    pub fn with_api_key(api_key: String) -> Self {
        let provider = Self::new();
        *provider.api_key.write() = Some(api_key);
        provider
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn set_api_key(&self, key: String) {
        *self.api_key.write() = Some(key);
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.read().is_some()
    }

    fn get_api_key(&self) -> Result<String> {
        self.api_key
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| GuideError::MissingApiKey("Gemini".to_string()))
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GuideProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str, model: &str, temperature: f32) -> Result<String> {
        let api_key = self.get_api_key()?;

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "temperature": temperature.clamp(0.0, 2.0)
            }
        });

        let model_encoded = urlencoding::encode(model);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model_encoded, api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(GuideError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, text
            )));
        }

        let json: serde_json::Value = response.json().await?;
        let content = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| GuideError::InvalidResponse("no text candidate".to_string()))?;

        Ok(content.to_string())
    }
}
