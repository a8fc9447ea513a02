//! HTTP-backed speech engines
//!
//! Generic JSON shapes that work with self-hosted recognition,
//! translation, and synthesis services. Audio travels base64-encoded
//! inside JSON bodies.

use crate::audio::{AudioClip, SpeechAudio};
use crate::engines::{Synthesizer, TextTranslator, Transcriber};
use crate::error::{Result, SpeechError};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde_json::json;
use std::collections::HashSet;
use std::time::Duration;

const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024;

fn build_client(timeout_secs: u64, stage: &str) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| match stage {
            "recognition" => SpeechError::Recognition(format!("HTTP client: {}", e)),
            "translation" => SpeechError::Translation(format!("HTTP client: {}", e)),
            _ => SpeechError::Synthesis(format!("HTTP client: {}", e)),
        })
}

async fn error_body(response: reqwest::Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let text: String = text.chars().take(1000).collect();
    format!("HTTP {}: {}", status, text)
}

/// Speech recognition over a JSON endpoint.
pub struct HttpTranscriber {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranscriber {
    pub fn new(endpoint: String, api_key: Option<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs, "recognition")?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, clip: &AudioClip, hint: Option<&str>) -> Result<String> {
        let mut body = json!({
            "audio": general_purpose::STANDARD.encode(&clip.data),
            "format": clip.format.as_str(),
            "sample_rate": clip.sample_rate,
        });
        if let Some(hint) = hint {
            body["language"] = json!(hint);
        }

        let url = format!("{}/v1/recognize", self.endpoint);
        let response = self
            .authorize(self.client.post(&url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpeechError::Recognition(error_body(response).await));
        }

        let json: serde_json::Value = response.json().await?;
        let text = json["text"]
            .as_str()
            .ok_or_else(|| SpeechError::Recognition("no text in response".to_string()))?;
        Ok(text.trim().to_string())
    }

    fn name(&self) -> &str {
        "http-recognizer"
    }
}

/// Translation over a JSON endpoint with a detect route.
pub struct HttpTranslator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranslator {
    pub fn new(endpoint: String, api_key: Option<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs, "translation")?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }
}

#[async_trait]
impl TextTranslator for HttpTranslator {
    async fn detect(&self, text: &str) -> Result<String> {
        let url = format!("{}/v1/detect", self.endpoint);
        let response = self
            .authorize(self.client.post(&url))
            .json(&json!({ "text": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpeechError::Translation(error_body(response).await));
        }

        let json: serde_json::Value = response.json().await?;
        let language = json["language"]
            .as_str()
            .ok_or_else(|| SpeechError::Translation("no language in response".to_string()))?;
        Ok(language.to_string())
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let url = format!("{}/v1/translate", self.endpoint);
        let response = self
            .authorize(self.client.post(&url))
            .json(&json!({ "text": text, "source": source, "target": target }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpeechError::Translation(error_body(response).await));
        }

        let json: serde_json::Value = response.json().await?;
        let translated = json["text"]
            .as_str()
            .ok_or_else(|| SpeechError::Translation("no text in response".to_string()))?;
        Ok(translated.to_string())
    }

    fn name(&self) -> &str {
        "http-translator"
    }
}

/// Synthesis over a JSON endpoint. The supported-language set is fixed
/// at construction so `supports_language` stays synchronous.
pub struct HttpSynthesizer {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    languages: HashSet<String>,
}

impl HttpSynthesizer {
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        timeout_secs: u64,
        languages: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs, "synthesis")?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            languages: languages.into_iter().map(|l| l.to_lowercase()).collect(),
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }
}

#[async_trait]
impl Synthesizer for HttpSynthesizer {
    async fn synthesize(&self, text: &str, language: &str) -> Result<SpeechAudio> {
        if text.is_empty() {
            return Err(SpeechError::Synthesis("text must not be empty".to_string()));
        }
        if !self.supports_language(language) {
            return Err(SpeechError::UnsupportedLanguage(language.to_string()));
        }

        let url = format!("{}/v1/synthesize", self.endpoint);
        let response = self
            .authorize(self.client.post(&url))
            .json(&json!({ "text": text, "language": language, "format": "mp3" }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpeechError::Synthesis(error_body(response).await));
        }

        let json: serde_json::Value = response.json().await?;
        let encoded = json["audio"]
            .as_str()
            .ok_or_else(|| SpeechError::Synthesis("no audio in response".to_string()))?;
        if encoded.len() > MAX_RESPONSE_SIZE {
            return Err(SpeechError::Synthesis("audio payload too large".to_string()));
        }
        let data = general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| SpeechError::Synthesis(format!("base64 decode: {}", e)))?;

        Ok(SpeechAudio::new(data, "mp3", language))
    }

    fn supports_language(&self, language: &str) -> bool {
        self.languages.contains(&language.to_lowercase())
    }

    fn name(&self) -> &str {
        "http-synthesizer"
    }
}
