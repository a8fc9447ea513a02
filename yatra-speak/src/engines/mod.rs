//! Speech engine traits and HTTP-backed implementations

pub mod api;

use crate::audio::{AudioClip, SpeechAudio};
use crate::error::Result;
use async_trait::async_trait;

pub use api::{HttpSynthesizer, HttpTranscriber, HttpTranslator};

/// Speech-to-text collaborator.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe a clip. `hint` is an optional language code the
    /// recognizer may use to bias decoding.
    async fn transcribe(&self, clip: &AudioClip, hint: Option<&str>) -> Result<String>;

    fn name(&self) -> &str;
}

/// Text translation collaborator with language detection.
#[async_trait]
pub trait TextTranslator: Send + Sync {
    /// Detect the language of `text`, returning a language code.
    async fn detect(&self, text: &str) -> Result<String>;

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;

    fn name(&self) -> &str;
}

/// Text-to-speech collaborator.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, language: &str) -> Result<SpeechAudio>;

    /// Whether this synthesizer has a voice for `language`.
    fn supports_language(&self, language: &str) -> bool;

    fn name(&self) -> &str;
}
