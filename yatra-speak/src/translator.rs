//! Voice-to-voice translation pipeline

use crate::audio::{AudioClip, SpeechAudio};
use crate::config::SpeakConfig;
use crate::engines::{Synthesizer, TextTranslator, Transcriber};
use crate::error::{Result, SpeechError};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Result of one pipeline run. `audio` is absent when synthesis was
/// skipped or failed; the translated text is still usable.
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub original_text: String,
    pub source_language: String,
    pub target_language: String,
    pub translated_text: String,
    pub audio: Option<SpeechAudio>,
}

/// Staged transcribe / detect / translate / synthesize pipeline.
///
/// Recognition and translation failures abort the run; synthesis
/// failures degrade to a text-only outcome so the caller can still
/// show the translation.
pub struct SpeechTranslator {
    config: SpeakConfig,
    transcriber: Arc<dyn Transcriber>,
    translator: Arc<dyn TextTranslator>,
    synthesizer: Arc<dyn Synthesizer>,
}

impl SpeechTranslator {
    pub fn new(
        config: SpeakConfig,
        transcriber: Arc<dyn Transcriber>,
        translator: Arc<dyn TextTranslator>,
        synthesizer: Arc<dyn Synthesizer>,
    ) -> Result<Self> {
        config.validate().map_err(SpeechError::Configuration)?;
        Ok(Self {
            config,
            transcriber,
            translator,
            synthesizer,
        })
    }

    /// Run the full pipeline on one clip. `target` defaults to the
    /// configured target language. Each stage is bounded by the
    /// configured stage timeout.
    pub async fn run(&self, clip: &AudioClip, target: Option<&str>) -> Result<TranslationOutcome> {
        let target = target.unwrap_or(&self.config.default_target).to_string();
        let stage_timeout = Duration::from_secs(self.config.stage_timeout_secs);

        let original_text = timeout(
            stage_timeout,
            self.transcriber
                .transcribe(clip, self.config.recognition_hint.as_deref()),
        )
        .await
        .map_err(|_| SpeechError::Recognition("transcription timed out".to_string()))??;
        if original_text.trim().is_empty() {
            return Err(SpeechError::CouldNotUnderstand);
        }
        debug!("Recognized {} chars", original_text.len());

        let source_language = timeout(stage_timeout, self.translator.detect(&original_text))
            .await
            .map_err(|_| SpeechError::Translation("language detection timed out".to_string()))??;

        let translated_text = if source_language.eq_ignore_ascii_case(&target) {
            debug!("Source already {}; skipping translation", target);
            original_text.clone()
        } else {
            timeout(
                stage_timeout,
                self.translator
                    .translate(&original_text, &source_language, &target),
            )
            .await
            .map_err(|_| SpeechError::Translation("translation timed out".to_string()))??
        };

        let audio = if self.synthesizer.supports_language(&target) {
            match timeout(
                stage_timeout,
                self.synthesizer.synthesize(&translated_text, &target),
            )
            .await
            {
                Ok(Ok(audio)) => Some(audio),
                Ok(Err(e)) => {
                    warn!("Synthesis failed, returning text only: {}", e);
                    None
                }
                Err(_) => {
                    warn!("Synthesis timed out, returning text only");
                    None
                }
            }
        } else {
            warn!("No voice for '{}', returning text only", target);
            None
        };

        info!(
            "Translated {} -> {} ({} chars, audio: {})",
            source_language,
            target,
            translated_text.len(),
            audio.is_some()
        );

        Ok(TranslationOutcome {
            original_text,
            source_language,
            target_language: target,
            translated_text,
            audio,
        })
    }
}
