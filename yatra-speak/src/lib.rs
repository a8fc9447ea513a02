//! yatra-speak: voice-to-voice translation
//!
//! Chains three collaborators (speech recognition, text translation,
//! speech synthesis) into one staged pipeline with per-stage error
//! recovery. Audio capture and playback are the caller's concern; this
//! crate moves bytes and text between services.

pub mod audio;
pub mod config;
pub mod engines;
pub mod error;
pub mod translator;

pub use audio::{AudioClip, SpeechAudio};
pub use config::SpeakConfig;
pub use engines::{Synthesizer, TextTranslator, Transcriber};
pub use error::SpeechError;
pub use translator::{SpeechTranslator, TranslationOutcome};
