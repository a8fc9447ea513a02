//! Audio containers

use crate::error::{Result, SpeechError};

/// Captured microphone audio handed to the recognizer. PCM payloads
/// carry their sample rate; encoded payloads (wav, flac) carry it in
/// the container and set `sample_rate` to the nominal rate.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub data: Vec<u8>,
    pub sample_rate: u32,
    pub format: AudioFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Pcm16,
    Wav,
    Flac,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Pcm16 => "pcm16",
            AudioFormat::Wav => "wav",
            AudioFormat::Flac => "flac",
        }
    }
}

impl AudioClip {
    pub fn new(data: Vec<u8>, sample_rate: u32, format: AudioFormat) -> Result<Self> {
        if data.is_empty() {
            return Err(SpeechError::InvalidAudio("empty audio payload".to_string()));
        }
        if sample_rate == 0 {
            return Err(SpeechError::InvalidAudio("zero sample rate".to_string()));
        }
        Ok(Self {
            data,
            sample_rate,
            format,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Synthesized speech ready for playback.
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub data: Vec<u8>,
    pub format: String,
    pub language: String,
}

impl SpeechAudio {
    pub fn new(data: Vec<u8>, format: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            data,
            format: format.into(),
            language: language.into(),
        }
    }
}
