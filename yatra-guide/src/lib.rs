//! yatra-guide: conversational tour guide
//!
//! Builds tourist-guide prompts for a generative text provider, caches
//! replies per (place, language), and tracks the place under discussion
//! so follow-up questions have context.

pub mod audio;
pub mod cache;
pub mod config;
pub mod error;
pub mod guide;
pub mod languages;
pub mod prompts;
pub mod provider;

pub use config::GuideConfig;
pub use error::GuideError;
pub use guide::TourGuide;
pub use languages::{language_code, resolve_language, LanguageGroup};
pub use provider::{GeminiProvider, GuideProvider};
