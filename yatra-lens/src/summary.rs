//! Descriptive summary collaborator
//!
//! Confirmed detections get a short prose description. The lookup may be
//! rate-limited or unavailable; callers fall back to the label set's
//! built-in description and cache whichever text they got.

use crate::error::LensError;
use async_trait::async_trait;

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Short prose description of a landmark.
    async fn summary(&self, label: &str) -> Result<String, LensError>;
}

/// Summary lookup against the Wikipedia REST API.
pub struct WikipediaSummaryProvider {
    client: reqwest::Client,
    base_url: String,
    sentences: usize,
}

impl WikipediaSummaryProvider {
    pub fn new() -> Self {
        Self::with_base_url("https://en.wikipedia.org/api/rest_v1".to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            sentences: 2,
        }
    }
}

impl Default for WikipediaSummaryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummaryProvider for WikipediaSummaryProvider {
    async fn summary(&self, label: &str) -> Result<String, LensError> {
        let title = urlencoding::encode(label);
        let url = format!("{}/page/summary/{}", self.base_url, title);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LensError::Summary(format!(
                "HTTP {} for '{}'",
                response.status(),
                label
            )));
        }

        let json: serde_json::Value = response.json().await?;
        let extract = json["extract"]
            .as_str()
            .ok_or_else(|| LensError::Summary(format!("no extract for '{}'", label)))?;

        Ok(first_sentences(extract, self.sentences))
    }
}

/// Truncate prose to at most `count` sentences.
pub(crate) fn first_sentences(text: &str, count: usize) -> String {
    let mut taken = 0;
    let mut end = text.len();
    for (i, c) in text.char_indices() {
        if c == '.' || c == '!' || c == '?' {
            taken += 1;
            if taken == count {
                end = i + c.len_utf8();
                break;
            }
        }
    }
    text[..end].trim().to_string()
}
