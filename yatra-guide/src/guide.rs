//! Tour guide session

use crate::cache::ReplyCache;
use crate::config::GuideConfig;
use crate::error::{GuideError, Result};
use crate::prompts;
use crate::provider::GuideProvider;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// Conversational tour guide with per-(kind, place, language) reply
/// caching and a "place under discussion" for follow-up questions.
pub struct TourGuide {
    config: GuideConfig,
    provider: Arc<dyn GuideProvider>,
    cache: ReplyCache,
    last_place: RwLock<Option<String>>,
}

impl TourGuide {
    pub fn new(config: GuideConfig, provider: Arc<dyn GuideProvider>) -> Result<Self> {
        config
            .validate()
            .map_err(GuideError::Provider)?;
        let cache = ReplyCache::new(config.cache_capacity);
        info!("Tour guide ready using provider '{}'", provider.name());
        Ok(Self {
            config,
            provider,
            cache,
            last_place: RwLock::new(None),
        })
    }

    /// Introduce a place in the requested reply language. Remembers the
    /// place so later doubts have context.
    pub async fn describe_place(&self, place: &str, language: &str) -> Result<String> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GuideError::Provider("place must not be empty".to_string()));
        }
        *self.last_place.write() = Some(place.to_string());

        let key = format!("place:{}:{}", place, language);
        self.cached_generate(&key, &prompts::place_info(place, language))
            .await
    }

    /// Answer a follow-up question about the most recently described
    /// place.
    pub async fn answer_doubt(&self, question: &str, language: &str) -> Result<String> {
        let place = self
            .last_place
            .read()
            .clone()
            .ok_or(GuideError::NoPlaceSelected)?;

        let key = format!("doubt:{}:{}:{}", place, question, language);
        self.cached_generate(&key, &prompts::doubt(&place, question, language))
            .await
    }

    /// Place currently under discussion, if any.
    pub fn last_place(&self) -> Option<String> {
        self.last_place.read().clone()
    }

    async fn cached_generate(&self, key: &str, prompt: &str) -> Result<String> {
        if self.config.enable_caching {
            if let Some(reply) = self.cache.get(key) {
                debug!("Reply cache hit for {}", key);
                return Ok(reply);
            }
        }
        let reply = self
            .provider
            .generate(prompt, &self.config.model, self.config.temperature)
            .await?;
        if self.config.enable_caching {
            self.cache
                .set(key, reply.clone(), self.config.cache_ttl_seconds);
        }
        Ok(reply)
    }
}
