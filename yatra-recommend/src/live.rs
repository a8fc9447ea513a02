//! Live-location recommendation flow

use crate::geocode::ReverseGeocoder;
use crate::models::StateRecommendation;
use crate::store::RecommendationStore;
use std::sync::Arc;
use tracing::{info, warn};
use yatra_routes::IpLocator;

/// Chains IP location, reverse geocoding, and catalog lookup. Each
/// stage degrades instead of erroring: a failed locate uses the fixed
/// fallback position, a failed geocode uses the configured fallback
/// state, and only an unknown state yields `None`.
pub struct LiveRecommender {
    locator: Arc<dyn IpLocator>,
    geocoder: Arc<dyn ReverseGeocoder>,
    store: Arc<RecommendationStore>,
    fallback_state: String,
}

impl LiveRecommender {
    pub fn new(
        locator: Arc<dyn IpLocator>,
        geocoder: Arc<dyn ReverseGeocoder>,
        store: Arc<RecommendationStore>,
    ) -> Self {
        Self {
            locator,
            geocoder,
            store,
            // Matches the fixed fallback position (Chennai).
            fallback_state: "Tamil Nadu".to_string(),
        }
    }

    pub fn with_fallback_state(mut self, state: impl Into<String>) -> Self {
        self.fallback_state = state.into();
        self
    }

    /// Resolve the traveler's state and return its recommendations.
    pub async fn recommend_here(&self) -> Option<StateRecommendation> {
        let position = self.locator.locate_or_fallback().await;

        let state = match self.geocoder.state_at(position).await {
            Ok(state) => state,
            Err(e) => {
                warn!("Reverse geocoding failed, using fallback state: {}", e);
                self.fallback_state.clone()
            }
        };

        match self.store.for_state(&state) {
            Some(row) => {
                info!("Recommending apps for {}", row.state);
                Some(row.clone())
            }
            None => {
                warn!("No recommendations for state '{}'", state);
                None
            }
        }
    }
}
