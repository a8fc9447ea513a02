//! Reverse geocoding to a state name

use crate::error::{RecommendError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use yatra_core::config::HttpConfig;
use yatra_core::GeoPoint;

/// Coordinates-to-state collaborator.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// State (admin area) name for a position, in English.
    async fn state_at(&self, position: GeoPoint) -> Result<String>;
}

/// Nominatim-backed geocoder. Nominatim requires an identifying
/// User-Agent, so the shared HTTP config supplies one.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .user_agent(http.user_agent.clone())
            .build()
            .map_err(|e| RecommendError::Geocoding(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: "https://nominatim.openstreetmap.org".to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn state_at(&self, position: GeoPoint) -> Result<String> {
        if !position.is_valid() {
            return Err(RecommendError::Geocoding("invalid coordinates".to_string()));
        }

        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json&accept-language=en",
            self.base_url, position.lat, position.lon
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RecommendError::Geocoding(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RecommendError::Geocoding(format!("bad response body: {}", e)))?;
        let state = json["address"]["state"]
            .as_str()
            .ok_or_else(|| RecommendError::Geocoding("no state in address".to_string()))?;

        debug!("Reverse geocoded {},{} -> {}", position.lat, position.lon, state);
        Ok(state.to_string())
    }
}
