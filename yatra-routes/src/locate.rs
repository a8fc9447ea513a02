//! IP-based coarse location

use crate::error::{Result, RoutesError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use yatra_core::GeoPoint;

/// Chennai. Used whenever geolocation fails so the map always has a
/// center.
pub const FALLBACK_LOCATION: GeoPoint = GeoPoint {
    lat: 13.0827,
    lon: 80.2707,
};

/// Coarse locator collaborator.
#[async_trait]
pub trait IpLocator: Send + Sync {
    async fn locate(&self) -> Result<GeoPoint>;

    /// `locate` with the fixed fallback applied on any failure.
    async fn locate_or_fallback(&self) -> GeoPoint {
        match self.locate().await {
            Ok(point) => point,
            Err(e) => {
                warn!("Geolocation failed, using fallback: {}", e);
                FALLBACK_LOCATION
            }
        }
    }
}

/// ipinfo.io-backed locator. The service returns coordinates as a
/// `"lat,lon"` string in the `loc` field.
pub struct IpInfoLocator {
    client: Client,
    base_url: String,
}

impl IpInfoLocator {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| RoutesError::Location(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: "https://ipinfo.io".to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl IpLocator for IpInfoLocator {
    async fn locate(&self) -> Result<GeoPoint> {
        let url = format!("{}/json", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RoutesError::Location(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RoutesError::Location(format!("bad response body: {}", e)))?;
        let loc = json["loc"]
            .as_str()
            .ok_or_else(|| RoutesError::Location("no loc field".to_string()))?;

        let point = GeoPoint::parse_pair(loc)
            .ok_or_else(|| RoutesError::Location(format!("unparseable loc '{}'", loc)))?;
        debug!("Located via IP: {},{}", point.lat, point.lon);
        Ok(point)
    }
}
