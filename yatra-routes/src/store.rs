//! CSV persistence for landmarks and hotspots
//!
//! Landmark files carry `Name,Category,Lat,Lng` headers. Hotspot files
//! carry `lat,lng` and optionally `risk_level`; rows without a risk
//! column are seeded with a random level so old files stay loadable.

use crate::error::Result;
use crate::models::{Hotspot, Landmark, RiskLevel};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};
use yatra_core::GeoPoint;

#[derive(Debug, Deserialize)]
struct LandmarkRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Lat")]
    lat: f64,
    #[serde(rename = "Lng")]
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct HotspotRow {
    lat: f64,
    lng: f64,
    risk_level: Option<u8>,
}

#[derive(Debug, Serialize)]
struct HotspotOut {
    lat: f64,
    lng: f64,
    risk_level: u8,
}

/// Load landmarks, skipping rows with out-of-range coordinates.
pub fn load_landmarks(path: &Path) -> Result<Vec<Landmark>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut landmarks = Vec::new();

    for row in reader.deserialize() {
        let row: LandmarkRow = row?;
        let position = GeoPoint::new(row.lat, row.lng);
        if !position.is_valid() {
            warn!("Skipping landmark '{}': invalid coordinates", row.name);
            continue;
        }
        landmarks.push(Landmark::new(row.name, row.category, position));
    }

    debug!("Loaded {} landmarks from {}", landmarks.len(), path.display());
    Ok(landmarks)
}

/// Load hotspots. Rows missing a `risk_level` value get a random level
/// in 1..=5.
pub fn load_hotspots(path: &Path) -> Result<Vec<Hotspot>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rng = rand::thread_rng();
    let mut hotspots = Vec::new();

    for row in reader.deserialize() {
        let row: HotspotRow = row?;
        let position = GeoPoint::new(row.lat, row.lng);
        if !position.is_valid() {
            warn!("Skipping hotspot at {},{}: invalid coordinates", row.lat, row.lng);
            continue;
        }
        let risk = match row.risk_level {
            Some(level) => RiskLevel::new(level)?,
            None => RiskLevel::clamped(rng.gen_range(1..=5)),
        };
        hotspots.push(Hotspot::new(position, risk));
    }

    debug!("Loaded {} hotspots from {}", hotspots.len(), path.display());
    Ok(hotspots)
}

/// Write hotspots back with the `risk_level` column present.
pub fn save_hotspots(path: &Path, hotspots: &[Hotspot]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for hotspot in hotspots {
        writer.serialize(HotspotOut {
            lat: hotspot.position.lat,
            lng: hotspot.position.lon,
            risk_level: hotspot.risk.value(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
