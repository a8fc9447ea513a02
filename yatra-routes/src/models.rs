//! Map data models

use crate::error::{Result, RoutesError};
use serde::{Deserialize, Serialize};
use yatra_core::GeoPoint;

/// Safety risk on a 1 (calm) to 5 (avoid) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskLevel(u8);

impl RiskLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            return Err(RoutesError::InvalidRecord(format!(
                "risk level {} outside 1..=5",
                level
            )));
        }
        Ok(Self(level))
    }

    /// Clamp into range instead of failing; used by the simulator's
    /// random walk.
    pub fn clamped(level: i16) -> Self {
        Self(level.clamp(Self::MIN as i16, Self::MAX as i16) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Map color for this level. Anything a caller constructs outside
    /// the scale reads as high risk.
    pub fn color(&self) -> &'static str {
        match self.0 {
            1 => "green",
            2 => "yellow",
            3 => "orange",
            4 => "red",
            5 => "black",
            _ => "red",
        }
    }
}

/// Point of interest shown on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub name: String,
    pub category: String,
    pub position: GeoPoint,
}

impl Landmark {
    pub fn new(name: impl Into<String>, category: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            position,
        }
    }

    /// Marker icon for this landmark's category. Unrecognized
    /// categories get the generic pin.
    pub fn icon(&self) -> &'static str {
        match self.category.to_lowercase().as_str() {
            "monument" | "fort" | "palace" => "landmark",
            "temple" | "church" | "mosque" => "place-of-worship",
            "museum" => "museum",
            "beach" => "umbrella-beach",
            "park" | "garden" => "tree",
            "market" => "shopping-cart",
            _ => "map-pin",
        }
    }
}

/// Crowd-safety hotspot with a drifting risk level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    pub position: GeoPoint,
    pub risk: RiskLevel,
}

impl Hotspot {
    pub fn new(position: GeoPoint, risk: RiskLevel) -> Self {
        Self { position, risk }
    }
}
