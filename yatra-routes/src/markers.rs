//! Marker set assembly for map rendering

use crate::models::{Hotspot, Landmark};
use yatra_core::GeoPoint;

#[derive(Debug, Clone, PartialEq)]
pub enum MarkerKind {
    /// Landmark pin with a category icon.
    Landmark { icon: &'static str },
    /// Hotspot circle colored by risk.
    Hotspot { color: &'static str, risk: u8 },
    /// The traveler's own position.
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: GeoPoint,
    pub label: String,
    pub kind: MarkerKind,
}

/// Everything the map layer needs to draw one view.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    pub markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn builder() -> MarkerSetBuilder {
        MarkerSetBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[derive(Default)]
pub struct MarkerSetBuilder {
    markers: Vec<Marker>,
}

impl MarkerSetBuilder {
    pub fn user_location(mut self, position: GeoPoint) -> Self {
        self.markers.push(Marker {
            position,
            label: "You are here".to_string(),
            kind: MarkerKind::User,
        });
        self
    }

    pub fn landmarks(mut self, landmarks: &[Landmark]) -> Self {
        for landmark in landmarks {
            self.markers.push(Marker {
                position: landmark.position,
                label: landmark.name.clone(),
                kind: MarkerKind::Landmark {
                    icon: landmark.icon(),
                },
            });
        }
        self
    }

    pub fn hotspots(mut self, hotspots: &[Hotspot]) -> Self {
        for hotspot in hotspots {
            self.markers.push(Marker {
                position: hotspot.position,
                label: format!("Risk level {}", hotspot.risk.value()),
                kind: MarkerKind::Hotspot {
                    color: hotspot.risk.color(),
                    risk: hotspot.risk.value(),
                },
            });
        }
        self
    }

    pub fn build(self) -> MarkerSet {
        MarkerSet {
            markers: self.markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;

    #[test]
    fn test_builder_collects_all_layers() {
        let landmarks = vec![Landmark::new(
            "Charminar",
            "Monument",
            GeoPoint::new(17.3616, 78.4747),
        )];
        let hotspots = vec![Hotspot::new(
            GeoPoint::new(17.36, 78.47),
            RiskLevel::new(4).unwrap(),
        )];

        let set = MarkerSet::builder()
            .user_location(GeoPoint::new(17.4, 78.5))
            .landmarks(&landmarks)
            .hotspots(&hotspots)
            .build();

        assert_eq!(set.len(), 3);
        assert!(matches!(set.markers[0].kind, MarkerKind::User));
        assert!(matches!(
            set.markers[1].kind,
            MarkerKind::Landmark { icon: "landmark" }
        ));
        assert!(matches!(
            set.markers[2].kind,
            MarkerKind::Hotspot { color: "red", risk: 4 }
        ));
    }

    #[test]
    fn test_empty_set() {
        assert!(MarkerSet::builder().build().is_empty());
    }
}
