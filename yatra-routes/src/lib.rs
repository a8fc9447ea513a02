//! yatra-routes: map data for the travel assistant
//!
//! Landmark and safety-hotspot models, CSV persistence, a background
//! risk simulator that drifts hotspot levels over time, and IP-based
//! coarse location with a fixed fallback.

pub mod error;
pub mod locate;
pub mod markers;
pub mod models;
pub mod simulator;
pub mod store;

pub use error::RoutesError;
pub use locate::{IpInfoLocator, IpLocator, FALLBACK_LOCATION};
pub use markers::{Marker, MarkerKind, MarkerSet};
pub use models::{Hotspot, Landmark, RiskLevel};
pub use simulator::{RiskSimulator, SimulatorConfig};
pub use store::{load_hotspots, load_landmarks, save_hotspots};
