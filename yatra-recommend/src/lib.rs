//! yatra-recommend: region-aware travel app suggestions
//!
//! A CSV-backed catalog of apps worth installing per Indian state, a
//! reverse geocoder to turn coordinates into a state name, and a
//! live-location flow that chains IP location, geocoding, and lookup
//! with graceful degradation at each step.

pub mod error;
pub mod geocode;
pub mod live;
pub mod models;
pub mod store;

pub use error::RecommendError;
pub use geocode::{NominatimGeocoder, ReverseGeocoder};
pub use live::LiveRecommender;
pub use models::{AppCategory, AppListing, StateRecommendation};
pub use store::RecommendationStore;
