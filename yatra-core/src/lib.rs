//! yatra-core: shared types for the Yatra travel-assistant crates
//!
//! Holds the cross-crate error type, geographic primitives, and the
//! application configuration loader. Feature crates (lens, guide, speak,
//! routes, recommend) define their own richer error enums and convert into
//! [`Error`] at the boundary.

pub mod config;
pub mod error;
pub mod geo;

pub use config::{HttpConfig, YatraConfig};
pub use error::{Error, Result};
pub use geo::GeoPoint;
