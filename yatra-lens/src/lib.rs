//! yatra-lens: landmark recognition pipeline
//!
//! Feeds frames from an upload or a live camera stream to a background
//! classification worker without ever stalling the acquisition cadence.
//! The worker scores each accepted frame against a fixed landmark label
//! set and publishes the newest result through a single-slot hand-off;
//! the session layer applies the similarity threshold and attaches a
//! cached descriptive summary to confirmed detections.

pub mod config;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod labels;
pub mod overlay;
pub mod pipeline;
pub mod scorer;
pub mod session;
pub mod summary;

pub use config::LensConfig;
pub use encoder::ImageEncoder;
pub use error::LensError;
pub use frame::{Frame, FrameSource};
pub use labels::LabelSet;
pub use overlay::{Overlay, OverlayTone, RenderSink};
pub use pipeline::ClassifierPipeline;
pub use scorer::{Detection, LandmarkScorer};
pub use session::{DisplayState, LensSession};
pub use summary::SummaryProvider;
