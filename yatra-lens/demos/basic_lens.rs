//! Basic landmark lens example
//!
//! Wires a session with a toy encoder and classifies one synthetic frame.
//! A real deployment plugs a CLIP-style model in behind `ImageEncoder`.

use std::sync::Arc;
use yatra_lens::{
    DisplayState, Frame, ImageEncoder, LabelSet, LensConfig, LensError, LensSession, Overlay,
};

struct ToyEncoder;

impl ImageEncoder for ToyEncoder {
    fn encode_image(&self, frame: &Frame) -> Result<Vec<f32>, LensError> {
        // Brightness stands in for a learned embedding.
        let mean =
            frame.pixels.iter().map(|p| *p as f32).sum::<f32>() / frame.pixels.len() as f32;
        Ok(vec![mean / 255.0, 1.0 - mean / 255.0])
    }

    fn encode_text(&self, labels: &[&str]) -> Result<Vec<Vec<f32>>, LensError> {
        Ok(labels
            .iter()
            .enumerate()
            .map(|(i, _)| if i % 2 == 0 { vec![1.0, 0.0] } else { vec![0.0, 1.0] })
            .collect())
    }
}

struct StaticSummaries;

#[async_trait::async_trait]
impl yatra_lens::SummaryProvider for StaticSummaries {
    async fn summary(&self, label: &str) -> Result<String, LensError> {
        Ok(format!("{} draws visitors from around the world.", label))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let labels = Arc::new(LabelSet::from_json(
        r#"{"Taj Mahal": "A marble mausoleum in Agra.",
            "Eiffel Tower": "A wrought-iron tower in Paris."}"#,
    )?);

    let session = LensSession::start(
        LensConfig::default(),
        labels,
        Arc::new(ToyEncoder),
        Arc::new(StaticSummaries),
    )?;

    let bright = Frame::new(2, 2, vec![230u8; 12])?;
    let state = session.classify_once(bright).await;
    match &state {
        DisplayState::Found {
            label, confidence, ..
        } => println!("Detected {} at {:.1}", label, confidence),
        DisplayState::NoLandmark => println!("No landmark detected"),
        DisplayState::Processing => println!("Still processing"),
    }

    let overlay = Overlay::from_state(&state, 40);
    println!("{}", overlay.header);
    for line in &overlay.lines {
        println!("{}", line);
    }

    session.shutdown().await;
    Ok(())
}
