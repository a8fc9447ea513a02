//! Similarity scorer
//!
//! Maps one frame to the best-matching landmark label plus a confidence
//! score. Scoring failures never propagate; they surface as an empty
//! detection so a bad frame costs the caller one cycle, nothing more.

use crate::encoder::{dot, l2_normalize, ImageEncoder};
use crate::error::LensError;
use crate::frame::Frame;
use crate::labels::LabelSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Cosine similarities are scaled to roughly [-100, 100].
const SIMILARITY_SCALE: f32 = 100.0;

/// One classification result.
///
/// `label` is `None` when no attempt was made or inference failed; a
/// confidence is only ever produced together with a label, and the
/// consumer (not the scorer) compares it against the display threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub label: Option<String>,
    pub confidence: Option<f32>,
}

impl Detection {
    /// The "no attempt / inference failed" result.
    pub fn empty() -> Self {
        Self {
            label: None,
            confidence: None,
        }
    }

    pub fn hit(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: Some(label.into()),
            confidence: Some(confidence),
        }
    }

    /// Label and confidence as a pair, when both are present.
    pub fn as_hit(&self) -> Option<(&str, f32)> {
        match (&self.label, self.confidence) {
            (Some(label), Some(confidence)) => Some((label.as_str(), confidence)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none()
    }
}

/// Scores frames against a fixed label set using a shared embedding model.
pub struct LandmarkScorer {
    encoder: Arc<dyn ImageEncoder>,
    names: Vec<String>,
    /// L2-normalized text embeddings, one row per label, computed once.
    text_embeddings: Vec<Vec<f32>>,
}

impl LandmarkScorer {
    /// Precompute normalized label embeddings. Fails only at load time;
    /// per-frame scoring never errors after this succeeds.
    pub fn new(encoder: Arc<dyn ImageEncoder>, labels: &LabelSet) -> Result<Self, LensError> {
        let names: Vec<String> = labels.names().iter().map(|s| s.to_string()).collect();
        let name_refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();

        let mut text_embeddings = encoder.encode_text(&name_refs)?;
        if text_embeddings.len() != names.len() {
            return Err(LensError::Encoder(format!(
                "encoder returned {} text embeddings for {} labels",
                text_embeddings.len(),
                names.len()
            )));
        }
        for embedding in &mut text_embeddings {
            l2_normalize(embedding);
        }

        info!("Landmark scorer ready with {} labels", names.len());
        Ok(Self {
            encoder,
            names,
            text_embeddings,
        })
    }

    pub fn label_count(&self) -> usize {
        self.names.len()
    }

    /// Score one frame against every label and return the argmax.
    ///
    /// Pure function of (frame, label set); any encoding or arithmetic
    /// failure yields `Detection::empty()` rather than an error.
    pub fn score(&self, frame: &Frame) -> Detection {
        let mut image_embedding = match self.encoder.encode_image(frame) {
            Ok(embedding) => embedding,
            Err(e) => {
                warn!("Image encoding failed, skipping frame: {}", e);
                return Detection::empty();
            }
        };
        l2_normalize(&mut image_embedding);

        let mut best: Option<(usize, f32)> = None;
        for (index, text_embedding) in self.text_embeddings.iter().enumerate() {
            if text_embedding.len() != image_embedding.len() {
                warn!(
                    "Embedding dimension mismatch: image {} vs label {}",
                    image_embedding.len(),
                    text_embedding.len()
                );
                return Detection::empty();
            }
            let similarity = SIMILARITY_SCALE * dot(&image_embedding, text_embedding);
            if !similarity.is_finite() {
                continue;
            }
            match best {
                Some((_, best_sim)) if similarity <= best_sim => {}
                _ => best = Some((index, similarity)),
            }
        }

        match best {
            Some((index, similarity)) => {
                debug!("Best label '{}' at {:.1}", self.names[index], similarity);
                Detection::hit(self.names[index].clone(), similarity)
            }
            None => Detection::empty(),
        }
    }
}
