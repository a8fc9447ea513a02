//! Embedding model collaborator
//!
//! The actual vision-language model (CLIP or similar, possibly GPU-backed)
//! lives behind this trait. It is loaded once at startup and shared by
//! reference; the pipeline only assumes that image and text embeddings are
//! comparable vectors of the same dimensionality.

use crate::error::LensError;
use crate::frame::Frame;

pub trait ImageEncoder: Send + Sync {
    /// Encode one frame into an embedding vector.
    fn encode_image(&self, frame: &Frame) -> Result<Vec<f32>, LensError>;

    /// Encode label texts into one embedding vector per label.
    fn encode_text(&self, labels: &[&str]) -> Result<Vec<Vec<f32>>, LensError>;
}

/// L2-normalize a vector in place. A zero or non-finite norm zeroes the
/// vector instead of producing NaNs.
pub(crate) fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v
        .iter()
        .filter(|x| x.is_finite())
        .map(|x| x * x)
        .sum::<f32>()
        .sqrt();
    if norm > 0.0 && norm.is_finite() {
        for x in v.iter_mut() {
            *x /= norm;
            if !x.is_finite() {
                *x = 0.0;
            }
        }
    } else {
        v.fill(0.0);
    }
}

pub(crate) fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_normalize() {
        let mut v = vec![3.0, 4.0];
        l2_normalize(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_l2_normalize_zero_vector() {
        let mut v = vec![0.0, 0.0, 0.0];
        l2_normalize(&mut v);
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_l2_normalize_non_finite() {
        let mut v = vec![f32::NAN, 1.0];
        l2_normalize(&mut v);
        assert!(v.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
    }
}
