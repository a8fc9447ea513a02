//! Frame representation and acquisition sources

use crate::error::LensError;
use async_trait::async_trait;
use image::DynamicImage;

/// A single image sample: an owned, row-major RGB8 pixel buffer.
///
/// Frames have no identity beyond their content and are owned exclusively
/// by whichever pipeline stage currently holds them.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Create a frame from a raw RGB8 buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, LensError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|p| p.checked_mul(3))
            .ok_or_else(|| LensError::Frame("frame dimensions overflow".to_string()))?;
        if pixels.len() != expected {
            return Err(LensError::Frame(format!(
                "pixel buffer length {} does not match {}x{} RGB frame",
                pixels.len(),
                width,
                height
            )));
        }
        if width == 0 || height == 0 {
            return Err(LensError::Frame("frame dimensions must be non-zero".to_string()));
        }
        Ok(Self { width, height, pixels })
    }

    /// Decode an uploaded image into a frame.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        Self {
            width: rgb.width(),
            height: rgb.height(),
            pixels: rgb.into_raw(),
        }
    }

    /// Decode image bytes (jpg/png upload) into a frame.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LensError> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_image(&image))
    }
}

/// A source of frames: a camera stream or a one-image upload.
///
/// `next_frame` yields frames at whatever cadence the source allows and
/// returns `None` when the source is exhausted or closed.
#[async_trait]
pub trait FrameSource: Send {
    async fn next_frame(&mut self) -> Option<Frame>;
}

/// Frame source over a fixed set of frames, used for uploads and tests.
pub struct StaticFrameSource {
    frames: std::vec::IntoIter<Frame>,
}

impl StaticFrameSource {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

#[async_trait]
impl FrameSource for StaticFrameSource {
    async fn next_frame(&mut self) -> Option<Frame> {
        self.frames.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(width: u32, height: u32, value: u8) -> Frame {
        Frame::new(width, height, vec![value; (width * height * 3) as usize]).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let frame = solid_frame(4, 2, 128);
        assert_eq!(frame.pixels.len(), 24);
    }

    #[test]
    fn test_new_rejects_mismatched_buffer() {
        assert!(Frame::new(4, 2, vec![0u8; 10]).is_err());
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(Frame::new(0, 2, vec![]).is_err());
        assert!(Frame::new(2, 0, vec![]).is_err());
    }

    #[test]
    fn test_from_image() {
        let image = DynamicImage::new_rgb8(3, 3);
        let frame = Frame::from_image(&image);
        assert_eq!(frame.width, 3);
        assert_eq!(frame.height, 3);
        assert_eq!(frame.pixels.len(), 27);
    }

    #[tokio::test]
    async fn test_static_source_exhausts() {
        let mut source = StaticFrameSource::new(vec![solid_frame(1, 1, 0), solid_frame(1, 1, 1)]);
        assert!(source.next_frame().await.is_some());
        assert!(source.next_frame().await.is_some());
        assert!(source.next_frame().await.is_none());
    }
}
