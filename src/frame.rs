use std::path::Path;

use image::{imageops::FilterType, RgbImage};

use crate::error::{PairError, Result};

/// A single raster image in the morph pipeline
///
/// Thin wrapper around an RGB buffer that carries the load/resize/save
/// operations the synthesizer and the fallback blender need.
#[derive(Clone, Debug)]
pub struct Frame {
    buffer: RgbImage,
}

impl Frame {
    /// Create a frame from an RGB image buffer
    pub fn new(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Load a frame from a raster image file on disk
    ///
    /// A file that is missing or undecodable maps to
    /// [`PairError::ImageUnreadable`], which the orchestrator treats as a
    /// pair-level failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|_| PairError::ImageUnreadable {
            path: path.display().to_string(),
        })?;
        Ok(Self {
            buffer: img.to_rgb8(),
        })
    }

    /// Get the width of the frame
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the frame
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Return this frame resized to the given dimensions
    ///
    /// Returns a plain clone when the dimensions already match.
    pub fn resize_to(&self, width: u32, height: u32) -> Frame {
        if self.width() == width && self.height() == height {
            return self.clone();
        }
        let buffer = image::imageops::resize(&self.buffer, width, height, FilterType::Triangle);
        Self { buffer }
    }

    /// Save the frame as a JPEG file
    pub fn save_jpeg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.buffer.save(path).map_err(|_| PairError::FrameWriteFailed {
            path: path.display().to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_pair_error() {
        let err = Frame::load("/nonexistent/image.png").unwrap_err();
        assert!(matches!(
            err,
            crate::error::MorphError::Pair(PairError::ImageUnreadable { .. })
        ));
    }

    #[test]
    fn test_resize_noop_keeps_dimensions() {
        let frame = Frame::new(RgbImage::from_pixel(8, 6, Rgb([10, 20, 30])));
        let same = frame.resize_to(8, 6);
        assert_eq!(same.width(), 8);
        assert_eq!(same.height(), 6);
        assert_eq!(same.as_image(), frame.as_image());
    }

    #[test]
    fn test_save_and_reload_jpeg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame_000.jpg");

        let frame = Frame::new(RgbImage::from_pixel(16, 16, Rgb([200, 100, 50])));
        frame.save_jpeg(&path).unwrap();

        let reloaded = Frame::load(&path).unwrap();
        assert_eq!(reloaded.width(), 16);
        assert_eq!(reloaded.height(), 16);
        // JPEG is lossy; a solid color should survive within a small tolerance
        let pixel = reloaded.as_image().get_pixel(8, 8);
        assert!((pixel[0] as i16 - 200).abs() <= 4);
        assert!((pixel[1] as i16 - 100).abs() <= 4);
        assert!((pixel[2] as i16 - 50).abs() <= 4);
    }
}
