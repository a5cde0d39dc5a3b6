//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The file decoded to an image with no pixels.
    #[error("Decoded image has zero width or height")]
    EmptyImage,
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded source image with RGBA pixel data.
///
/// Once loaded, a source image is never mutated. The session holds it for
/// the duration of one crop and drops it on close or commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl SourceImage {
    /// Create a new SourceImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a SourceImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Byte length of an RGBA buffer for `width x height`, or `None` if it
    /// does not fit in `usize`.
    pub fn expected_len(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
    }

    /// Non-empty, and the pixel buffer holds exactly `width * height` RGBA
    /// pixels. Only valid images may be sampled with [`SourceImage::pixel`].
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && Self::expected_len(self.width, self.height) == Some(self.pixels.len())
    }

    /// Read the RGBA value at `(x, y)`. Coordinates must be in bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal); // Invalid defaults to Normal
    }

    #[test]
    fn test_source_image_creation() {
        let img = SourceImage::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixel_count(), 5000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_source_image_empty() {
        let img = SourceImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_is_valid_checks_buffer_length() {
        assert!(SourceImage::new(3, 2, vec![0u8; 24]).is_valid());
        assert!(!SourceImage::new(0, 0, vec![]).is_valid());

        let short = SourceImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 8],
        };
        assert!(!short.is_valid());

        let huge = SourceImage {
            width: u32::MAX,
            height: u32::MAX,
            pixels: vec![0u8; 4],
        };
        assert!(!huge.is_valid());
    }

    #[test]
    fn test_expected_len() {
        assert_eq!(SourceImage::expected_len(100, 50), Some(20000));
        assert_eq!(SourceImage::expected_len(0, 7), Some(0));
    }

    #[test]
    fn test_pixel_lookup() {
        let mut pixels = vec![0u8; 2 * 2 * 4];
        // (1, 1) is the last pixel
        pixels[12..16].copy_from_slice(&[10, 20, 30, 255]);
        let img = SourceImage::new(2, 2, pixels);
        assert_eq!(img.pixel(1, 1), [10, 20, 30, 255]);
        assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_from_rgba_image() {
        let rgba = image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 4]));
        let img = SourceImage::from_rgba_image(rgba);
        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(img.pixel(2, 1), [1, 2, 3, 4]);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("truncated".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image file: truncated");

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
