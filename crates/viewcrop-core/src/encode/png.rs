//! PNG encoding for crop results.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// Output is deterministic: the same pixels always give the same bytes.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// An encoded snapshot of the viewport, handed to the host on commit.
///
/// Owns its bytes outright; nothing refers back to the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CroppedResult {
    pub width: u32,
    pub height: u32,
    /// PNG file bytes.
    pub bytes: Vec<u8>,
}

impl CroppedResult {
    pub const MIME_TYPE: &'static str = "image/png";

    pub fn new(width: u32, height: u32, bytes: Vec<u8>) -> Self {
        Self {
            width,
            height,
            bytes,
        }
    }

    /// MIME type for the download link.
    pub fn mime_type(&self) -> &'static str {
        Self::MIME_TYPE
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_encode_png_basic() {
        let pixels = vec![128u8; 100 * 100 * 4];
        let png = encode_png(&pixels, 100, 100).unwrap();

        assert_eq!(&png[0..8], PNG_SIGNATURE);
        // IEND chunk type sits 8 bytes before the end (type + CRC)
        assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
    }

    #[test]
    fn test_encode_png_lossless() {
        let pixels: Vec<u8> = (0..16 * 8 * 4).map(|i| (i * 31 % 256) as u8).collect();
        let png = encode_png(&pixels, 16, 8).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (16, 8));
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn test_encode_png_deterministic() {
        let pixels: Vec<u8> = (0..32 * 32 * 4).map(|i| (i % 251) as u8).collect();
        let a = encode_png(&pixels, 32, 32).unwrap();
        let b = encode_png(&pixels, 32, 32).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_png_invalid_pixel_data_short() {
        let pixels = vec![128u8; 99 * 100 * 4]; // One row short
        let result = encode_png(&pixels, 100, 100);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_png_rgb_sized_buffer_rejected() {
        let pixels = vec![128u8; 10 * 10 * 3];
        let result = encode_png(&pixels, 10, 10);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 400,
                actual: 300
            })
        ));
    }

    #[test]
    fn test_encode_png_zero_width() {
        let result = encode_png(&[], 0, 100);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_zero_height() {
        let result = encode_png(&[], 100, 0);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_cropped_result_mime_type() {
        let result = CroppedResult::new(1, 1, vec![1, 2, 3]);
        assert_eq!(result.mime_type(), "image/png");
        assert_eq!(result.into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::InvalidDimensions { width: 0, height: 5 };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (5) must be non-zero"
        );
    }
}
