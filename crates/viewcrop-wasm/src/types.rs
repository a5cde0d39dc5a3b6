//! WASM-compatible wrapper types for image data.

use viewcrop_core::SourceImage;
use wasm_bindgen::prelude::*;

/// A decoded source image wrapper for JavaScript.
///
/// Pixel data stays in WASM memory until `pixels()` copies it out.
#[wasm_bindgen]
pub struct JsSourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Create a new JsSourceImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSourceImage {
        JsSourceImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Check that the buffer length matches the dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && SourceImage::expected_len(self.width, self.height) == Some(self.pixels.len())
    }
}

impl JsSourceImage {
    pub(crate) fn from_source(img: SourceImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert to a core SourceImage. Clones the pixel data.
    pub(crate) fn to_source(&self) -> SourceImage {
        SourceImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_source_image_creation() {
        let img = JsSourceImage::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
        assert!(img.is_valid());
    }

    #[test]
    fn test_invalid_buffer_length() {
        let img = JsSourceImage::new(10, 10, vec![0u8; 10 * 10 * 3]);
        assert!(!img.is_valid());
        assert!(!JsSourceImage::new(0, 0, vec![]).is_valid());
    }

    #[test]
    fn test_source_round_trip_keeps_pixels() {
        let pixels = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
        let js_img = JsSourceImage::from_source(SourceImage::new(2, 1, pixels.clone()));
        let back = js_img.to_source();
        assert_eq!(back.width, 2);
        assert_eq!(back.pixels, pixels);
        assert_eq!(js_img.pixels(), pixels);
    }
}
