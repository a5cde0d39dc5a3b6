//! Crop session WASM bindings.
//!
//! The host UI shell owns the file input, modal and download link; it
//! forwards pointer, wheel and button events here and calls `present` after
//! anything that returned `true`.
//!
//! # Example
//!
//! ```typescript
//! const cropper = new JsCropper(undefined); // 400x400 defaults
//!
//! input.onchange = async () => {
//!   const ticket = cropper.begin_load();
//!   const bytes = new Uint8Array(await input.files[0].arrayBuffer());
//!   if (cropper.finish_load(ticket, bytes)) cropper.present(canvas);
//! };
//!
//! canvas.onmousedown = (e) => cropper.pointer_down(e.offsetX, e.offsetY);
//! window.onmousemove = (e) => {
//!   const r = canvas.getBoundingClientRect();
//!   if (cropper.pointer_move(e.clientX - r.left, e.clientY - r.top)) cropper.present(canvas);
//! };
//! window.onmouseup = () => cropper.pointer_up();
//!
//! const png = cropper.commit(); // Uint8Array | undefined
//! ```

use crate::canvas;
use crate::types::JsSourceImage;
use viewcrop_core::{decode, Cropper, CropperConfig, LoadTicket};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// An interactive crop session exposed to JavaScript.
#[wasm_bindgen]
pub struct JsCropper {
    inner: Cropper,
}

#[wasm_bindgen]
impl JsCropper {
    /// Create a cropper. `config` may be `undefined` or a partial
    /// `CropperConfig` object; missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsCropper, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            CropperConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid cropper config: {}", e)))?
        };
        Ok(Self::from_config(config))
    }

    /// Mark the start of a file decode. Pass the returned ticket to
    /// `finish_load`.
    pub fn begin_load(&mut self) -> u32 {
        self.inner.begin_load().generation()
    }

    /// Decode `bytes` and, if the ticket is still current, activate the
    /// session. Decode failures keep the session loading and return `false`.
    pub fn finish_load(&mut self, ticket: u32, bytes: &[u8]) -> bool {
        let result = decode::decode_image(bytes);
        self.inner.finish_load(LoadTicket::from_raw(ticket), result)
    }

    /// Start a session from an already decoded image. Images whose buffer
    /// does not match their dimensions are ignored.
    pub fn open(&mut self, image: &JsSourceImage) {
        self.inner.open(image.to_source());
    }

    /// Abandon the session without a result.
    pub fn close(&mut self) {
        self.inner.close();
    }

    /// Capture the viewport as PNG bytes and end the session.
    ///
    /// Returns `undefined` when there is no active session or nothing could
    /// be captured.
    pub fn commit(&mut self) -> Option<js_sys::Uint8Array> {
        self.inner
            .commit()
            .map(|result| js_sys::Uint8Array::from(result.bytes.as_slice()))
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.inner.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.inner.pointer_move(x, y)
    }

    pub fn pointer_up(&mut self) -> bool {
        self.inner.pointer_up()
    }

    pub fn wheel(&mut self, delta_y: f64) -> bool {
        self.inner.wheel(delta_y)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.inner.zoom_in()
    }

    pub fn zoom_out(&mut self) -> bool {
        self.inner.zoom_out()
    }

    /// Draw the current viewport onto `canvas`.
    pub fn present(&self, canvas: &HtmlCanvasElement) -> bool {
        canvas::blit(self.inner.viewport(), canvas)
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale()
    }

    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> f64 {
        self.inner.offset().x
    }

    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> f64 {
        self.inner.offset().y
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// `{ scale, offset: { x, y } }`
    pub fn transform(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.transform())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// One of `"idle"`, `"loading"`, `"active"`.
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.inner.status().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn viewport_width(&self) -> u32 {
        self.inner.viewport().width()
    }

    #[wasm_bindgen(getter)]
    pub fn viewport_height(&self) -> u32 {
        self.inner.viewport().height()
    }

    /// Rendered viewport as RGBA bytes (copied). Empty if unavailable.
    pub fn viewport_pixels(&self) -> Vec<u8> {
        self.inner
            .viewport()
            .pixels()
            .map(<[u8]>::to_vec)
            .unwrap_or_default()
    }
}

impl JsCropper {
    pub(crate) fn from_config(config: CropperConfig) -> Self {
        Self {
            inner: Cropper::new(config),
        }
    }

    #[cfg(test)]
    pub(crate) fn inner_mut(&mut self) -> &mut Cropper {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewcrop_core::SessionStatus;

    fn png_file(width: u32, height: u32) -> Vec<u8> {
        let pixels = vec![90u8; (width * height * 4) as usize];
        viewcrop_core::encode_png(&pixels, width, height).unwrap()
    }

    #[test]
    fn test_default_dimensions() {
        let cropper = JsCropper::from_config(CropperConfig::default());
        assert_eq!(cropper.viewport_width(), 400);
        assert_eq!(cropper.viewport_height(), 400);
        assert_eq!(cropper.status(), "idle");
        assert_eq!(cropper.viewport_pixels().len(), 400 * 400 * 4);
    }

    #[test]
    fn test_load_and_interact() {
        let mut cropper = JsCropper::from_config(CropperConfig::default());
        let ticket = cropper.begin_load();
        assert_eq!(cropper.status(), "loading");
        assert!(cropper.finish_load(ticket, &png_file(20, 20)));
        assert_eq!(cropper.status(), "active");

        cropper.pointer_down(50.0, 50.0);
        assert!(cropper.is_dragging());
        assert!(cropper.pointer_move(80.0, 65.0));
        cropper.pointer_up();
        assert_eq!((cropper.offset_x(), cropper.offset_y()), (30.0, 15.0));

        for _ in 0..25 {
            cropper.zoom_in();
        }
        assert_eq!(cropper.scale(), 2.0);
    }

    #[test]
    fn test_bad_file_stays_loading() {
        let mut cropper = JsCropper::from_config(CropperConfig::default());
        let ticket = cropper.begin_load();
        assert!(!cropper.finish_load(ticket, b"not an image"));
        assert_eq!(cropper.status(), "loading");
    }

    #[test]
    fn test_close_before_decode_finishes() {
        let mut cropper = JsCropper::from_config(CropperConfig::default());
        let ticket = cropper.begin_load();
        cropper.close();
        assert!(!cropper.finish_load(ticket, &png_file(4, 4)));
        assert_eq!(cropper.status(), "idle");
    }

    #[test]
    fn test_open_rejects_mismatched_buffer() {
        let mut cropper = JsCropper::from_config(CropperConfig::default());
        cropper.open(&JsSourceImage::new(10, 10, vec![0u8; 7]));
        assert_eq!(cropper.status(), "idle");

        cropper.open(&JsSourceImage::new(2, 2, vec![255u8; 16]));
        assert_eq!(cropper.status(), "active");
    }

    #[test]
    fn test_commit_through_core() {
        let mut cropper = JsCropper::from_config(CropperConfig::default());
        cropper.open(&JsSourceImage::new(2, 2, vec![255u8; 16]));
        let result = cropper.inner_mut().commit().unwrap();
        assert_eq!((result.width, result.height), (400, 400));
        assert_eq!(cropper.inner_mut().status(), SessionStatus::Idle);
    }
}
