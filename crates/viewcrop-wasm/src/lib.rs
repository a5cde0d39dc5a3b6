//! Viewcrop WASM - WebAssembly bindings for Viewcrop
//!
//! This crate exposes the viewcrop-core crop session to a browser UI shell.
//!
//! # Module Structure
//!
//! - `cropper` - `JsCropper`, the interactive session (gestures, commit, close)
//! - `canvas` - Presenting the viewport on an `HtmlCanvasElement`
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropper } from '@viewcrop/wasm';
//!
//! await init();
//! const cropper = new JsCropper(undefined);
//! ```

use wasm_bindgen::prelude::*;

mod canvas;
mod cropper;
mod decode;
mod types;

pub use cropper::JsCropper;
pub use decode::decode_image;
pub use types::JsSourceImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // Re-instantiating the module finds the logger already installed
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Viewcrop WASM {} ready", version());
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
