//! Viewcrop Core - pan, zoom and capture for an image crop widget
//!
//! This crate provides the interactive part of the cropper: the transform
//! state driven by drag and wheel gestures, rendering the source image into
//! a fixed viewport, and capturing that viewport as a PNG.
//!
//! # Module Structure
//!
//! - `decode` - Turn file bytes into a [`SourceImage`]
//! - `transform` - Scale/offset state and the gesture reducers
//! - `render` - Viewport surface, redraw and capture
//! - `encode` - PNG encoding and [`CroppedResult`]
//! - `session` - The [`Cropper`] session state machine
//! - `config` - [`CropperConfig`]

pub mod config;
pub mod decode;
pub mod encode;
pub mod render;
pub mod session;
pub mod transform;

pub use config::CropperConfig;
pub use decode::{decode_image, DecodeError, SourceImage};
pub use encode::{encode_png, CroppedResult, EncodeError};
pub use render::{capture, Sampling, Viewport};
pub use session::{Cropper, LoadTicket, SessionStatus};
pub use transform::{Point, TransformState, ViewportTransform};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_bytes_to_cropped_png() {
        // 800x600 opaque gradient, encoded the way a user's file would arrive
        let mut pixels = Vec::with_capacity(800 * 600 * 4);
        for y in 0..600u32 {
            for x in 0..800u32 {
                pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 40, 255]);
            }
        }
        let file = encode_png(&pixels, 800, 600).unwrap();

        let mut cropper = Cropper::default();
        let ticket = cropper.begin_load();
        assert!(cropper.finish_load(ticket, decode_image(&file)));

        let result = cropper.commit().unwrap();
        let cropped = decode_image(&result.bytes).unwrap();
        assert_eq!((cropped.width, cropped.height), (400, 400));
        assert_eq!(cropped.pixel(0, 0), [0, 0, 40, 255]);
        assert_eq!(cropped.pixel(399, 399), [(399 % 256) as u8, (399 % 256) as u8, 40, 255]);
        assert_eq!(cropper.status(), SessionStatus::Idle);
    }
}
