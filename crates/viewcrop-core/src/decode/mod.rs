//! Image decoding for the crop session.
//!
//! This is the consumed side of the cropper: the host hands over raw file
//! bytes and gets back a [`SourceImage`] (or an error). Decoding runs
//! synchronously; the host is responsible for running it off the event
//! path and delivering the result to the session with its load ticket.

mod loader;
mod types;

pub use loader::{decode_image, get_orientation};
pub use types::{DecodeError, Orientation, SourceImage};
