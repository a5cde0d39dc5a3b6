//! Lossless encoding of captured viewports.
//!
//! Captures are encoded as RGBA PNG so transparent regions of the viewport
//! (where the image did not cover it) survive into the download.

mod png;

pub use png::{encode_png, CroppedResult, EncodeError};
