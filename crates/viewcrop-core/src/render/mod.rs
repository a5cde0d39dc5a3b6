//! Viewport rendering and capture.
//!
//! The viewport is a fixed-size RGBA surface. [`Viewport::redraw`] paints the
//! source image into it under the current transform; whatever lands outside
//! the surface bounds is clipped, which is what produces the visual crop.
//! [`capture`] snapshots the rendered pixels into a standalone PNG.
//!
//! Both operations degrade to no-ops when the surface is unavailable.

mod capture;
mod sample;
mod viewport;

pub use capture::capture;
pub use sample::Sampling;
pub use viewport::Viewport;
