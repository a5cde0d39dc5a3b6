//! Pan and zoom state for the crop viewport.
//!
//! The transform maps source-image pixels into viewport coordinates:
//! translate by `offset`, then scale uniformly. It is mutated only through
//! the gesture reducers on [`TransformState`]; every reducer reports whether
//! the transform changed so the caller knows when to redraw.
//!
//! # Coordinate System
//!
//! - Pointer coordinates are viewport-local, in logical pixels
//! - Origin is the viewport's top-left corner
//! - A source pixel `p` lands at `offset + p * scale`

mod gesture;
mod state;

pub use gesture::{Gesture, Point};
pub use state::{TransformState, ViewportTransform, ZoomLimits};
