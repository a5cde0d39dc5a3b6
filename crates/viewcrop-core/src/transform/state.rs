//! Transform reducers for drag, wheel and button zoom.

use serde::{Deserialize, Serialize};

use super::gesture::{Gesture, Point};

/// Uniform scale plus translation from source space into the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    /// Uniform scale factor, always positive.
    pub scale: f64,
    /// Viewport position of the source image's top-left corner.
    pub offset: Point,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Point::ORIGIN,
        }
    }
}

impl ViewportTransform {
    /// Map a source-space point to viewport coordinates.
    pub fn to_viewport(&self, p: Point) -> Point {
        Point::new(self.offset.x + p.x * self.scale, self.offset.y + p.y * self.scale)
    }

    /// Map a viewport point back into source space.
    pub fn to_source(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.offset.x) / self.scale,
            (p.y - self.offset.y) / self.scale,
        )
    }
}

/// Zoom step and bounds.
///
/// `max_button_scale` caps only the discrete zoom-in control. Wheel zoom has
/// no upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub step: f64,
    pub min_scale: f64,
    pub max_button_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            step: 0.1,
            min_scale: 0.1,
            max_button_scale: 2.0,
        }
    }
}

/// Owned transform state with one reducer per input gesture.
///
/// Every reducer returns `true` when the transform changed and the viewport
/// needs a redraw.
#[derive(Debug, Clone, Default)]
pub struct TransformState {
    transform: ViewportTransform,
    gesture: Gesture,
    limits: ZoomLimits,
}

impl TransformState {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            transform: ViewportTransform::default(),
            gesture: Gesture::Idle,
            limits,
        }
    }

    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    pub fn offset(&self) -> Point {
        self.transform.offset
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Start a drag at viewport-local `(x, y)`.
    ///
    /// A pointer-down during an active drag replaces it, so there is never
    /// more than one gesture in flight.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let pointer = Point::new(x, y);
        if !pointer.is_finite() {
            return false;
        }
        self.gesture = Gesture::Dragging {
            grab: pointer - self.transform.offset,
        };
        false
    }

    /// Move the image so the grabbed point stays under the pointer.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let Gesture::Dragging { grab } = self.gesture else {
            return false;
        };
        let pointer = Point::new(x, y);
        if !pointer.is_finite() {
            return false;
        }
        self.set_offset(pointer - grab)
    }

    /// End the drag. No inertia, no snapping.
    pub fn pointer_up(&mut self) -> bool {
        self.gesture = Gesture::Idle;
        false
    }

    /// Apply one wheel notch: negative delta zooms in, anything else zooms out.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        if delta_y.is_nan() {
            return false;
        }
        let step = if delta_y < 0.0 {
            self.limits.step
        } else {
            -self.limits.step
        };
        self.set_scale((self.transform.scale + step).max(self.limits.min_scale))
    }

    /// Discrete zoom-in control, capped at `max_button_scale`.
    ///
    /// When wheel zoom has already gone past the cap, this clamps straight
    /// down to it.
    pub fn zoom_in(&mut self) -> bool {
        let next = (self.transform.scale + self.limits.step).min(self.limits.max_button_scale);
        self.set_scale(next.max(self.limits.min_scale))
    }

    /// Discrete zoom-out control, floored at `min_scale`.
    pub fn zoom_out(&mut self) -> bool {
        self.set_scale((self.transform.scale - self.limits.step).max(self.limits.min_scale))
    }

    /// Back to the default transform with no gesture in flight.
    pub fn reset(&mut self) -> bool {
        self.gesture = Gesture::Idle;
        let changed = self.transform != ViewportTransform::default();
        self.transform = ViewportTransform::default();
        changed
    }

    fn set_scale(&mut self, scale: f64) -> bool {
        if scale == self.transform.scale {
            return false;
        }
        self.transform.scale = scale;
        true
    }

    fn set_offset(&mut self, offset: Point) -> bool {
        if offset == self.transform.offset {
            return false;
        }
        self.transform.offset = offset;
        true
    }
}
