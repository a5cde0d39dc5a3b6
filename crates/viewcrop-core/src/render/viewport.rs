//! The fixed-size drawing surface.

use image::{Rgba, RgbaImage};

use super::sample::{Sampling, Tap};
use crate::config::MAX_VIEWPORT_SIZE;
use crate::decode::SourceImage;
use crate::transform::ViewportTransform;

/// Fixed-size RGBA surface the source image is rendered onto.
///
/// Dimensions are set at construction and never change. A viewport built
/// with [`Viewport::unavailable`] has no backing surface: it reports its
/// size but every draw is skipped.
#[derive(Debug, Clone)]
pub struct Viewport {
    width: u32,
    height: u32,
    surface: Option<RgbaImage>,
}

impl Viewport {
    /// Allocate a transparent surface.
    ///
    /// Edges longer than [`MAX_VIEWPORT_SIZE`] are not allocated; the
    /// viewport comes back unavailable instead.
    pub fn new(width: u32, height: u32) -> Self {
        if width > MAX_VIEWPORT_SIZE || height > MAX_VIEWPORT_SIZE {
            log::warn!("refusing to allocate {width}x{height} viewport");
            return Self::unavailable(width, height);
        }
        Self {
            width,
            height,
            surface: Some(RgbaImage::new(width, height)),
        }
    }

    /// A viewport whose drawing surface could not be acquired.
    pub fn unavailable(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            surface: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_available(&self) -> bool {
        self.surface.is_some()
    }

    /// The rendered surface, if there is one.
    pub fn surface(&self) -> Option<&RgbaImage> {
        self.surface.as_ref()
    }

    /// Rendered RGBA bytes in row-major order.
    pub fn pixels(&self) -> Option<&[u8]> {
        self.surface.as_ref().map(|s| s.as_raw().as_slice())
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            for p in surface.pixels_mut() {
                *p = Rgba([0, 0, 0, 0]);
            }
        }
    }

    /// Clear the surface and draw `image` under `transform`.
    ///
    /// The whole source is drawn at `transform.offset` with size
    /// `(width * scale, height * scale)`; the surface bounds clip the rest.
    /// With no image there is nothing to draw and the surface is left as is.
    pub fn redraw(
        &mut self,
        image: Option<&SourceImage>,
        transform: &ViewportTransform,
        sampling: Sampling,
    ) {
        let Some(image) = image else {
            return;
        };
        let Some(surface) = self.surface.as_mut() else {
            log::warn!("viewport surface unavailable, skipping redraw");
            return;
        };

        for p in surface.pixels_mut() {
            *p = Rgba([0, 0, 0, 0]);
        }

        if !image.is_valid() {
            log::warn!("source pixel buffer does not match its dimensions");
            return;
        }
        if !(transform.scale > 0.0) {
            return;
        }

        let cols = axis_taps(
            self.width,
            transform.offset.x,
            transform.scale,
            image.width,
            sampling,
        );
        let rows = axis_taps(
            self.height,
            transform.offset.y,
            transform.scale,
            image.height,
            sampling,
        );

        for (y, row) in &rows {
            for (x, col) in &cols {
                surface.put_pixel(*x, *y, Rgba(sampling.sample(image, *col, *row)));
            }
        }
    }
}

/// Taps for every destination pixel along one axis whose center falls
/// inside the drawn image span `[offset, offset + len * scale)`.
fn axis_taps(
    dst_len: u32,
    offset: f64,
    scale: f64,
    src_len: u32,
    sampling: Sampling,
) -> Vec<(u32, Tap)> {
    let span_end = offset + f64::from(src_len) * scale;
    let first = (offset - 0.5).ceil().clamp(0.0, f64::from(dst_len)) as u32;
    let end = (span_end - 0.5).ceil().clamp(0.0, f64::from(dst_len)) as u32;

    (first..end)
        .map(|d| {
            let u = (f64::from(d) + 0.5 - offset) / scale;
            (d, sampling.tap(u, src_len))
        })
        .collect()
}
