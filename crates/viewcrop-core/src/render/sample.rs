//! Source sampling for viewport redraws.

use serde::{Deserialize, Serialize};

use crate::decode::SourceImage;

/// Resampling filter used when the source is drawn scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// Nearest neighbor (blocky when zoomed in, exact copies).
    Nearest,
    /// Bilinear in premultiplied alpha, like a smoothed canvas `drawImage`.
    #[default]
    Bilinear,
}

/// Precomputed source lookup for one destination column or row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Tap {
    pub lo: u32,
    pub hi: u32,
    /// Weight of `hi`, in `0.0..1.0`.
    pub t: f32,
}

impl Sampling {
    /// Build the tap for continuous source coordinate `u` along an axis of
    /// length `len`. `u` is measured from the source edge, so pixel `i`
    /// covers `i..i + 1` and has its center at `i + 0.5`.
    pub(crate) fn tap(self, u: f64, len: u32) -> Tap {
        let last = len.saturating_sub(1);
        match self {
            Sampling::Nearest => {
                let i = (u.floor().max(0.0) as u32).min(last);
                Tap { lo: i, hi: i, t: 0.0 }
            }
            Sampling::Bilinear => {
                let f = u - 0.5;
                let base = f.floor();
                let t = (f - base) as f32;
                let lo = base.clamp(0.0, f64::from(last)) as u32;
                let hi = (base + 1.0).clamp(0.0, f64::from(last)) as u32;
                Tap { lo, hi, t }
            }
        }
    }

    /// Sample the source at the crossing of a column tap and a row tap.
    pub(crate) fn sample(self, image: &SourceImage, col: Tap, row: Tap) -> [u8; 4] {
        match self {
            Sampling::Nearest => image.pixel(col.lo, row.lo),
            Sampling::Bilinear => {
                if col.t == 0.0 && row.t == 0.0 {
                    return image.pixel(col.lo, row.lo);
                }
                let top = lerp_premul(
                    premultiply(image.pixel(col.lo, row.lo)),
                    premultiply(image.pixel(col.hi, row.lo)),
                    col.t,
                );
                let bottom = lerp_premul(
                    premultiply(image.pixel(col.lo, row.hi)),
                    premultiply(image.pixel(col.hi, row.hi)),
                    col.t,
                );
                unpremultiply(lerp_premul(top, bottom, row.t))
            }
        }
    }
}

#[inline]
fn premultiply(p: [u8; 4]) -> [f32; 4] {
    let a = f32::from(p[3]) / 255.0;
    [
        f32::from(p[0]) * a,
        f32::from(p[1]) * a,
        f32::from(p[2]) * a,
        f32::from(p[3]),
    ]
}

#[inline]
fn lerp_premul(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let mut out = [0.0; 4];
    for i in 0..4 {
        out[i] = a[i] + (b[i] - a[i]) * t;
    }
    out
}

#[inline]
fn unpremultiply(p: [f32; 4]) -> [u8; 4] {
    let alpha = p[3];
    if alpha <= 0.0 {
        return [0, 0, 0, 0];
    }
    let scale = 255.0 / alpha;
    let channel = |v: f32| (v * scale).round().clamp(0.0, 255.0) as u8;
    [
        channel(p[0]),
        channel(p[1]),
        channel(p[2]),
        alpha.round().clamp(0.0, 255.0) as u8,
    ]
}
