//! Viewport snapshot into a standalone PNG.

use image::RgbaImage;

use super::Viewport;
use crate::encode::{encode_png, CroppedResult};

/// Snapshot exactly what the viewport currently shows.
///
/// A fresh transparent surface with the viewport's dimensions receives the
/// rendered pixels via source-over compositing, and is then PNG encoded. The
/// geometry is never recomputed from the source image.
///
/// Returns `None` when the viewport has no surface or encoding fails; both
/// are logged and otherwise absorbed.
pub fn capture(viewport: &Viewport) -> Option<CroppedResult> {
    let Some(surface) = viewport.surface() else {
        log::warn!("viewport surface unavailable, nothing to capture");
        return None;
    };

    let mut snapshot = RgbaImage::new(viewport.width(), viewport.height());
    image::imageops::overlay(&mut snapshot, surface, 0, 0);

    match encode_png(snapshot.as_raw(), snapshot.width(), snapshot.height()) {
        Ok(bytes) => {
            log::debug!(
                "captured {}x{} viewport ({} bytes)",
                snapshot.width(),
                snapshot.height(),
                bytes.len()
            );
            Some(CroppedResult::new(snapshot.width(), snapshot.height(), bytes))
        }
        Err(e) => {
            log::warn!("capture failed: {e}");
            None
        }
    }
}
