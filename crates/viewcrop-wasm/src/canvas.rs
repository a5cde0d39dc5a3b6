//! Blitting the viewport onto an HTML canvas.

use viewcrop_core::Viewport;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// Copy the viewport's pixels onto `canvas`, resizing the canvas to match.
///
/// Returns `false` without touching anything when either the viewport or
/// the canvas 2d context is unavailable.
pub(crate) fn blit(viewport: &Viewport, canvas: &HtmlCanvasElement) -> bool {
    let Some(pixels) = viewport.pixels() else {
        log::warn!("viewport surface unavailable, nothing to present");
        return false;
    };
    let Some(ctx) = context_2d(canvas) else {
        log::warn!("canvas 2d context unavailable, skipping present");
        return false;
    };

    if canvas.width() != viewport.width() {
        canvas.set_width(viewport.width());
    }
    if canvas.height() != viewport.height() {
        canvas.set_height(viewport.height());
    }

    let data = match ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(pixels),
        viewport.width(),
        viewport.height(),
    ) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("failed to build ImageData: {e:?}");
            return false;
        }
    };

    ctx.put_image_data(&data, 0.0, 0.0).is_ok()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> HtmlCanvasElement {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_blit_resizes_canvas() {
        let canvas = canvas();
        assert!(blit(&Viewport::new(40, 30), &canvas));
        assert_eq!((canvas.width(), canvas.height()), (40, 30));
    }

    #[wasm_bindgen_test]
    fn test_blit_unavailable_viewport() {
        assert!(!blit(&Viewport::unavailable(40, 30), &canvas()));
    }
}
