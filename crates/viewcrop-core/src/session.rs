//! Crop session state machine.
//!
//! A [`Cropper`] owns everything that lives for one crop: the source image,
//! the transform, and the viewport surface. Sessions move through
//!
//! ```text
//! Idle -> Loading -> Active -> (commit) -> Idle
//!            \          \----> (close)  -> Idle
//!             \--------------> (close)  -> Idle
//! ```
//!
//! Decoding happens outside the cropper. Each load is tagged with a
//! [`LoadTicket`]; closing or restarting the session invalidates the ticket,
//! so a decode that finishes late cannot revive a session nobody is looking
//! at anymore.

use serde::{Deserialize, Serialize};

use crate::config::CropperConfig;
use crate::decode::{DecodeError, SourceImage};
use crate::encode::CroppedResult;
use crate::render::{capture, Viewport};
use crate::transform::{Point, TransformState, ViewportTransform};

/// Identifies one pending decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u32);

impl LoadTicket {
    pub fn from_raw(generation: u32) -> Self {
        Self(generation)
    }

    pub fn generation(self) -> u32 {
        self.0
    }
}

/// Externally visible session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Idle,
    Loading,
    Active,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Loading => "loading",
            SessionStatus::Active => "active",
        }
    }
}

#[derive(Debug)]
enum SessionState {
    Idle,
    Loading { ticket: LoadTicket },
    Active { image: SourceImage },
}

/// Interactive crop session: pan/zoom state, viewport, and lifecycle.
#[derive(Debug)]
pub struct Cropper {
    config: CropperConfig,
    transform: TransformState,
    viewport: Viewport,
    state: SessionState,
    generation: u32,
}

impl Default for Cropper {
    fn default() -> Self {
        Self::new(CropperConfig::default())
    }
}

impl Cropper {
    pub fn new(config: CropperConfig) -> Self {
        let config = config.validated();
        let viewport = Viewport::new(config.viewport_width, config.viewport_height);
        Self::with_viewport(config, viewport)
    }

    /// Build a cropper around an existing viewport.
    ///
    /// The viewport's dimensions win over the ones in `config`.
    pub fn with_viewport(config: CropperConfig, viewport: Viewport) -> Self {
        let mut config = config.validated();
        config.viewport_width = viewport.width();
        config.viewport_height = viewport.height();
        Self {
            transform: TransformState::new(config.zoom_limits()),
            config,
            viewport,
            state: SessionState::Idle,
            generation: 0,
        }
    }

    pub fn config(&self) -> &CropperConfig {
        &self.config
    }

    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::Idle => SessionStatus::Idle,
            SessionState::Loading { .. } => SessionStatus::Loading,
            SessionState::Active { .. } => SessionStatus::Active,
        }
    }

    pub fn transform(&self) -> ViewportTransform {
        self.transform.transform()
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    pub fn offset(&self) -> Point {
        self.transform.offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.transform.gesture().is_dragging()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The source image of the active session.
    pub fn image(&self) -> Option<&SourceImage> {
        match &self.state {
            SessionState::Active { image } => Some(image),
            _ => None,
        }
    }

    /// A file was picked and its decode has started.
    ///
    /// Any previous session is abandoned. The returned ticket must accompany
    /// the decode result in [`Cropper::finish_load`].
    pub fn begin_load(&mut self) -> LoadTicket {
        let ticket = LoadTicket(self.next_generation());
        self.transform.reset();
        self.viewport.clear();
        self.state = SessionState::Loading { ticket };
        log::debug!("session {} loading", ticket.0);
        ticket
    }

    /// Deliver a decode result.
    ///
    /// Returns `true` if the session became active. Results for a ticket that
    /// is no longer current are dropped. A failed decode leaves the session in
    /// `Loading`.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<SourceImage, DecodeError>,
    ) -> bool {
        match self.state {
            SessionState::Loading { ticket: current } if current == ticket => {}
            _ => {
                log::debug!("dropping decode result for stale session {}", ticket.0);
                return false;
            }
        }

        match result {
            Ok(image) if image.is_valid() => {
                self.activate(image);
                true
            }
            Ok(image) => {
                log::warn!(
                    "session {}: {}x{} image has a {} byte buffer, ignoring",
                    ticket.0,
                    image.width,
                    image.height,
                    image.pixels.len()
                );
                false
            }
            Err(e) => {
                log::warn!("decode failed for session {}: {e}", ticket.0);
                false
            }
        }
    }

    /// Start a session with an image that is already decoded.
    ///
    /// An image whose buffer does not match its dimensions is ignored and the
    /// current session is left untouched.
    pub fn open(&mut self, image: SourceImage) {
        if !image.is_valid() {
            log::warn!(
                "ignoring {}x{} image with a {} byte buffer",
                image.width,
                image.height,
                image.pixels.len()
            );
            return;
        }
        self.next_generation();
        self.activate(image);
    }

    /// Abandon the session without producing a result.
    pub fn close(&mut self) {
        self.next_generation();
        self.transform.reset();
        self.viewport.clear();
        if !matches!(self.state, SessionState::Idle) {
            log::debug!("session closed");
        }
        self.state = SessionState::Idle;
    }

    /// Capture the viewport and end the session.
    ///
    /// Only an active session can commit. If nothing could be captured the
    /// session stays active so the user can try again.
    pub fn commit(&mut self) -> Option<CroppedResult> {
        if !matches!(self.state, SessionState::Active { .. }) {
            return None;
        }
        let result = capture(&self.viewport)?;
        self.close();
        Some(result)
    }

    /// Pointer pressed at viewport-local `(x, y)`.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let changed = self.transform.pointer_down(x, y);
        self.redraw_if(changed)
    }

    /// Pointer moved to viewport-local `(x, y)`. Returns `true` on redraw.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let changed = self.transform.pointer_move(x, y);
        self.redraw_if(changed)
    }

    pub fn pointer_up(&mut self) -> bool {
        let changed = self.transform.pointer_up();
        self.redraw_if(changed)
    }

    /// One wheel event. Returns `true` on redraw.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        let changed = self.transform.wheel(delta_y);
        self.redraw_if(changed)
    }

    pub fn zoom_in(&mut self) -> bool {
        let changed = self.transform.zoom_in();
        self.redraw_if(changed)
    }

    pub fn zoom_out(&mut self) -> bool {
        let changed = self.transform.zoom_out();
        self.redraw_if(changed)
    }

    /// Repaint the viewport from the current image and transform.
    pub fn redraw(&mut self) {
        let image = match &self.state {
            SessionState::Active { image } => Some(image),
            _ => None,
        };
        self.viewport
            .redraw(image, &self.transform.transform(), self.config.sampling);
    }

    fn redraw_if(&mut self, changed: bool) -> bool {
        if changed && self.image().is_some() {
            self.redraw();
            return true;
        }
        false
    }

    fn activate(&mut self, image: SourceImage) {
        self.transform.reset();
        log::debug!(
            "session {} active with {}x{} image",
            self.generation,
            image.width,
            image.height
        );
        self.state = SessionState::Active { image };
        self.redraw();
    }

    fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}
