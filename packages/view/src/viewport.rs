//! The map viewport seam.

use landguard_region_models::LatLng;

use crate::ViewState;

/// A map widget whose center and zoom can be set imperatively.
pub trait MapViewport {
    /// Moves the viewport to `center` at `zoom`.
    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Tells the viewport its container changed size and its layout must
    /// be recomputed. Carries no payload.
    fn invalidate_size(&mut self) {}
}

/// Viewport that records every view applied to it.
///
/// Used by headless shells and tests in place of a real map widget.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewport {
    applied: Vec<ViewState>,
    current: Option<ViewState>,
    resizes: usize,
}

impl RecordingViewport {
    /// Every view applied, oldest first.
    #[must_use]
    pub fn applied(&self) -> &[ViewState] {
        &self.applied
    }

    /// The view the widget currently shows.
    #[must_use]
    pub const fn current(&self) -> Option<ViewState> {
        self.current
    }

    /// Number of resize signals received.
    #[must_use]
    pub const fn resize_count(&self) -> usize {
        self.resizes
    }

    /// Simulates the widget moving on its own (e.g. inertial pan).
    pub const fn drift_to(&mut self, view: ViewState) {
        self.current = Some(view);
    }
}

impl MapViewport for RecordingViewport {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        let view = ViewState::new(center, zoom);
        log::trace!("Viewport set to {center} zoom {zoom}");
        self.applied.push(view);
        self.current = Some(view);
    }

    fn invalidate_size(&mut self) {
        self.resizes += 1;
    }
}
