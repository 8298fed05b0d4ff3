#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map view state controller.
//!
//! Holds the authoritative map center and zoom and pushes it to the map
//! viewport on every change. The viewport itself may drift (inertial
//! panning, user scrolling); the controller re-asserts its state each
//! time it is asked to, whether or not the target changed.
//!
//! The controller is the only writer of the viewport. Rendering layers
//! implement [`MapViewport`] and hand it over at construction.

mod viewport;

pub use viewport::{MapViewport, RecordingViewport};

use landguard_region_models::LatLng;
use serde::{Deserialize, Serialize};

/// Zoom level of the city-wide overview.
pub const OVERVIEW_ZOOM: u8 = 11;
/// Zoom level used when focusing a single region.
pub const FOCUS_ZOOM: u8 = 15;
/// Center of the city-wide overview (Rio de Janeiro).
pub const OVERVIEW_CENTER: LatLng = LatLng::new(-22.9068, -43.1729);

/// The map viewport's center and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Map center.
    pub center: LatLng,
    /// Integer zoom level.
    pub zoom: u8,
}

impl ViewState {
    /// Creates a view state.
    #[must_use]
    pub const fn new(center: LatLng, zoom: u8) -> Self {
        Self { center, zoom }
    }

    /// The default city-wide overview.
    #[must_use]
    pub const fn overview() -> Self {
        Self::new(OVERVIEW_CENTER, OVERVIEW_ZOOM)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::overview()
    }
}

/// Which logical state the controller is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "region", rename_all = "camelCase")]
pub enum ViewMode {
    /// Showing the default overview.
    Overview,
    /// Zoomed in on the named region.
    Focused(String),
}

/// Owns the view state and the viewport it drives.
#[derive(Debug)]
pub struct ViewStateController<V: MapViewport> {
    overview: ViewState,
    state: ViewState,
    mode: ViewMode,
    viewport: V,
}

impl<V: MapViewport> ViewStateController<V> {
    /// Creates a controller starting at `overview` and immediately drives
    /// the viewport there.
    pub fn new(viewport: V, overview: ViewState) -> Self {
        let mut controller = Self {
            overview,
            state: overview,
            mode: ViewMode::Overview,
            viewport,
        };
        controller.apply();
        controller
    }

    /// Centers the map on a region's centroid at `zoom`.
    ///
    /// The viewport is driven synchronously, even if the requested state
    /// equals the current one. Calling this twice with the same arguments
    /// leaves the same final state as calling it once.
    pub fn focus_region(&mut self, region: &str, centroid: LatLng, zoom: u8) {
        log::debug!("Focusing region {region} at {centroid} zoom {zoom}");
        self.state = ViewState::new(centroid, zoom);
        self.mode = ViewMode::Focused(region.to_string());
        self.apply();
    }

    /// Restores the default overview.
    pub fn reset(&mut self) {
        log::debug!("Resetting view to overview");
        self.state = self.overview;
        self.mode = ViewMode::Overview;
        self.apply();
    }

    /// Pushes the current state to the viewport, overriding any drift.
    pub fn apply(&mut self) {
        self.viewport.set_view(self.state.center, self.state.zoom);
    }

    /// Forwards a window-resize signal to the viewport.
    pub fn notify_resize(&mut self) {
        self.viewport.invalidate_size();
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> ViewState {
        self.state
    }

    /// Current logical mode.
    #[must_use]
    pub const fn mode(&self) -> &ViewMode {
        &self.mode
    }

    /// The overview this controller resets to.
    #[must_use]
    pub const fn overview(&self) -> ViewState {
        self.overview
    }

    /// Read-only access to the viewport.
    #[must_use]
    pub const fn viewport(&self) -> &V {
        &self.viewport
    }
}
