#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Landslide risk dashboard state.
//!
//! [`Dashboard`] is the single owner of all mutable UI state: the
//! assessment inputs, the overall risk percentage, the region risk store,
//! and the map view controller. Presentation layers hold a `Dashboard`
//! and go through its methods; nothing is shared implicitly. All
//! operations are synchronous and take `&mut self`, so there is exactly
//! one writer at a time.

pub mod config;
pub mod overlay;

pub use config::DashboardConfig;
pub use overlay::{DashboardSnapshot, RegionOverlay};

use landguard_region::{CatalogError, RegionCatalog};
use landguard_risk::{
    RandomSnapshotModel, RegionRiskStore, SnapshotModel, StoreError, compute_aggregate_risk,
    recompute_region_snapshots,
};
use landguard_risk_models::{AssessmentInputs, AssessmentUpdate, RiskLevel};
use landguard_view::{MapViewport, ViewMode, ViewState, ViewStateController};
use serde::Serialize;
use thiserror::Error;

/// Errors raised by dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The region catalog failed to load or validate.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A snapshot batch did not match the catalog.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A focus request named a region not in the catalog.
    #[error("Unknown region: {name}")]
    UnknownRegion {
        /// The requested name.
        name: String,
    },

    /// The configuration is malformed or out of range.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },

    /// A configuration or catalog file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a "calculate risk" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationOutcome {
    /// New overall risk percentage.
    pub aggregate_risk: u8,
    /// Classification of the new percentage.
    pub risk_level: RiskLevel,
    /// Store generation after the snapshot batch was applied.
    pub generation: u64,
}

/// The dashboard state owner.
pub struct Dashboard<V: MapViewport> {
    catalog: RegionCatalog,
    store: RegionRiskStore,
    inputs: AssessmentInputs,
    aggregate_risk: u8,
    model: Box<dyn SnapshotModel>,
    view: ViewStateController<V>,
    focus_zoom: u8,
}

impl<V: MapViewport> Dashboard<V> {
    /// Builds a dashboard over an already validated catalog.
    ///
    /// Uses a [`RandomSnapshotModel`], seeded from `config.seed` when set.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if `config` fails validation.
    pub fn new(
        catalog: RegionCatalog,
        viewport: V,
        config: &DashboardConfig,
    ) -> Result<Self, DashboardError> {
        let model: Box<dyn SnapshotModel> = match config.seed {
            Some(seed) => Box::new(RandomSnapshotModel::seeded(seed)),
            None => Box::new(RandomSnapshotModel::from_entropy()),
        };
        Self::with_model(catalog, viewport, config, model)
    }

    /// Builds a dashboard with a custom snapshot model.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if `config` fails validation.
    pub fn with_model(
        catalog: RegionCatalog,
        viewport: V,
        config: &DashboardConfig,
        model: Box<dyn SnapshotModel>,
    ) -> Result<Self, DashboardError> {
        config.validate()?;

        let store = RegionRiskStore::from_catalog(&catalog);
        let view = ViewStateController::new(viewport, config.overview());

        Ok(Self {
            catalog,
            store,
            inputs: AssessmentInputs::default(),
            aggregate_risk: config.initial_risk,
            model,
            view,
            focus_zoom: config.focus_zoom,
        })
    }

    /// Loads the catalog named by `config` (or the built-in one) and
    /// builds a dashboard. Any configuration error aborts startup.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if the config is invalid or the catalog
    /// cannot be read, parsed, or validated.
    pub fn from_config(config: &DashboardConfig, viewport: V) -> Result<Self, DashboardError> {
        config.validate()?;

        let catalog = match &config.catalog_path {
            Some(path) => {
                log::info!("Loading region catalog from {}", path.display());
                let contents = std::fs::read_to_string(path)?;
                RegionCatalog::from_toml_str(&path.display().to_string(), &contents)?
            }
            None => RegionCatalog::builtin()?,
        };

        Self::new(catalog, viewport, config)
    }

    /// Updates one or more assessment inputs without recalculating.
    pub fn set_assessment_inputs(&mut self, update: AssessmentUpdate) {
        update.apply_to(&mut self.inputs);
        log::trace!("Assessment inputs now {:?}", self.inputs);
    }

    /// Recomputes the overall risk from the current inputs and replaces
    /// every region snapshot.
    ///
    /// Both results are applied together; if the snapshot batch is
    /// rejected neither is.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Store`] if the snapshot model produced a
    /// batch that does not match the catalog.
    pub fn calculate_risk(&mut self) -> Result<CalculationOutcome, DashboardError> {
        let aggregate_risk = compute_aggregate_risk(&self.inputs);
        let snapshots = recompute_region_snapshots(&self.catalog, self.model.as_mut());

        self.store.replace_all(snapshots)?;
        self.aggregate_risk = aggregate_risk;

        let outcome = CalculationOutcome {
            aggregate_risk,
            risk_level: RiskLevel::from_percentage(aggregate_risk),
            generation: self.store.generation(),
        };
        log::info!(
            "Calculated overall risk {}% ({}) for {:?}",
            outcome.aggregate_risk,
            outcome.risk_level,
            self.inputs
        );

        Ok(outcome)
    }

    /// Focuses the map on a catalog region.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownRegion`] if no region has that name;
    /// the view is left unchanged.
    pub fn focus_region(&mut self, name: &str) -> Result<ViewState, DashboardError> {
        let region = self
            .catalog
            .get(name)
            .ok_or_else(|| DashboardError::UnknownRegion {
                name: name.to_string(),
            })?;

        self.view
            .focus_region(&region.name, region.centroid, self.focus_zoom);

        Ok(self.view.state())
    }

    /// Returns the map to the overview.
    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Forwards a window-resize signal to the map viewport.
    pub fn notify_resize(&mut self) {
        self.view.notify_resize();
    }

    /// Current assessment inputs.
    #[must_use]
    pub const fn inputs(&self) -> AssessmentInputs {
        self.inputs
    }

    /// Current overall risk percentage.
    #[must_use]
    pub const fn aggregate_risk(&self) -> u8 {
        self.aggregate_risk
    }

    /// Classification of the current overall risk.
    #[must_use]
    pub const fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_percentage(self.aggregate_risk)
    }

    /// Current map view.
    #[must_use]
    pub const fn view_state(&self) -> ViewState {
        self.view.state()
    }

    /// Current view mode.
    #[must_use]
    pub const fn view_mode(&self) -> &ViewMode {
        self.view.mode()
    }

    /// The map viewport.
    #[must_use]
    pub const fn viewport(&self) -> &V {
        self.view.viewport()
    }

    /// The region catalog.
    #[must_use]
    pub const fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// The region risk store.
    #[must_use]
    pub const fn store(&self) -> &RegionRiskStore {
        &self.store
    }

    /// Region overlays in catalog order.
    #[must_use]
    pub fn overlays(&self) -> Vec<RegionOverlay> {
        self.store
            .with_regions(&self.catalog)
            .map(|(region, snapshot)| RegionOverlay::new(region, snapshot))
            .collect()
    }

    /// Region overlays as a `GeoJSON` feature collection.
    #[must_use]
    pub fn overlays_geojson(&self) -> geojson::FeatureCollection {
        let features = self
            .store
            .with_regions(&self.catalog)
            .filter_map(|(region, snapshot)| {
                let polygon = self.catalog.polygon(&region.name)?;
                Some(overlay::overlay_feature(
                    region,
                    polygon,
                    &RegionOverlay::new(region, snapshot),
                ))
            })
            .collect();

        geojson::FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    /// Everything the rendering layer needs, in one value.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let risk_level = self.risk_level();
        DashboardSnapshot {
            inputs: self.inputs,
            aggregate_risk: self.aggregate_risk,
            risk_level,
            advisory: risk_level.advisory().to_string(),
            overlays: self.overlays(),
            view: self.view.state(),
            mode: self.view.mode().clone(),
        }
    }
}
