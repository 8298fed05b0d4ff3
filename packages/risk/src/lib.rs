#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Landslide risk engine and region risk store.
//!
//! [`engine`] holds the pure scoring functions: the weighted overall risk
//! formula and the risk-to-color mapping. [`model`] produces per-region
//! snapshots behind the [`SnapshotModel`] trait, and [`store`] keeps the
//! current batch of snapshots, replacing it wholesale on each
//! recalculation.

pub mod engine;
pub mod model;
pub mod store;

pub use engine::{compute_aggregate_risk, risk_to_color};
pub use model::{
    BaselineSnapshotModel, RandomSnapshotModel, SnapshotModel, recompute_region_snapshots,
};
pub use store::{RegionRiskStore, StoreError};
