#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Validated, immutable catalog of monitored regions.
//!
//! The catalog is loaded once at startup, either from the region TOML
//! files embedded at compile time (see [`registry`]) or from a
//! user-supplied catalog file. Every region is validated before the
//! catalog is handed out: a single malformed entry fails the whole load
//! and no partial catalog is ever exposed.

pub mod geometry;
pub mod registry;

use std::collections::BTreeMap;

use geo::{Contains, Point, Polygon};
use landguard_region_models::{LatLng, Region};
use serde::Deserialize;
use thiserror::Error;

/// Configuration errors raised while building a [`RegionCatalog`].
///
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A catalog document could not be parsed.
    #[error("Failed to parse region catalog '{source_name}': {message}")]
    Parse {
        /// File or registry entry the document came from.
        source_name: String,
        /// Parser error message.
        message: String,
    },

    /// The catalog contains no regions.
    #[error("Region catalog is empty")]
    Empty,

    /// A region has a blank name.
    #[error("Region #{index} has an empty name")]
    EmptyName {
        /// Position of the offending region in the catalog.
        index: usize,
    },

    /// Two regions share the same name.
    #[error("Duplicate region name: {name}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// A boundary has fewer points than a closed ring needs.
    #[error("Region {region}: boundary has {points} points, expected at least {min}")]
    TooFewPoints {
        /// Region name.
        region: String,
        /// Number of points found.
        points: usize,
        /// Minimum required.
        min: usize,
    },

    /// A boundary's first and last points differ.
    #[error("Region {region}: boundary is not closed (first and last points differ)")]
    OpenBoundary {
        /// Region name.
        region: String,
    },

    /// A boundary encloses no area.
    #[error("Region {region}: boundary is degenerate (zero area)")]
    DegenerateBoundary {
        /// Region name.
        region: String,
    },

    /// A coordinate is non-finite or outside WGS84 ranges.
    #[error("Region {region}: invalid coordinate {coordinate} in {field}")]
    InvalidCoordinate {
        /// Region name.
        region: String,
        /// Which field held the coordinate (`boundary` or `centroid`).
        field: &'static str,
        /// The offending coordinate.
        coordinate: LatLng,
    },

    /// A baseline value lies outside `[0, 100]`.
    #[error("Region {region}: {field} = {value} is outside [0, 100]")]
    OutOfRange {
        /// Region name.
        region: String,
        /// Field name.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// On-disk layout of a multi-region catalog file.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    regions: Vec<Region>,
}

/// The immutable, ordered set of monitored regions.
///
/// Regions keep the order they were authored in; that order is also the
/// order of the risk overlays and navigation buttons.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    regions: Vec<Region>,
    /// Boundary polygons in `(x = lon, y = lat)` order, parallel to `regions`.
    polygons: Vec<Polygon<f64>>,
    by_name: BTreeMap<String, usize>,
}

impl RegionCatalog {
    /// Validates `regions` and builds a catalog from them.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found. Validation is all or
    /// nothing.
    pub fn new(regions: Vec<Region>) -> Result<Self, CatalogError> {
        if regions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_name = BTreeMap::new();
        let mut polygons = Vec::with_capacity(regions.len());

        for (index, region) in regions.iter().enumerate() {
            let polygon = validate_region(index, region)?;
            if by_name.insert(region.name.clone(), index).is_some() {
                return Err(CatalogError::DuplicateName {
                    name: region.name.clone(),
                });
            }
            polygons.push(polygon);
        }

        log::info!("Loaded {} regions into catalog", regions.len());

        Ok(Self {
            regions,
            polygons,
            by_name,
        })
    }

    /// Loads the regions embedded at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any embedded region fails to parse or
    /// validate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(registry::builtin_regions()?)
    }

    /// Parses a catalog document (`[[regions]]` tables) and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed TOML, or any
    /// validation error.
    pub fn from_toml_str(source_name: &str, toml_str: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            toml::de::from_str(toml_str).map_err(|e| CatalogError::Parse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        Self::new(document.regions)
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Always `false`: an empty catalog fails validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions in catalog order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Iterates regions in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Region names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(Region::name)
    }

    /// Looks up a region by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Region> {
        self.by_name.get(name).map(|&idx| &self.regions[idx])
    }

    /// Returns the boundary polygon for a region.
    #[must_use]
    pub fn polygon(&self, name: &str) -> Option<&Polygon<f64>> {
        self.by_name.get(name).map(|&idx| &self.polygons[idx])
    }

    /// Finds the first region whose boundary contains `point`.
    #[must_use]
    pub fn region_containing(&self, point: LatLng) -> Option<&Region> {
        let point = Point::new(point.lon, point.lat);
        self.polygons
            .iter()
            .position(|polygon| polygon.contains(&point))
            .map(|idx| &self.regions[idx])
    }

    /// Renders every region boundary as a `GeoJSON` feature collection
    /// carrying baseline properties.
    #[must_use]
    pub fn to_geojson(&self) -> geojson::FeatureCollection {
        let features = self
            .regions
            .iter()
            .zip(&self.polygons)
            .map(|(region, polygon)| {
                geometry::region_feature(region, polygon, geometry::baseline_properties(region))
            })
            .collect();

        geojson::FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

impl<'a> IntoIterator for &'a RegionCatalog {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

fn validate_region(index: usize, region: &Region) -> Result<Polygon<f64>, CatalogError> {
    if region.name.trim().is_empty() {
        return Err(CatalogError::EmptyName { index });
    }

    if region.boundary.len() < Region::MIN_BOUNDARY_POINTS {
        return Err(CatalogError::TooFewPoints {
            region: region.name.clone(),
            points: region.boundary.len(),
            min: Region::MIN_BOUNDARY_POINTS,
        });
    }

    if let Some(coordinate) = region.boundary.iter().find(|c| !c.is_valid()) {
        return Err(CatalogError::InvalidCoordinate {
            region: region.name.clone(),
            field: "boundary",
            coordinate: *coordinate,
        });
    }

    if !region.centroid.is_valid() {
        return Err(CatalogError::InvalidCoordinate {
            region: region.name.clone(),
            field: "centroid",
            coordinate: region.centroid,
        });
    }

    if !region.is_closed() {
        return Err(CatalogError::OpenBoundary {
            region: region.name.clone(),
        });
    }

    if !region.baseline_risk.is_finite() || !(0.0..=100.0).contains(&region.baseline_risk) {
        return Err(CatalogError::OutOfRange {
            region: region.name.clone(),
            field: "baselineRisk",
            value: region.baseline_risk,
        });
    }

    if let Some((field, value)) = region.baseline_factors.first_out_of_range() {
        return Err(CatalogError::OutOfRange {
            region: region.name.clone(),
            field,
            value: f64::from(value),
        });
    }

    let polygon = geometry::to_polygon(region);
    if geometry::is_degenerate(&polygon) {
        return Err(CatalogError::DegenerateBoundary {
            region: region.name.clone(),
        });
    }

    Ok(polygon)
}
