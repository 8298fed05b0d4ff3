#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Monitored region and coordinate types.
//!
//! A [`Region`] is a hand-authored geographic area (an informal settlement)
//! with a fixed boundary polygon, a navigation centroid, and the baseline
//! risk attributes shown before any recalculation. Regions are immutable
//! once loaded; the mutable per-region risk figures live elsewhere and
//! refer back to a region by its [`Region::name`].

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in `(latitude, longitude)` order.
///
/// Serialized as a two-element array `[lat, lon]`, which is how region
/// boundaries are written in the catalog TOML files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    /// Latitude in degrees, `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub lon: f64,
}

impl LatLng {
    /// Creates a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether both components are finite and inside the WGS84 ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(value: LatLng) -> Self {
        [value.lat, value.lon]
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// Environmental factors contributing to a region's landslide risk.
///
/// Every field is on a 0-100 scale. Slope is conceptually in degrees
/// (capped at 90) but stored on the same 0-100 scale as the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    /// Expected rainfall, in mm.
    pub rainfall: u8,
    /// Terrain slope, in degrees.
    pub slope: u8,
    /// Soil stability percentage.
    pub soil_stability: u8,
}

impl RiskFactors {
    /// Upper bound shared by every factor.
    pub const MAX: u8 = 100;

    /// Creates a set of factors.
    #[must_use]
    pub const fn new(rainfall: u8, slope: u8, soil_stability: u8) -> Self {
        Self {
            rainfall,
            slope,
            soil_stability,
        }
    }

    /// Returns the name and value of the first factor above [`Self::MAX`].
    #[must_use]
    pub fn first_out_of_range(&self) -> Option<(&'static str, u8)> {
        [
            ("rainfall", self.rainfall),
            ("slope", self.slope),
            ("soilStability", self.soil_stability),
        ]
        .into_iter()
        .find(|(_, value)| *value > Self::MAX)
    }
}

/// A monitored geographic region, as authored in the region catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Unique human-readable name (e.g. "Rocinha").
    pub name: String,
    /// Closed boundary ring; the first and last points coincide.
    pub boundary: Vec<LatLng>,
    /// Navigation target used when the map focuses this region.
    pub centroid: LatLng,
    /// Risk score (0-100) shown before the first recalculation.
    pub baseline_risk: f64,
    /// Environmental factors shown before the first recalculation.
    pub baseline_factors: RiskFactors,
}

impl Region {
    /// Minimum number of points in a closed boundary ring.
    pub const MIN_BOUNDARY_POINTS: usize = 4;

    /// Returns the region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the boundary ring's first and last points coincide.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.boundary.first(), self.boundary.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROCINHA: &str = r#"
name = "Rocinha"
boundary = [
  [-22.9889, -43.2484], [-22.9851, -43.2445], [-22.9893, -43.2379],
  [-22.9935, -43.2418], [-22.9912, -43.2456], [-22.9889, -43.2484],
]
centroid = [-22.9889, -43.2431]
baselineRisk = 75

[baselineFactors]
rainfall = 80
slope = 65
soilStability = 40
"#;

    #[test]
    fn deserializes_region_from_toml() {
        let region: Region = toml::de::from_str(ROCINHA).unwrap();
        assert_eq!(region.name(), "Rocinha");
        assert_eq!(region.boundary.len(), 6);
        assert_eq!(region.centroid, LatLng::new(-22.9889, -43.2431));
        assert!((region.baseline_risk - 75.0).abs() < f64::EPSILON);
        assert_eq!(region.baseline_factors, RiskFactors::new(80, 65, 40));
        assert!(region.is_closed());
    }

    #[test]
    fn open_ring_is_not_closed() {
        let mut region: Region = toml::de::from_str(ROCINHA).unwrap();
        region.boundary.pop();
        assert!(!region.is_closed());

        region.boundary.clear();
        assert!(!region.is_closed());
    }

    #[test]
    fn detects_out_of_range_factor() {
        assert_eq!(RiskFactors::new(100, 0, 50).first_out_of_range(), None);
        assert_eq!(
            RiskFactors::new(10, 101, 50).first_out_of_range(),
            Some(("slope", 101))
        );
    }

    #[test]
    fn validates_coordinate_ranges() {
        assert!(LatLng::new(-22.9, -43.1).is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -181.0).is_valid());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    }
}
