#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Landslide risk assessment types.
//!
//! Covers the user-editable [`AssessmentInputs`], the [`RiskLevel`]
//! classification of the overall percentage, the gray-scale [`RiskColor`]
//! used to shade region overlays, and the per-region
//! [`RegionRiskSnapshot`] that is recomputed on every calculation.

use landguard_region_models::{Region, RiskFactors};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Soil composition selectable in the assessment tool.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SoilType {
    /// Least permeable, most landslide-prone.
    #[default]
    Clay,
    /// Intermediate.
    Sand,
    /// Most stable.
    Rock,
}

impl SoilType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Clay, Self::Sand, Self::Rock]
    }
}

/// The environmental inputs of the assessment tool.
///
/// Independent of any region: these only feed the overall risk
/// percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInputs {
    /// Expected rainfall, 0-100 mm.
    pub rainfall: u8,
    /// Terrain slope, 0-100 degrees.
    pub slope: u8,
    /// Soil composition.
    pub soil_type: SoilType,
}

impl Default for AssessmentInputs {
    fn default() -> Self {
        Self {
            rainfall: 50,
            slope: 50,
            soil_type: SoilType::Clay,
        }
    }
}

/// A partial update to [`AssessmentInputs`]; `None` fields are left
/// untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentUpdate {
    /// New rainfall value.
    pub rainfall: Option<u8>,
    /// New slope value.
    pub slope: Option<u8>,
    /// New soil type.
    pub soil_type: Option<SoilType>,
}

impl AssessmentUpdate {
    /// Update that only changes rainfall.
    #[must_use]
    pub const fn rainfall(value: u8) -> Self {
        Self {
            rainfall: Some(value),
            slope: None,
            soil_type: None,
        }
    }

    /// Update that only changes slope.
    #[must_use]
    pub const fn slope(value: u8) -> Self {
        Self {
            rainfall: None,
            slope: Some(value),
            soil_type: None,
        }
    }

    /// Update that only changes soil type.
    #[must_use]
    pub const fn soil_type(value: SoilType) -> Self {
        Self {
            rainfall: None,
            slope: None,
            soil_type: Some(value),
        }
    }

    /// Applies the present fields to `inputs`.
    pub const fn apply_to(&self, inputs: &mut AssessmentInputs) {
        if let Some(rainfall) = self.rainfall {
            inputs.rainfall = rainfall;
        }
        if let Some(slope) = self.slope {
            inputs.slope = slope;
        }
        if let Some(soil_type) = self.soil_type {
            inputs.soil_type = soil_type;
        }
    }
}

/// Classification of the overall risk percentage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Below 30%.
    Low,
    /// 30% up to (not including) 70%.
    Moderate,
    /// 70% and above.
    High,
}

impl RiskLevel {
    /// Lower bound (inclusive) of [`Self::Moderate`].
    pub const MODERATE_THRESHOLD: u8 = 30;
    /// Lower bound (inclusive) of [`Self::High`].
    pub const HIGH_THRESHOLD: u8 = 70;

    /// Classifies an overall risk percentage.
    #[must_use]
    pub const fn from_percentage(percentage: u8) -> Self {
        if percentage < Self::MODERATE_THRESHOLD {
            Self::Low
        } else if percentage < Self::HIGH_THRESHOLD {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Advice shown next to the overall risk percentage.
    #[must_use]
    pub const fn advisory(self) -> &'static str {
        match self {
            Self::Low => "Low risk. Continue to monitor conditions.",
            Self::Moderate => "Moderate risk. Be prepared for potential evacuation.",
            Self::High => "High risk. Consider immediate evacuation if conditions worsen.",
        }
    }
}

/// An RGB color used to shade a region overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl RiskColor {
    /// Pure white, the color of zero risk.
    pub const WHITE: Self = Self::gray(255);
    /// Pure black, the color of maximum risk.
    pub const BLACK: Self = Self::gray(0);

    /// A gray with the same intensity on every channel.
    #[must_use]
    pub const fn gray(intensity: u8) -> Self {
        Self {
            r: intensity,
            g: intensity,
            b: intensity,
        }
    }

    /// CSS `rgb(...)` notation, as consumed by map overlay styles.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for RiskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// The current risk figures for one region.
///
/// Refers to its region by name only; the region's geometry stays in the
/// catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRiskSnapshot {
    /// Name of the catalog region this snapshot describes.
    pub region: String,
    /// Current risk score, 0-100. Kept fractional for color computation.
    pub current_risk: f64,
    /// Current environmental factors.
    pub current_factors: RiskFactors,
}

impl RegionRiskSnapshot {
    /// Seeds a snapshot from a region's authored baseline.
    #[must_use]
    pub fn from_baseline(region: &Region) -> Self {
        Self {
            region: region.name.clone(),
            current_risk: region.baseline_risk,
            current_factors: region.baseline_factors,
        }
    }

    /// The risk rounded for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn display_risk(&self) -> u8 {
        self.current_risk.clamp(0.0, 100.0).round() as u8
    }

    /// Multi-line tooltip text shown on the region overlay.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!(
            "{}\nRisk: {}%\nRainfall: {}mm\nSlope: {}°\nSoil Stability: {}%",
            self.region,
            self.display_risk(),
            self.current_factors.rainfall,
            self.current_factors.slope,
            self.current_factors.soil_stability,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landguard_region_models::LatLng;

    #[test]
    fn soil_type_parses_case_insensitively() {
        assert_eq!("clay".parse::<SoilType>().unwrap(), SoilType::Clay);
        assert_eq!("Rock".parse::<SoilType>().unwrap(), SoilType::Rock);
        assert!("gravel".parse::<SoilType>().is_err());
        assert_eq!(SoilType::Sand.to_string(), "sand");
    }

    #[test]
    fn default_inputs_match_initial_tool_state() {
        let inputs = AssessmentInputs::default();
        assert_eq!(inputs.rainfall, 50);
        assert_eq!(inputs.slope, 50);
        assert_eq!(inputs.soil_type, SoilType::Clay);
    }

    #[test]
    fn partial_update_only_touches_present_fields() {
        let mut inputs = AssessmentInputs::default();
        AssessmentUpdate::rainfall(90).apply_to(&mut inputs);
        assert_eq!(inputs.rainfall, 90);
        assert_eq!(inputs.slope, 50);

        AssessmentUpdate::soil_type(SoilType::Rock).apply_to(&mut inputs);
        assert_eq!(inputs.soil_type, SoilType::Rock);
        assert_eq!(inputs.rainfall, 90);

        AssessmentUpdate::default().apply_to(&mut inputs);
        assert_eq!(
            inputs,
            AssessmentInputs {
                rainfall: 90,
                slope: 50,
                soil_type: SoilType::Rock
            }
        );
    }

    #[test]
    fn classifies_risk_levels_at_thresholds() {
        assert_eq!(RiskLevel::from_percentage(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(30), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_percentage(69), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_percentage(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(100), RiskLevel::High);
        assert!(RiskLevel::High.advisory().starts_with("High risk"));
    }

    #[test]
    fn color_renders_as_css() {
        assert_eq!(RiskColor::gray(128).to_css(), "rgb(128, 128, 128)");
        assert_eq!(RiskColor::WHITE, RiskColor { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn snapshot_seeds_from_baseline_and_formats_tooltip() {
        let region = Region {
            name: "Vidigal".to_string(),
            boundary: Vec::new(),
            centroid: LatLng::new(-22.9962, -43.2464),
            baseline_risk: 59.6,
            baseline_factors: RiskFactors::new(70, 55, 50),
        };
        let snapshot = RegionRiskSnapshot::from_baseline(&region);
        assert_eq!(snapshot.region, "Vidigal");
        assert_eq!(snapshot.display_risk(), 60);
        assert_eq!(
            snapshot.tooltip(),
            "Vidigal\nRisk: 60%\nRainfall: 70mm\nSlope: 55°\nSoil Stability: 50%"
        );
    }

    #[test]
    fn snapshot_serializes_in_camel_case() {
        let snapshot = RegionRiskSnapshot {
            region: "Maré".to_string(),
            current_risk: 12.5,
            current_factors: RiskFactors::new(1, 2, 3),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["currentRisk"], 12.5);
        assert_eq!(json["currentFactors"]["soilStability"], 3);
    }
}
