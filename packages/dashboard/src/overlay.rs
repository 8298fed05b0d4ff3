//! Read-only projections handed to the rendering layer.

use geo::Polygon;
use landguard_region::geometry;
use landguard_region_models::{LatLng, Region, RiskFactors};
use landguard_risk::risk_to_color;
use landguard_risk_models::{AssessmentInputs, RegionRiskSnapshot, RiskColor, RiskLevel};
use landguard_view::{ViewMode, ViewState};
use serde::Serialize;
use serde_json::json;

/// One region overlay: the catalog geometry plus its current risk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionOverlay {
    /// Region name.
    pub name: String,
    /// Closed boundary ring.
    pub boundary: Vec<LatLng>,
    /// Navigation target.
    pub centroid: LatLng,
    /// Current risk, fractional.
    pub risk: f64,
    /// Current risk rounded for display.
    pub display_risk: u8,
    /// Current environmental factors.
    pub factors: RiskFactors,
    /// Fill/stroke color.
    pub color: RiskColor,
    /// Tooltip text.
    pub tooltip: String,
}

impl RegionOverlay {
    /// Combines a region with its snapshot.
    #[must_use]
    pub fn new(region: &Region, snapshot: &RegionRiskSnapshot) -> Self {
        Self {
            name: region.name.clone(),
            boundary: region.boundary.clone(),
            centroid: region.centroid,
            risk: snapshot.current_risk,
            display_risk: snapshot.display_risk(),
            factors: snapshot.current_factors,
            color: risk_to_color(snapshot.current_risk),
            tooltip: snapshot.tooltip(),
        }
    }

    /// `GeoJSON` properties for this overlay's feature.
    #[must_use]
    pub fn properties(&self) -> geojson::JsonObject {
        let mut properties = geojson::JsonObject::new();
        properties.insert("name".to_string(), json!(self.name));
        properties.insert("risk".to_string(), json!(self.risk));
        properties.insert("displayRisk".to_string(), json!(self.display_risk));
        properties.insert("color".to_string(), json!(self.color.to_css()));
        properties.insert("rainfall".to_string(), json!(self.factors.rainfall));
        properties.insert("slope".to_string(), json!(self.factors.slope));
        properties.insert(
            "soilStability".to_string(),
            json!(self.factors.soil_stability),
        );
        properties.insert("tooltip".to_string(), json!(self.tooltip));
        properties
    }
}

/// Builds a `GeoJSON` feature for an overlay from the region's catalog
/// polygon.
#[must_use]
pub fn overlay_feature(
    region: &Region,
    polygon: &Polygon<f64>,
    overlay: &RegionOverlay,
) -> geojson::Feature {
    geometry::region_feature(region, polygon, overlay.properties())
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Current assessment inputs.
    pub inputs: AssessmentInputs,
    /// Overall risk percentage.
    pub aggregate_risk: u8,
    /// Classification of the overall risk.
    pub risk_level: RiskLevel,
    /// Advice matching the classification.
    pub advisory: String,
    /// Region overlays in catalog order.
    pub overlays: Vec<RegionOverlay>,
    /// Current map view.
    pub view: ViewState,
    /// Current view mode.
    pub mode: ViewMode,
}
