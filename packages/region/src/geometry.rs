//! Conversions between catalog regions and `geo` / `GeoJSON` geometry.
//!
//! Catalog coordinates are `(lat, lon)`; `geo` and `GeoJSON` use
//! `(x = lon, y = lat)`. Everything crossing that boundary goes through
//! this module.

use geo::{Area, Coord, LineString, Polygon};
use geojson::{Feature, Geometry, JsonObject, feature::Id};
use landguard_region_models::Region;
use serde_json::json;

/// Builds the boundary polygon for a region.
#[must_use]
pub fn to_polygon(region: &Region) -> Polygon<f64> {
    let exterior: Vec<Coord<f64>> = region
        .boundary
        .iter()
        .map(|point| Coord {
            x: point.lon,
            y: point.lat,
        })
        .collect();

    Polygon::new(LineString::new(exterior), Vec::new())
}

/// Whether a polygon encloses no area.
#[must_use]
pub fn is_degenerate(polygon: &Polygon<f64>) -> bool {
    polygon.unsigned_area() <= f64::EPSILON * f64::EPSILON
}

/// Properties describing a region's authored baseline.
#[must_use]
pub fn baseline_properties(region: &Region) -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), json!(region.name));
    properties.insert("risk".to_string(), json!(region.baseline_risk));
    properties.insert(
        "rainfall".to_string(),
        json!(region.baseline_factors.rainfall),
    );
    properties.insert("slope".to_string(), json!(region.baseline_factors.slope));
    properties.insert(
        "soilStability".to_string(),
        json!(region.baseline_factors.soil_stability),
    );
    properties.insert(
        "centroid".to_string(),
        json!([region.centroid.lat, region.centroid.lon]),
    );
    properties
}

/// Wraps a region boundary as a `GeoJSON` feature keyed by region name.
#[must_use]
pub fn region_feature(region: &Region, polygon: &Polygon<f64>, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::from(polygon))),
        id: Some(Id::String(region.name.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landguard_region_models::{LatLng, RiskFactors};

    fn region() -> Region {
        Region {
            name: "Square".to_string(),
            boundary: vec![
                LatLng::new(-22.0, -43.0),
                LatLng::new(-22.0, -42.0),
                LatLng::new(-21.0, -42.0),
                LatLng::new(-21.0, -43.0),
                LatLng::new(-22.0, -43.0),
            ],
            centroid: LatLng::new(-21.5, -42.5),
            baseline_risk: 40.0,
            baseline_factors: RiskFactors::new(10, 20, 30),
        }
    }

    #[test]
    fn swaps_axes_into_geo_order() {
        let polygon = to_polygon(&region());
        let first = polygon.exterior().0[0];
        assert!((first.x - -43.0).abs() < f64::EPSILON);
        assert!((first.y - -22.0).abs() < f64::EPSILON);
        assert!((polygon.unsigned_area() - 1.0).abs() < 1e-9);
        assert!(!is_degenerate(&polygon));
    }

    #[test]
    fn feature_carries_name_and_properties() {
        let region = region();
        let feature = region_feature(&region, &to_polygon(&region), baseline_properties(&region));
        assert_eq!(feature.id, Some(Id::String("Square".to_string())));
        let props = feature.properties.unwrap();
        assert_eq!(props["soilStability"], 30);
        assert!(matches!(
            feature.geometry.map(|g| g.value),
            Some(geojson::Value::Polygon(_))
        ));
    }
}
