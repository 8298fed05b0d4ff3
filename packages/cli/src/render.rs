//! Plain-text rendering of dashboard projections.

use landguard_dashboard::{Dashboard, RegionOverlay};
use landguard_region::RegionCatalog;
use landguard_risk::risk_to_color;
use landguard_view::{MapViewport, ViewState};

/// The overall risk figure and its advisory.
pub fn assessment<V: MapViewport>(dashboard: &Dashboard<V>) -> String {
    let inputs = dashboard.inputs();
    format!(
        "Rainfall: {} mm, Slope: {}°, Soil: {}\nOverall Risk Level: {}%\n{}",
        inputs.rainfall,
        inputs.slope,
        inputs.soil_type,
        dashboard.aggregate_risk(),
        dashboard.risk_level().advisory(),
    )
}

/// One line per catalog region.
pub fn regions(catalog: &RegionCatalog) -> String {
    catalog
        .iter()
        .map(|region| {
            format!(
                "{:<20} centroid {}  baseline {:>3}%  {}",
                region.name,
                region.centroid,
                region.baseline_risk.round(),
                risk_to_color(region.baseline_risk),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Overlay tooltips with their colors.
pub fn overlays(overlays: &[RegionOverlay]) -> String {
    overlays
        .iter()
        .map(|overlay| {
            std::iter::once(format!("[{}]", overlay.color))
                .chain(overlay.tooltip.lines().map(|line| format!("  {line}")))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The map view after focusing a region.
pub fn view(name: &str, view: ViewState) -> String {
    format!("{name}: center {} zoom {}", view.center, view.zoom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use landguard_dashboard::DashboardConfig;
    use landguard_risk_models::{AssessmentUpdate, SoilType};
    use landguard_view::RecordingViewport;

    fn dashboard() -> Dashboard<RecordingViewport> {
        let config = DashboardConfig {
            seed: Some(1),
            ..DashboardConfig::default()
        };
        Dashboard::from_config(&config, RecordingViewport::default()).unwrap()
    }

    #[test]
    fn renders_assessment() {
        let mut dashboard = dashboard();
        dashboard.set_assessment_inputs(AssessmentUpdate {
            rainfall: Some(100),
            slope: Some(100),
            soil_type: Some(SoilType::Clay),
        });
        dashboard.calculate_risk().unwrap();

        let text = assessment(&dashboard);
        assert!(text.contains("Overall Risk Level: 96%"));
        assert!(text.contains("Soil: clay"));
        assert!(text.ends_with("High risk. Consider immediate evacuation if conditions worsen."));
    }

    #[test]
    fn renders_one_line_per_region() {
        let dashboard = dashboard();
        let text = regions(dashboard.catalog());
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().next().unwrap().starts_with("Rocinha"));
        assert!(text.contains("rgb(63, 63, 63)"));
    }

    #[test]
    fn renders_baseline_tooltips() {
        let dashboard = dashboard();
        let text = overlays(&dashboard.overlays());
        assert!(text.starts_with("[rgb(63, 63, 63)]\n  Rocinha\n  Risk: 75%"));
        assert!(text.contains("  Soil Stability: 80%"));
    }

    #[test]
    fn overlays_render_without_trailing_newline() {
        let dashboard = dashboard();
        let text = overlays(&dashboard.overlays());
        assert!(!text.ends_with('\n'));
        assert_eq!(text.matches("[rgb(").count(), 5);
        assert_eq!(text.lines().count(), 5 * 6);
        assert_eq!(overlays(&[]), "");
    }

    #[test]
    fn renders_focused_view() {
        let mut dashboard = dashboard();
        let state = dashboard.focus_region("Rocinha").unwrap();
        assert_eq!(
            view("Rocinha", state),
            "Rocinha: center (-22.9889, -43.2431) zoom 15"
        );
    }
}
