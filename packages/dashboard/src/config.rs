//! Dashboard configuration.
//!
//! Loaded from an optional TOML file, then overridden by environment
//! variables. Every field has a default, so an empty file (or no file)
//! yields the stock Rio de Janeiro dashboard.

use std::path::{Path, PathBuf};

use landguard_region_models::LatLng;
use landguard_view::{FOCUS_ZOOM, OVERVIEW_CENTER, OVERVIEW_ZOOM, ViewState};
use serde::{Deserialize, Serialize};

use crate::DashboardError;

/// Environment variable overriding [`DashboardConfig::seed`].
pub const SEED_ENV: &str = "LANDGUARD_SEED";

/// Overall risk shown before the first calculation.
const DEFAULT_INITIAL_RISK: u8 = 65;

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Center of the overview map.
    pub overview_center: LatLng,
    /// Zoom of the overview map.
    pub overview_zoom: u8,
    /// Zoom used when focusing a region.
    pub focus_zoom: u8,
    /// Overall risk displayed before the first calculation.
    pub initial_risk: u8,
    /// Seed for the random snapshot model. Entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Region catalog file. The built-in catalog is used when absent.
    pub catalog_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            overview_center: OVERVIEW_CENTER,
            overview_zoom: OVERVIEW_ZOOM,
            focus_zoom: FOCUS_ZOOM,
            initial_risk: DEFAULT_INITIAL_RISK,
            seed: None,
            catalog_path: None,
        }
    }
}

impl DashboardConfig {
    /// Parses a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if the document is malformed.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, DashboardError> {
        toml::de::from_str(toml_str).map_err(|e| DashboardError::Config {
            message: e.to_string(),
        })
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Io`] if the file cannot be read, or
    /// [`DashboardError::Config`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        log::info!("Loading dashboard config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Applies environment variable overrides.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        let seed = std::env::var(SEED_ENV).ok();
        self.with_seed_override(seed.as_deref())
    }

    /// Overrides [`Self::seed`] from a raw `LANDGUARD_SEED` value.
    ///
    /// Values that are not a `u64` are logged and ignored, leaving the
    /// configured seed in place.
    #[must_use]
    pub fn with_seed_override(mut self, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return self;
        };

        match raw.trim().parse::<u64>() {
            Ok(seed) => {
                log::debug!("Using {SEED_ENV}={seed}");
                self.seed = Some(seed);
            }
            Err(e) => {
                log::warn!("Ignoring {SEED_ENV}={raw:?}: {e}");
            }
        }
        self
    }

    /// The overview view state described by this config.
    #[must_use]
    pub const fn overview(&self) -> ViewState {
        ViewState::new(self.overview_center, self.overview_zoom)
    }

    /// Validates value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] describing the first bad value.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if !self.overview_center.is_valid() {
            return Err(DashboardError::Config {
                message: format!("overviewCenter {} is not a valid coordinate", self.overview_center),
            });
        }
        if self.initial_risk > 100 {
            return Err(DashboardError::Config {
                message: format!("initialRisk {} is outside [0, 100]", self.initial_risk),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.overview(), ViewState::overview());
        assert_eq!(config.focus_zoom, 15);
        assert_eq!(config.initial_risk, 65);
    }

    #[test]
    fn parses_overrides() {
        let config = DashboardConfig::from_toml_str(
            r#"
overviewCenter = [-23.0, -43.5]
overviewZoom = 10
focusZoom = 16
seed = 42
catalogPath = "regions.toml"
"#,
        )
        .unwrap();
        assert_eq!(config.overview_center, LatLng::new(-23.0, -43.5));
        assert_eq!(config.overview_zoom, 10);
        assert_eq!(config.focus_zoom, 16);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.catalog_path, Some(PathBuf::from("regions.toml")));
    }

    #[test]
    fn rejects_malformed_document() {
        assert!(matches!(
            DashboardConfig::from_toml_str("focusZoom = \"close\""),
            Err(DashboardError::Config { .. })
        ));
    }

    #[test]
    fn seed_override_parses_numbers() {
        let config = DashboardConfig::default().with_seed_override(Some(" 1234 "));
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn seed_override_ignores_non_numeric_values() {
        let config = DashboardConfig {
            seed: Some(7),
            ..DashboardConfig::default()
        };
        assert_eq!(config.clone().with_seed_override(Some("lots")).seed, Some(7));
        assert_eq!(config.clone().with_seed_override(Some("-3")).seed, Some(7));
        assert_eq!(config.with_seed_override(None).seed, Some(7));
    }

    #[test]
    fn reads_seed_from_environment() {
        // Only this test touches LANDGUARD_SEED.
        unsafe { std::env::set_var(SEED_ENV, "31337") };
        let config = DashboardConfig::default().with_env_overrides();
        unsafe { std::env::remove_var(SEED_ENV) };

        assert_eq!(config.seed, Some(31337));
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let path = std::env::temp_dir().join(format!(
            "landguard-missing-{}/dashboard.toml",
            std::process::id()
        ));
        assert!(matches!(
            DashboardConfig::load(&path),
            Err(DashboardError::Io(_))
        ));
    }

    #[test]
    fn load_parses_file() {
        let dir = std::env::temp_dir().join(format!("landguard-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("dashboard.toml");
        std::fs::write(&path, "focusZoom = 14\nseed = 9\n").unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(config.focus_zoom, 14);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = DashboardConfig {
            initial_risk: 101,
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());

        let config = DashboardConfig {
            overview_center: LatLng::new(0.0, 200.0),
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());

        assert!(DashboardConfig::default().validate().is_ok());
    }
}
