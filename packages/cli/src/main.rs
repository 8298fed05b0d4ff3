#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Headless shell for the landslide risk dashboard.
//!
//! Drives the same [`Dashboard`] operations a map UI would (set inputs,
//! calculate, focus a region) and prints the resulting projections as
//! text or JSON.

mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use landguard_dashboard::{Dashboard, DashboardConfig};
use landguard_risk_models::{AssessmentUpdate, SoilType};
use landguard_view::RecordingViewport;

#[derive(Parser)]
#[command(name = "landguard", about = "Landslide risk map engine")]
struct Cli {
    /// Dashboard config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the overall risk for a set of conditions
    Assess {
        /// Expected rainfall in mm (0-100)
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
        rainfall: u8,
        /// Terrain slope in degrees (0-100)
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
        slope: u8,
        /// Soil type: clay, sand, or rock
        #[arg(long, default_value = "clay")]
        soil: SoilType,
    },
    /// List the monitored regions with their baseline risk
    Regions,
    /// Run one or more recalculations and print the region overlays
    Simulate {
        /// Seed for the snapshot model (overrides config and `LANDGUARD_SEED`)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of recalculations to run
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
    /// Focus the map on a region and print the resulting view
    Focus {
        /// Region name (e.g., "Rocinha")
        name: String,
    },
    /// Print the region overlays as a `GeoJSON` feature collection
    Geojson {
        /// Recalculate once with this seed before exporting
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    }
    .with_env_overrides();

    if let Commands::Simulate { seed: Some(seed), .. } | Commands::Geojson { seed: Some(seed) } =
        &cli.command
    {
        config.seed = Some(*seed);
    }

    let mut dashboard = Dashboard::from_config(&config, RecordingViewport::default())?;
    log::debug!("Dashboard ready with {} regions", dashboard.catalog().len());

    let output = match cli.command {
        Commands::Assess {
            rainfall,
            slope,
            soil,
        } => {
            dashboard.set_assessment_inputs(AssessmentUpdate {
                rainfall: Some(rainfall),
                slope: Some(slope),
                soil_type: Some(soil),
            });
            let outcome = dashboard.calculate_risk()?;
            if cli.json {
                serde_json::to_string_pretty(&outcome)?
            } else {
                render::assessment(&dashboard)
            }
        }
        Commands::Regions => {
            if cli.json {
                serde_json::to_string_pretty(dashboard.catalog().regions())?
            } else {
                render::regions(dashboard.catalog())
            }
        }
        Commands::Simulate { rounds, .. } => {
            let mut sections = Vec::new();
            for round in 1..=rounds {
                dashboard.calculate_risk()?;
                if !cli.json {
                    sections.push(format!(
                        "Round {round}\n{}",
                        render::overlays(&dashboard.overlays())
                    ));
                }
            }
            if cli.json {
                serde_json::to_string_pretty(&dashboard.snapshot())?
            } else {
                sections.join("\n")
            }
        }
        Commands::Focus { name } => {
            let view = dashboard.focus_region(&name)?;
            if cli.json {
                serde_json::to_string_pretty(&view)?
            } else {
                render::view(&name, view)
            }
        }
        Commands::Geojson { seed } => {
            if seed.is_some() {
                dashboard.calculate_risk()?;
            }
            serde_json::to_string_pretty(&dashboard.overlays_geojson())?
        }
    };

    println!("{output}");

    Ok(())
}
