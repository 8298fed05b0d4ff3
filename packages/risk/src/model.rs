//! Per-region risk snapshot models.
//!
//! A [`SnapshotModel`] turns one catalog [`Region`] into its current
//! [`RegionRiskSnapshot`]. The shipped [`RandomSnapshotModel`] is a
//! stochastic stand-in for a real predictive model; anything implementing
//! the trait can replace it without touching callers.

use landguard_region::RegionCatalog;
use landguard_region_models::{Region, RiskFactors};
use landguard_risk_models::RegionRiskSnapshot;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Upper bound (exclusive) of a drawn risk score.
const RISK_RANGE: f64 = 100.0;
/// Upper bound (exclusive) of drawn rainfall and soil stability.
const FACTOR_RANGE: f64 = 100.0;
/// Upper bound (exclusive) of a drawn slope, in degrees.
const SLOPE_RANGE: f64 = 90.0;

/// Produces the current risk snapshot for a region.
pub trait SnapshotModel {
    /// Computes a fresh snapshot for `region`.
    fn snapshot(&mut self, region: &Region) -> RegionRiskSnapshot;
}

/// Draws every snapshot figure uniformly at random.
///
/// Risk is drawn from `[0, 100)` and kept fractional; rainfall and soil
/// stability from `[0, 100)` and slope from `[0, 90)`, each rounded to
/// the nearest integer. Draws are independent between calls, so repeated
/// recalculations flicker.
#[derive(Debug, Clone)]
pub struct RandomSnapshotModel {
    rng: ChaCha8Rng,
}

impl RandomSnapshotModel {
    /// Creates a model seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a reproducible model from a `u64` seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn draw_factor(&mut self, upper: f64) -> u8 {
        self.rng.gen_range(0.0..upper).round() as u8
    }
}

impl Default for RandomSnapshotModel {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SnapshotModel for RandomSnapshotModel {
    fn snapshot(&mut self, region: &Region) -> RegionRiskSnapshot {
        let current_risk = self.rng.gen_range(0.0..RISK_RANGE);
        let current_factors = RiskFactors {
            rainfall: self.draw_factor(FACTOR_RANGE),
            slope: self.draw_factor(SLOPE_RANGE),
            soil_stability: self.draw_factor(FACTOR_RANGE),
        };

        RegionRiskSnapshot {
            region: region.name.clone(),
            current_risk,
            current_factors,
        }
    }
}

/// Deterministic model that reports each region's authored baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineSnapshotModel;

impl SnapshotModel for BaselineSnapshotModel {
    fn snapshot(&mut self, region: &Region) -> RegionRiskSnapshot {
        RegionRiskSnapshot::from_baseline(region)
    }
}

/// Produces one snapshot per catalog region, in catalog order.
///
/// Independent of the overall assessment inputs.
pub fn recompute_region_snapshots<M: SnapshotModel + ?Sized>(
    catalog: &RegionCatalog,
    model: &mut M,
) -> Vec<RegionRiskSnapshot> {
    let snapshots: Vec<RegionRiskSnapshot> =
        catalog.iter().map(|region| model.snapshot(region)).collect();

    log::debug!("Recomputed {} region snapshots", snapshots.len());

    snapshots
}
