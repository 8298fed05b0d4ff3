//! The current batch of per-region risk snapshots.
//!
//! The store holds exactly one snapshot per catalog region, in catalog
//! order. Snapshots are never edited individually: a recalculation
//! replaces the whole batch in a single assignment, so readers only ever
//! see all-old or all-new values.

use std::collections::BTreeMap;

use landguard_region::RegionCatalog;
use landguard_region_models::Region;
use landguard_risk_models::RegionRiskSnapshot;
use thiserror::Error;

/// Errors raised when replacing the snapshot batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The new batch does not line up with the regions in the store.
    #[error("Snapshot batch mismatch at position {position}: expected {expected:?}, found {found:?}")]
    BatchMismatch {
        /// First position that differs.
        position: usize,
        /// Region name expected at that position, if any.
        expected: Option<String>,
        /// Region name found at that position, if any.
        found: Option<String>,
    },
}

/// Mutable collection of region risk snapshots.
#[derive(Debug, Clone)]
pub struct RegionRiskStore {
    snapshots: Vec<RegionRiskSnapshot>,
    /// region name -> position in `snapshots`; fixed for the store's life.
    index: BTreeMap<String, usize>,
    generation: u64,
}

impl RegionRiskStore {
    /// Seeds the store from each region's authored baseline.
    #[must_use]
    pub fn from_catalog(catalog: &RegionCatalog) -> Self {
        let snapshots: Vec<RegionRiskSnapshot> = catalog
            .iter()
            .map(RegionRiskSnapshot::from_baseline)
            .collect();
        let index = snapshots
            .iter()
            .enumerate()
            .map(|(idx, snapshot)| (snapshot.region.clone(), idx))
            .collect();

        Self {
            snapshots,
            index,
            generation: 0,
        }
    }

    /// Replaces every snapshot at once.
    ///
    /// The batch must name the same regions in the same order as the
    /// current contents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BatchMismatch`] if the batch does not line up;
    /// the store is left untouched.
    pub fn replace_all(&mut self, batch: Vec<RegionRiskSnapshot>) -> Result<(), StoreError> {
        let len = self.snapshots.len().max(batch.len());
        for position in 0..len {
            let expected = self.snapshots.get(position).map(|s| s.region.as_str());
            let found = batch.get(position).map(|s| s.region.as_str());
            if expected != found {
                return Err(StoreError::BatchMismatch {
                    position,
                    expected: expected.map(str::to_string),
                    found: found.map(str::to_string),
                });
            }
        }

        self.snapshots = batch;
        self.generation += 1;

        log::debug!(
            "Replaced {} region snapshots (generation {})",
            self.snapshots.len(),
            self.generation
        );

        Ok(())
    }

    /// Looks up the snapshot for a region name.
    #[must_use]
    pub fn get(&self, region: &str) -> Option<&RegionRiskSnapshot> {
        self.index.get(region).map(|&idx| &self.snapshots[idx])
    }

    /// Snapshots in catalog order.
    #[must_use]
    pub fn snapshots(&self) -> &[RegionRiskSnapshot] {
        &self.snapshots
    }

    /// Iterates snapshots in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, RegionRiskSnapshot> {
        self.snapshots.iter()
    }

    /// Number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the store holds no snapshots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of batches applied since the store was seeded.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Pairs each snapshot with its catalog region, in catalog order.
    pub fn with_regions<'a>(
        &'a self,
        catalog: &'a RegionCatalog,
    ) -> impl Iterator<Item = (&'a Region, &'a RegionRiskSnapshot)> + 'a {
        self.snapshots
            .iter()
            .filter_map(|snapshot| catalog.get(&snapshot.region).map(|region| (region, snapshot)))
    }
}

impl<'a> IntoIterator for &'a RegionRiskStore {
    type Item = &'a RegionRiskSnapshot;
    type IntoIter = std::slice::Iter<'a, RegionRiskSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
