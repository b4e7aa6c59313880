//! ReferenceStore trait definition.
//!
//! Abstracts the reference library storage so the matching engine and the
//! HTTP layer can be exercised against in-memory fakes in tests.

use super::models::{BrandReferenceEntry, DeliverableStyleReferenceEntry};
use crate::taste::{EnergyBucket, ToneBucket};
use anyhow::Result;
use serde::Serialize;

/// Bucket filter for brand reference queries. `None` on an axis means the
/// axis is unconstrained; the matcher widens the filter step by step when a
/// narrower one comes back empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrandReferenceFilter {
    pub tone: Option<ToneBucket>,
    pub energy: Option<EnergyBucket>,
}

impl BrandReferenceFilter {
    pub fn exact(tone: ToneBucket, energy: EnergyBucket) -> Self {
        Self {
            tone: Some(tone),
            energy: Some(energy),
        }
    }

    pub fn tone_only(tone: ToneBucket) -> Self {
        Self {
            tone: Some(tone),
            energy: None,
        }
    }

    pub fn energy_only(energy: EnergyBucket) -> Self {
        Self {
            tone: None,
            energy: Some(energy),
        }
    }

    pub fn any() -> Self {
        Self::default()
    }
}

/// A stored row that could not be mapped into the closed enumerations.
/// Upstream data-integrity defect: excluded from derived results, reported,
/// never silently recounted into a wrong cell.
#[derive(Clone, Debug, Serialize, thiserror::Error)]
#[error("reference entry {entry_id} has unrecognized {column}: {value:?}")]
#[serde(rename_all = "camelCase")]
pub struct ReferenceAnomaly {
    pub entry_id: String,
    pub column: String,
    pub value: String,
}

/// Result of enumerating the deliverable style library: well-formed entries
/// plus any anomalous rows encountered.
#[derive(Debug, Default)]
pub struct StyleReferenceScan {
    pub entries: Vec<DeliverableStyleReferenceEntry>,
    pub anomalies: Vec<ReferenceAnomaly>,
}

/// Trait for reference library storage backends.
pub trait ReferenceStore: Send + Sync {
    // =========================================================================
    // Brand reference library - matching path
    // =========================================================================

    /// Active entries matching the bucket filter, ordered by display_order
    /// ascending then usage_count descending.
    fn find_active_brand_references(
        &self,
        filter: &BrandReferenceFilter,
    ) -> Result<Vec<BrandReferenceEntry>>;

    /// Increment usage_count on each of the given entries. Advisory
    /// telemetry; callers must tolerate failure.
    fn record_brand_reference_usage(&self, ids: &[String]) -> Result<()>;

    // =========================================================================
    // Brand reference library - curation path
    // =========================================================================

    /// All entries, active and inactive.
    fn list_brand_references(&self) -> Result<Vec<BrandReferenceEntry>>;

    fn get_brand_reference(&self, id: &str) -> Result<Option<BrandReferenceEntry>>;

    fn insert_brand_reference(&self, entry: &BrandReferenceEntry) -> Result<()>;

    /// Update an existing entry. Returns false if no entry has the id.
    fn update_brand_reference(&self, entry: &BrandReferenceEntry) -> Result<bool>;

    /// Delete an entry. Returns false if no entry has the id.
    fn delete_brand_reference(&self, id: &str) -> Result<bool>;

    // =========================================================================
    // Deliverable style library
    // =========================================================================

    /// The whole collection, active and inactive, plus anomalies for rows
    /// whose type/axis keys do not parse.
    fn scan_style_references(&self) -> Result<StyleReferenceScan>;

    fn get_style_reference(&self, id: &str) -> Result<Option<DeliverableStyleReferenceEntry>>;

    fn insert_style_reference(&self, entry: &DeliverableStyleReferenceEntry) -> Result<()>;

    /// Update an existing entry. Returns false if no entry has the id.
    fn update_style_reference(&self, entry: &DeliverableStyleReferenceEntry) -> Result<bool>;

    /// Delete an entry. Returns false if no entry has the id.
    fn delete_style_reference(&self, id: &str) -> Result<bool>;

    // =========================================================================
    // Counts (for metrics and the stats endpoint)
    // =========================================================================

    fn brand_reference_count(&self) -> usize;

    fn style_reference_count(&self) -> usize;
}
