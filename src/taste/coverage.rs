//! Coverage analytics over the deliverable style library.
//!
//! Purely derived from the entry collection, recomputed on every request,
//! never stored.

use crate::reference_store::{DeliverableStyleReferenceEntry, DeliverableType, StyleAxis};
use serde::Serialize;
use std::collections::BTreeMap;

/// A cell with fewer active entries than this is a curation gap.
pub const GAP_THRESHOLD: usize = 2;

/// Coverage statistics over the (deliverable type × style axis) cross-product.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    /// Active entry count per cell, keyed `"<deliverable_type>:<style_axis>"`.
    /// Every cell of the cross-product is present, zeroes included.
    pub matrix: BTreeMap<String, usize>,
    /// Number of cells with fewer than GAP_THRESHOLD active entries.
    pub gaps: usize,
    /// Percentage of adequately covered cells, rounded to an integer.
    pub coverage_score: u32,
    /// Active entries with no color-sample data.
    pub missing_colors: usize,
    /// Per deliverable type, active entries with no color-sample data.
    /// Types with a zero count are omitted.
    pub missing_colors_by_type: BTreeMap<String, usize>,
}

pub fn cell_key(deliverable_type: DeliverableType, style_axis: StyleAxis) -> String {
    format!(
        "{}:{}",
        deliverable_type.to_db_str(),
        style_axis.to_db_str()
    )
}

/// Compute the coverage report for the given collection. Inactive entries
/// never count toward any statistic.
pub fn analyze(entries: &[DeliverableStyleReferenceEntry]) -> CoverageReport {
    let mut matrix: BTreeMap<String, usize> = BTreeMap::new();
    for deliverable_type in DeliverableType::ALL {
        for style_axis in StyleAxis::ALL {
            matrix.insert(cell_key(deliverable_type, style_axis), 0);
        }
    }

    let mut missing_colors = 0;
    let mut missing_colors_by_type: BTreeMap<String, usize> = BTreeMap::new();

    for entry in entries.iter().filter(|entry| entry.is_active) {
        if let Some(count) = matrix.get_mut(&cell_key(entry.deliverable_type, entry.style_axis)) {
            *count += 1;
        }
        if entry.color_samples.is_empty() {
            missing_colors += 1;
            *missing_colors_by_type
                .entry(entry.deliverable_type.to_db_str().to_string())
                .or_insert(0) += 1;
        }
    }

    let total_cells = matrix.len();
    let gaps = matrix.values().filter(|count| **count < GAP_THRESHOLD).count();
    let coverage_score =
        (((total_cells - gaps) as f64 / total_cells as f64) * 100.0).round() as u32;

    CoverageReport {
        matrix,
        gaps,
        coverage_score,
        missing_colors,
        missing_colors_by_type,
    }
}
