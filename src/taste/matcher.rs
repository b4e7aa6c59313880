//! Reference matching: classified buckets to ranked exemplar suggestions.

use super::classifier::{classify, BrandSignalProfile, BucketPair};
use crate::reference_store::{BrandReferenceEntry, BrandReferenceFilter, ReferenceStore};
use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

/// How far the bucket filter had to be widened before candidates were found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelaxationLevel {
    Exact,
    ToneOnly,
    EnergyOnly,
    Any,
    /// Even the unfiltered pool was empty.
    Unmatched,
}

impl RelaxationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelaxationLevel::Exact => "exact",
            RelaxationLevel::ToneOnly => "tone",
            RelaxationLevel::EnergyOnly => "energy",
            RelaxationLevel::Any => "any",
            RelaxationLevel::Unmatched => "none",
        }
    }
}

/// Result of a matching request: ranked entries plus the classified buckets.
/// The buckets are returned even when no entry matched, so naming keeps
/// working over an empty suggestion list.
#[derive(Debug)]
pub struct MatchOutcome {
    pub references: Vec<BrandReferenceEntry>,
    pub buckets: BucketPair,
    pub relaxation: RelaxationLevel,
}

pub struct ReferenceMatcher {
    store: Arc<dyn ReferenceStore>,
}

impl ReferenceMatcher {
    pub fn new(store: Arc<dyn ReferenceStore>) -> Self {
        Self { store }
    }

    /// Match a brand profile against the reference library.
    ///
    /// The bucket filter is widened one step at a time (exact pair, tone
    /// only, energy only, unfiltered) and the first non-empty candidate set
    /// wins, so the caller gets suggestions whenever the library holds any
    /// active entry at all. Candidates are ranked by display_order
    /// ascending, usage_count descending, then truncated to `limit`.
    pub fn match_references(
        &self,
        profile: &BrandSignalProfile,
        limit: usize,
    ) -> Result<MatchOutcome> {
        let buckets = classify(profile);

        let plans = [
            (
                RelaxationLevel::Exact,
                BrandReferenceFilter::exact(buckets.tone, buckets.energy),
            ),
            (
                RelaxationLevel::ToneOnly,
                BrandReferenceFilter::tone_only(buckets.tone),
            ),
            (
                RelaxationLevel::EnergyOnly,
                BrandReferenceFilter::energy_only(buckets.energy),
            ),
            (RelaxationLevel::Any, BrandReferenceFilter::any()),
        ];

        let mut references = Vec::new();
        let mut relaxation = RelaxationLevel::Unmatched;
        for (level, filter) in plans {
            let candidates = self.store.find_active_brand_references(&filter)?;
            if !candidates.is_empty() {
                references = candidates;
                relaxation = level;
                break;
            }
        }

        rank(&mut references);
        references.truncate(limit);

        if !references.is_empty() {
            let ids: Vec<String> = references.iter().map(|entry| entry.id.clone()).collect();
            // Telemetry only: a failed increment must never fail the match.
            if let Err(err) = self.store.record_brand_reference_usage(&ids) {
                warn!("Failed to record reference usage: {:#}", err);
            }
        }

        Ok(MatchOutcome {
            references,
            buckets,
            relaxation,
        })
    }
}

/// display_order ascending, ties broken by usage_count descending.
fn rank(entries: &mut [BrandReferenceEntry]) {
    entries.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then(b.usage_count.cmp(&a.usage_count))
    });
}
