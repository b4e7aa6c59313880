//! Taste-signal classification and reference matching.
//!
//! Turns the four continuous brand-personality sliders into discrete taste
//! buckets, names the detected aesthetic, ranks exemplar entries from the
//! brand reference library, and computes coverage statistics over the
//! deliverable style library for the curation surface.

mod bucketizer;
mod classifier;
pub mod coverage;
mod matcher;
mod namer;

pub use bucketizer::{bucketize, EnergyBucket, ToneBucket, HIGH_THRESHOLD, LOW_THRESHOLD};
pub use classifier::{classify, BrandSignalProfile, BucketPair, DEFAULT_SIGNAL_VALUE};
pub use coverage::{CoverageReport, GAP_THRESHOLD};
pub use matcher::{MatchOutcome, ReferenceMatcher, RelaxationLevel};
pub use namer::name_style;
