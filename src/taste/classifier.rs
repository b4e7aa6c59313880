//! Tone/energy classification of a brand signal profile.

use serde::Serialize;

use super::bucketizer::{bucketize, EnergyBucket, ToneBucket};

/// Midpoint used for absent signal values. Absent is never an error.
pub const DEFAULT_SIGNAL_VALUE: i64 = 50;

/// The four brand-personality sliders as submitted by the onboarding flow.
///
/// Each signal is a 0-100 integer; any of them may be absent. Density and
/// warmth are carried for future use but do not participate in
/// classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrandSignalProfile {
    pub tone: Option<i64>,
    pub density: Option<i64>,
    pub warmth: Option<i64>,
    pub energy: Option<i64>,
}

/// The classified bucket pair, the sole key used by matching and naming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BucketPair {
    pub tone: ToneBucket,
    pub energy: EnergyBucket,
}

/// Absent and out-of-range values both normalize to the midpoint; a signal
/// is never rejected.
fn signal_or_default(value: Option<i64>) -> i64 {
    match value {
        Some(value) if (0..=100).contains(&value) => value,
        _ => DEFAULT_SIGNAL_VALUE,
    }
}

/// Bucket the tone and energy signals of a profile.
pub fn classify(profile: &BrandSignalProfile) -> BucketPair {
    let tone = signal_or_default(profile.tone);
    let energy = signal_or_default(profile.energy);
    BucketPair {
        tone: bucketize(
            tone,
            ToneBucket::Serious,
            ToneBucket::Balanced,
            ToneBucket::Playful,
        ),
        energy: bucketize(
            energy,
            EnergyBucket::Minimal,
            EnergyBucket::Balanced,
            EnergyBucket::Bold,
        ),
    }
}
