//! Aesthetic naming from a classified bucket pair.

use super::bucketizer::{EnergyBucket, ToneBucket};
use super::classifier::BucketPair;

/// One naming rule: a bucket predicate and the label it produces.
/// `None` on an axis means "any bucket".
struct NamingRule {
    tone: Option<ToneBucket>,
    energy: Option<EnergyBucket>,
    label: &'static str,
}

impl NamingRule {
    fn matches(&self, buckets: &BucketPair) -> bool {
        self.tone.map_or(true, |tone| tone == buckets.tone)
            && self.energy.map_or(true, |energy| energy == buckets.energy)
    }
}

/// The naming table, evaluated top to bottom, first match wins. The order is
/// a deliberate tie-break: the exact-pair rules must shadow the single-axis
/// rules below them.
const NAMING_RULES: &[NamingRule] = &[
    NamingRule {
        tone: Some(ToneBucket::Playful),
        energy: Some(EnergyBucket::Bold),
        label: "Vibrant Bold",
    },
    NamingRule {
        tone: Some(ToneBucket::Playful),
        energy: Some(EnergyBucket::Minimal),
        label: "Playful Minimal",
    },
    NamingRule {
        tone: Some(ToneBucket::Serious),
        energy: Some(EnergyBucket::Bold),
        label: "Professional Impact",
    },
    NamingRule {
        tone: Some(ToneBucket::Serious),
        energy: Some(EnergyBucket::Minimal),
        label: "Elegant Refined",
    },
    NamingRule {
        tone: Some(ToneBucket::Balanced),
        energy: Some(EnergyBucket::Balanced),
        label: "Versatile Classic",
    },
    NamingRule {
        tone: Some(ToneBucket::Playful),
        energy: None,
        label: "Spirited Modern",
    },
    NamingRule {
        tone: Some(ToneBucket::Serious),
        energy: None,
        label: "Corporate Clean",
    },
    NamingRule {
        tone: None,
        energy: Some(EnergyBucket::Bold),
        label: "Bold Statement",
    },
    NamingRule {
        tone: None,
        energy: Some(EnergyBucket::Minimal),
        label: "Clean Minimal",
    },
    NamingRule {
        tone: None,
        energy: None,
        label: "Your Brand Style",
    },
];

/// Name the aesthetic detected for a bucket pair.
pub fn name_style(buckets: &BucketPair) -> &'static str {
    NAMING_RULES
        .iter()
        .find(|rule| rule.matches(buckets))
        .map(|rule| rule.label)
        .unwrap_or("Your Brand Style")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(tone: ToneBucket, energy: EnergyBucket) -> BucketPair {
        BucketPair { tone, energy }
    }

    #[test]
    fn test_exact_pair_rules() {
        assert_eq!(
            name_style(&pair(ToneBucket::Playful, EnergyBucket::Bold)),
            "Vibrant Bold"
        );
        assert_eq!(
            name_style(&pair(ToneBucket::Playful, EnergyBucket::Minimal)),
            "Playful Minimal"
        );
        assert_eq!(
            name_style(&pair(ToneBucket::Serious, EnergyBucket::Bold)),
            "Professional Impact"
        );
        assert_eq!(
            name_style(&pair(ToneBucket::Serious, EnergyBucket::Minimal)),
            "Elegant Refined"
        );
        assert_eq!(
            name_style(&pair(ToneBucket::Balanced, EnergyBucket::Balanced)),
            "Versatile Classic"
        );
    }

    #[test]
    fn test_exact_pair_shadows_single_axis_rule() {
        // (playful, bold) also satisfies the tone==playful rule further down,
        // but the exact pair must win.
        assert_eq!(
            name_style(&pair(ToneBucket::Playful, EnergyBucket::Bold)),
            "Vibrant Bold"
        );
    }

    #[test]
    fn test_single_axis_fallbacks() {
        assert_eq!(
            name_style(&pair(ToneBucket::Playful, EnergyBucket::Balanced)),
            "Spirited Modern"
        );
        assert_eq!(
            name_style(&pair(ToneBucket::Serious, EnergyBucket::Balanced)),
            "Corporate Clean"
        );
        assert_eq!(
            name_style(&pair(ToneBucket::Balanced, EnergyBucket::Bold)),
            "Bold Statement"
        );
        assert_eq!(
            name_style(&pair(ToneBucket::Balanced, EnergyBucket::Minimal)),
            "Clean Minimal"
        );
    }

    #[test]
    fn test_every_pair_has_a_name() {
        for tone in [ToneBucket::Serious, ToneBucket::Balanced, ToneBucket::Playful] {
            for energy in [
                EnergyBucket::Minimal,
                EnergyBucket::Balanced,
                EnergyBucket::Bold,
            ] {
                assert!(!name_style(&pair(tone, energy)).is_empty());
            }
        }
    }
}
