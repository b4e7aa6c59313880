//! Signal bucketing: one continuous 0-100 slider to a 3-way category.

use serde::{Deserialize, Serialize};

/// Signals strictly below this value fall into the low bucket.
pub const LOW_THRESHOLD: i64 = 35;

/// Signals strictly above this value fall into the high bucket.
pub const HIGH_THRESHOLD: i64 = 65;

/// Tone bucket of a brand profile (serious ↔ playful axis).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneBucket {
    Serious,
    Balanced,
    Playful,
}

impl ToneBucket {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "serious" => Some(ToneBucket::Serious),
            "balanced" => Some(ToneBucket::Balanced),
            "playful" => Some(ToneBucket::Playful),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            ToneBucket::Serious => "serious",
            ToneBucket::Balanced => "balanced",
            ToneBucket::Playful => "playful",
        }
    }
}

/// Energy bucket of a brand profile (calm ↔ energetic axis, displayed as
/// minimal/balanced/bold).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyBucket {
    Minimal,
    Balanced,
    Bold,
}

impl EnergyBucket {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "minimal" => Some(EnergyBucket::Minimal),
            "balanced" => Some(EnergyBucket::Balanced),
            "bold" => Some(EnergyBucket::Bold),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            EnergyBucket::Minimal => "minimal",
            EnergyBucket::Balanced => "balanced",
            EnergyBucket::Bold => "bold",
        }
    }
}

/// Classify a single signal value into one of three buckets.
///
/// Total over all integers: out-of-range values classify by the same rule,
/// range validation is the caller's concern. The thresholds are fixed and
/// symmetric around the midpoint 50.
pub fn bucketize<B: Copy>(value: i64, low: B, balanced: B, high: B) -> B {
    if value < LOW_THRESHOLD {
        low
    } else if value > HIGH_THRESHOLD {
        high
    } else {
        balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(value: i64) -> ToneBucket {
        bucketize(
            value,
            ToneBucket::Serious,
            ToneBucket::Balanced,
            ToneBucket::Playful,
        )
    }

    fn energy(value: i64) -> EnergyBucket {
        bucketize(
            value,
            EnergyBucket::Minimal,
            EnergyBucket::Balanced,
            EnergyBucket::Bold,
        )
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(tone(0), ToneBucket::Serious);
        assert_eq!(tone(34), ToneBucket::Serious);
        assert_eq!(tone(35), ToneBucket::Balanced);
        assert_eq!(tone(50), ToneBucket::Balanced);
        assert_eq!(tone(65), ToneBucket::Balanced);
        assert_eq!(tone(66), ToneBucket::Playful);
        assert_eq!(tone(100), ToneBucket::Playful);
    }

    #[test]
    fn test_energy_labels() {
        assert_eq!(energy(10), EnergyBucket::Minimal);
        assert_eq!(energy(50), EnergyBucket::Balanced);
        assert_eq!(energy(90), EnergyBucket::Bold);
    }

    #[test]
    fn test_out_of_range_values_still_classify() {
        assert_eq!(tone(-20), ToneBucket::Serious);
        assert_eq!(tone(250), ToneBucket::Playful);
    }

    #[test]
    fn test_deterministic_over_full_range() {
        for value in 0..=100 {
            assert_eq!(tone(value), tone(value));
        }
    }

    #[test]
    fn test_db_str_roundtrip() {
        for bucket in [ToneBucket::Serious, ToneBucket::Balanced, ToneBucket::Playful] {
            assert_eq!(ToneBucket::from_db_str(bucket.to_db_str()), Some(bucket));
        }
        for bucket in [
            EnergyBucket::Minimal,
            EnergyBucket::Balanced,
            EnergyBucket::Bold,
        ] {
            assert_eq!(EnergyBucket::from_db_str(bucket.to_db_str()), Some(bucket));
        }
        assert_eq!(ToneBucket::from_db_str("zesty"), None);
        assert_eq!(EnergyBucket::from_db_str(""), None);
    }

    #[test]
    fn test_wire_serialization_is_lowercase() {
        let json = serde_json::to_string(&ToneBucket::Serious).unwrap();
        assert_eq!(json, r#""serious""#);
        let json = serde_json::to_string(&EnergyBucket::Bold).unwrap();
        assert_eq!(json, r#""bold""#);
    }
}
