//! Strength tiers derived from entropy alone.

use std::fmt;

/// Tier boundaries in bits of entropy.
const MODERATE_BITS: f64 = 40.0;
const STRONG_BITS: f64 = 60.0;
const VERY_STRONG_BITS: f64 = 80.0;

/// Qualitative strength tier for an entropy figure.
///
/// Ordered weakest to strongest, so tiers can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps entropy in bits onto a tier: below 40 weak, below 60 moderate,
    /// below 80 strong, 80 and above very strong.
    pub fn from_bits(entropy_bits: f64) -> StrengthLabel {
        if entropy_bits < MODERATE_BITS {
            StrengthLabel::Weak
        } else if entropy_bits < STRONG_BITS {
            StrengthLabel::Moderate
        } else if entropy_bits < VERY_STRONG_BITS {
            StrengthLabel::Strong
        } else {
            StrengthLabel::VeryStrong
        }
    }

    /// One-line guidance to show next to the tier.
    pub fn advice(self) -> &'static str {
        match self {
            StrengthLabel::Weak => {
                "Use more diverse characters and a longer length (12 or more)."
            }
            StrengthLabel::Moderate => "Okay, but can be stronger with length 16 or more.",
            StrengthLabel::Strong => {
                "Safe against classical attacks and moderately safe against quantum attacks."
            }
            StrengthLabel::VeryStrong => "High entropy; even Grover's algorithm struggles here.",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StrengthLabel::Weak => "weak",
            StrengthLabel::Moderate => "moderate",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very strong",
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(StrengthLabel::from_bits(0.0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_bits(39.9), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_bits(40.0), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_bits(59.9), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_bits(60.0), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_bits(79.9), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_bits(80.0), StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_bits(500.0), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(StrengthLabel::Weak < StrengthLabel::Moderate);
        assert!(StrengthLabel::Moderate < StrengthLabel::Strong);
        assert!(StrengthLabel::Strong < StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_label_never_decreases_with_entropy() {
        let mut previous = StrengthLabel::from_bits(0.0);
        for tenths in 0..2000 {
            let label = StrengthLabel::from_bits(f64::from(tenths) * 0.1);
            assert!(label >= previous);
            previous = label;
        }
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(StrengthLabel::Weak.to_string(), "weak");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "very strong");
    }

    #[test]
    fn test_every_tier_has_advice() {
        for label in [
            StrengthLabel::Weak,
            StrengthLabel::Moderate,
            StrengthLabel::Strong,
            StrengthLabel::VeryStrong,
        ] {
            assert!(!label.advice().is_empty());
        }
    }
}
