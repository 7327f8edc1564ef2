//! Human-readable rendering of crack times.
//!
//! Ladder comparisons run on plain linear seconds, so exactly-representable
//! edge values land on the documented side of each boundary. Times carried
//! in log2 form may saturate to 0 or +∞ when linearized; both extremes fall
//! inside the qualitative buckets, so saturation cannot misclassify.

use std::fmt;

use crate::model::CrackTime;

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3_600.0;
const SECS_PER_DAY: f64 = 86_400.0;
/// 365-day year.
pub(crate) const SECS_PER_YEAR: f64 = 31_536_000.0;

/// Durations under a millisecond read as instantaneous.
const INSTANT_SECS: f64 = 1e-3;

/// Age of the universe, the upper qualitative bucket.
const UNIVERSE_AGE_YEARS: f64 = 13.8e9;

/// Year counts beyond this switch to scientific notation.
const PLAIN_YEARS_LIMIT: f64 = 1e6;

impl CrackTime {
    /// Renders the duration in its largest sensible unit, with qualitative
    /// buckets at both extremes.
    pub fn humanize(self) -> String {
        humanize_duration(self.secs())
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.humanize())
    }
}

/// Renders a duration in seconds the same way crack times are rendered.
///
/// Infinite durations land in the age-of-the-universe bucket. NaN and
/// negative durations are outside the contract and read as the degenerate
/// zero duration.
pub fn humanize_duration(seconds: f64) -> String {
    if seconds.is_nan() || seconds < INSTANT_SECS {
        return "effectively instantaneous".to_string();
    }
    if seconds > UNIVERSE_AGE_YEARS * SECS_PER_YEAR {
        return "longer than the age of the universe".to_string();
    }

    if seconds < 1.0 {
        format!("{:.3} s", seconds)
    } else if seconds < SECS_PER_MINUTE {
        format!("{:.2} s", seconds)
    } else if seconds < SECS_PER_HOUR {
        format!("{:.2} min", seconds / SECS_PER_MINUTE)
    } else if seconds < SECS_PER_DAY {
        format!("{:.2} hr", seconds / SECS_PER_HOUR)
    } else if seconds < SECS_PER_YEAR {
        format!("{:.2} days", seconds / SECS_PER_DAY)
    } else {
        let years = seconds / SECS_PER_YEAR;
        if years < PLAIN_YEARS_LIMIT {
            format!("{:.2} years", years)
        } else {
            format!("{:.2e} years", years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantaneous_bucket() {
        assert_eq!(CrackTime::ZERO.humanize(), "effectively instantaneous");
        assert_eq!(humanize_duration(0.0), "effectively instantaneous");
        assert_eq!(humanize_duration(0.0005), "effectively instantaneous");
    }

    #[test]
    fn test_sub_second_keeps_millisecond_precision() {
        assert_eq!(humanize_duration(0.5), "0.500 s");
    }

    #[test]
    fn test_unit_ladder() {
        assert_eq!(humanize_duration(42.0), "42.00 s");
        assert_eq!(humanize_duration(90.0), "1.50 min");
        assert_eq!(humanize_duration(7_200.0), "2.00 hr");
        assert_eq!(humanize_duration(172_800.0), "2.00 days");
        assert_eq!(humanize_duration(63_072_000.0), "2.00 years");
    }

    #[test]
    fn test_bucket_boundaries() {
        // Exact edges belong to the larger unit; the ladder compares the
        // caller's value untouched, so these hold bit-for-bit.
        assert_eq!(humanize_duration(0.001), "0.001 s");
        assert_eq!(humanize_duration(1.0), "1.00 s");
        assert_eq!(humanize_duration(60.0), "1.00 min");
        assert_eq!(humanize_duration(3_600.0), "1.00 hr");
        assert_eq!(humanize_duration(86_400.0), "1.00 days");
        assert_eq!(humanize_duration(SECS_PER_YEAR), "1.00 years");
        assert_eq!(humanize_duration(1e6 * SECS_PER_YEAR), "1.00e6 years");
        assert_eq!(
            humanize_duration(UNIVERSE_AGE_YEARS * SECS_PER_YEAR),
            "1.38e10 years"
        );
    }

    #[test]
    fn test_just_below_an_edge_stays_in_the_smaller_unit() {
        // One ulp under a minute is still seconds, even though the number
        // rounds to 60.00 in print.
        assert_eq!(humanize_duration(60.0_f64.next_down()), "60.00 s");
        assert_eq!(humanize_duration(SECS_PER_YEAR.next_down()), "365.00 days");
    }

    #[test]
    fn test_large_year_counts_go_scientific() {
        assert_eq!(humanize_duration(12_345.0 * SECS_PER_YEAR), "12345.00 years");
        assert_eq!(humanize_duration(1e7 * SECS_PER_YEAR), "1.00e7 years");
    }

    #[test]
    fn test_universe_bucket() {
        assert_eq!(
            humanize_duration(14e9 * SECS_PER_YEAR),
            "longer than the age of the universe"
        );
        assert_eq!(
            humanize_duration(f64::INFINITY),
            "longer than the age of the universe"
        );
    }

    #[test]
    fn test_universe_bucket_without_linear_overflow() {
        // log2 = 2000 overflows linear f64 but must still classify.
        let astronomical = CrackTime::from_log2_secs(2000.0);
        assert!(astronomical.secs().is_infinite());
        assert_eq!(
            astronomical.humanize(),
            "longer than the age of the universe"
        );
    }

    #[test]
    fn test_nan_and_negative_read_as_instantaneous() {
        assert_eq!(humanize_duration(f64::NAN), "effectively instantaneous");
        assert_eq!(humanize_duration(-1.0), "effectively instantaneous");
        assert_eq!(
            CrackTime::from_secs(-1.0).humanize(),
            "effectively instantaneous"
        );
    }

    #[test]
    fn test_display_matches_humanize() {
        let time = CrackTime::from_secs(90.0);
        assert_eq!(time.to_string(), time.humanize());
    }
}
