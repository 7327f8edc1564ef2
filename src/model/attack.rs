//! Crack-time arithmetic for the two attacker models.
//!
//! Times are carried as log2(seconds): entropy-driven durations overflow
//! f64's linear range past roughly 1024 bits, while their logarithms stay
//! small. Linear seconds are derived only at the reporting edge.

use crate::assumptions::AttackerAssumptions;

/// One crack-time figure, stored as the log2 of its duration in seconds.
///
/// Ordering and equality follow the underlying log2 value. The zero
/// duration is representable as [`CrackTime::ZERO`] (log2 = −∞).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CrackTime {
    log2_secs: f64,
}

impl CrackTime {
    /// Zero seconds: the crack time of a password with nothing to search.
    pub const ZERO: CrackTime = CrackTime {
        log2_secs: f64::NEG_INFINITY,
    };

    pub(crate) fn from_log2_secs(log2_secs: f64) -> CrackTime {
        CrackTime { log2_secs }
    }

    /// Builds a crack time from a non-negative duration in seconds.
    /// Negative or NaN input is out of contract and renders as the zero
    /// duration.
    pub fn from_secs(secs: f64) -> CrackTime {
        CrackTime {
            log2_secs: secs.log2(),
        }
    }

    /// log2 of the duration in seconds; −∞ for the zero duration.
    pub fn log2_secs(self) -> f64 {
        self.log2_secs
    }

    /// The duration in linear seconds.
    ///
    /// Saturates to `f64::INFINITY` when the magnitude exceeds f64's
    /// exponent range; ordering reads the log2 form, and a saturated value
    /// still lands in the right qualitative display bucket.
    pub fn secs(self) -> f64 {
        self.log2_secs.exp2()
    }

    /// Half this duration, the expected (average-case) variant of a full
    /// search: on average the attacker finds the password halfway through.
    pub fn half(self) -> CrackTime {
        CrackTime {
            log2_secs: self.log2_secs - 1.0,
        }
    }
}

/// Time for a classical attacker to exhaust a `bits`-bit search space:
/// `2^bits / classical_ops_per_sec`.
pub(crate) fn classical_full(bits: f64, assumptions: &AttackerAssumptions) -> CrackTime {
    CrackTime::from_log2_secs(bits - assumptions.classical_ops_per_sec().log2())
}

/// Time for a Grover-style quantum attacker to sweep the same space:
/// `sqrt(2^bits) / quantum_ops_per_sec`, the quadratic speedup.
pub(crate) fn grover_full(bits: f64, assumptions: &AttackerAssumptions) -> CrackTime {
    CrackTime::from_log2_secs(bits / 2.0 - assumptions.quantum_ops_per_sec().log2())
}
