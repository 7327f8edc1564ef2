//! Length sweep backing the length-vs-crack-time chart.

use std::ops::RangeInclusive;

use crate::assumptions::AttackerAssumptions;
use crate::estimator::estimate_profile;
use crate::model::{CharClass, CharClassSet, CrackTime, PasswordProfile};

/// Length axis the chart uses by default.
pub const DEFAULT_LENGTH_RANGE: RangeInclusive<usize> = 4..=32;

/// One chart sample: a hypothetical length with its entropy and the two
/// average-case crack times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    pub length: usize,
    pub entropy_bits: f64,
    pub classical_avg: CrackTime,
    pub quantum_avg: CrackTime,
}

/// Projects a fixed class composition across a range of lengths.
///
/// An empty composition is swept as lowercase-only, the weakest pool, so
/// the chart stays meaningful before any recognized character is typed.
pub fn length_projection(
    classes: CharClassSet,
    assumptions: &AttackerAssumptions,
    lengths: RangeInclusive<usize>,
) -> Vec<ProjectionPoint> {
    let classes = if classes.is_empty() {
        CharClassSet::from_iter([CharClass::Lower])
    } else {
        classes
    };

    lengths
        .map(|length| {
            let profile = PasswordProfile::from_composition(length, classes);
            let estimate = estimate_profile(profile, assumptions);
            ProjectionPoint {
                length,
                entropy_bits: estimate.entropy_bits,
                classical_avg: estimate.classical_avg,
                quantum_avg: estimate.quantum_avg,
            }
        })
        .collect()
}
