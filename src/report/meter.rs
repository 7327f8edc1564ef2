//! Resistance meter: compresses a crack time onto a 0-100 gauge.

use super::humanize::SECS_PER_YEAR;
use crate::model::CrackTime;

/// Meter fill for a crack time, on a logarithmic year scale.
///
/// Anything cracked within a second reads 0; a century or more reads 100.
/// In between the fill grows with log10 of the year count, so the gauge
/// stays readable across the huge spread between weak and strong passwords.
pub fn resistance_percent(time: CrackTime) -> u8 {
    let secs = time.secs();
    if secs <= 1.0 {
        return 0;
    }
    let years = secs / SECS_PER_YEAR;
    if years >= 100.0 {
        return 100;
    }
    let percent = (years + 1.0).log10() / 2.0 * 100.0;
    percent.clamp(0.0, 100.0) as u8
}
