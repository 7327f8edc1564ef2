//! Entropy arithmetic - pool size, entropy bits and the implied search space.

use super::profile::{CharClass, PasswordProfile};

/// Size of the character pool a brute-force attacker must cover for this
/// profile: the summed pool of every class present.
///
/// # Returns
/// 0 for a zero-length profile or one with no recognized class; the attacker
/// has nothing to enumerate in either case.
pub fn charset_size(profile: PasswordProfile) -> u32 {
    if profile.length() == 0 {
        return 0;
    }
    profile.classes().iter().map(CharClass::pool_size).sum()
}

/// Estimated entropy in bits: `length × log2(pool)`.
///
/// A zero pool is worth 0 bits by convention; log2(0) never enters the
/// arithmetic.
pub fn entropy_bits(profile: PasswordProfile) -> f64 {
    let pool = charset_size(profile);
    if pool == 0 {
        return 0.0;
    }
    profile.length() as f64 * f64::from(pool).log2()
}

/// The search space implied by an entropy estimate: `2^bits` expected
/// classical guesses to exhaust it.
///
/// Saturates to `f64::INFINITY` past roughly 1024 bits. Crack-time
/// arithmetic therefore stays in log2-space (`CrackTime`) and only
/// exponentiates at the reporting edge.
pub fn search_space(entropy_bits: f64) -> f64 {
    entropy_bits.exp2()
}
