//! Crack-time estimation - main estimation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::assumptions::AttackerAssumptions;
use crate::model::{
    charset_size, classical_full, classify, entropy_bits, grover_full, search_space, CrackTime,
    PasswordProfile,
};
use crate::report::StrengthLabel;

/// Complete estimate for one password under one set of assumptions.
///
/// All fields derive from the same entropy figure; nothing here is cached
/// or mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackEstimate {
    /// Entropy in bits: `length × log2(pool)`.
    pub entropy_bits: f64,
    /// Classical attacker exhausting the whole space.
    pub classical_full: CrackTime,
    /// Classical attacker finding the password halfway through, on average.
    pub classical_avg: CrackTime,
    /// Grover-style attacker sweeping the whole space.
    pub quantum_full: CrackTime,
    /// Grover-style attacker, average case.
    pub quantum_avg: CrackTime,
}

impl CrackEstimate {
    /// Number of classical guesses to exhaust the space: `2^entropy_bits`.
    ///
    /// Saturates to infinity past f64's range; the crack times themselves
    /// are unaffected since they are carried in log2 form.
    pub fn search_space(&self) -> f64 {
        search_space(self.entropy_bits)
    }

    /// Strength tier for this estimate's entropy.
    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_bits(self.entropy_bits)
    }
}

/// Estimates entropy and crack times for a password.
///
/// # Arguments
/// * `password` - The password to analyze
/// * `assumptions` - Guessing rates for the two attacker models
///
/// # Returns
/// A `CrackEstimate` with entropy bits and the four crack times.
pub fn estimate(password: &SecretString, assumptions: &AttackerAssumptions) -> CrackEstimate {
    estimate_profile(classify(password), assumptions)
}

/// Estimates from an already-derived profile, e.g. a hypothetical
/// composition that never existed as a real password.
pub fn estimate_profile(
    profile: PasswordProfile,
    assumptions: &AttackerAssumptions,
) -> CrackEstimate {
    // Empty password or no recognized class: zero entropy, zero times.
    if charset_size(profile) == 0 {
        return CrackEstimate {
            entropy_bits: 0.0,
            classical_full: CrackTime::ZERO,
            classical_avg: CrackTime::ZERO,
            quantum_full: CrackTime::ZERO,
            quantum_avg: CrackTime::ZERO,
        };
    }

    let bits = entropy_bits(profile);
    let classical = classical_full(bits, assumptions);
    let quantum = grover_full(bits, assumptions);

    CrackEstimate {
        entropy_bits: bits,
        classical_full: classical,
        classical_avg: classical.half(),
        quantum_full: quantum,
        quantum_avg: quantum.half(),
    }
}

/// Async version that debounces, then sends the estimate via channel.
///
/// The sleep absorbs keystroke bursts; a token cancelled during it means
/// the caller has moved on, so no estimate is computed or sent.
#[cfg(feature = "async")]
pub async fn estimate_tx(
    password: &SecretString,
    assumptions: AttackerAssumptions,
    token: CancellationToken,
    tx: mpsc::Sender<CrackEstimate>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("estimation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("estimation cancelled during debounce");
        return;
    }

    let report = estimate(password, &assumptions);

    if tx.send(report).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("failed to send crack estimate: receiver dropped");
    }
}
