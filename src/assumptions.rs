//! Attacker hardware assumptions.
//!
//! Both estimation formulas are parameterized by a guessing rate; this
//! module validates those rates once, at construction, so the model code
//! never has to re-check them.

use thiserror::Error;

/// Default classical guessing rate: 10^9 guesses/sec, a well-funded
/// offline attacker with GPU rigs against a fast hash.
pub const DEFAULT_CLASSICAL_OPS: f64 = 1e9;

/// Default quantum rate: 10^6 Grover oracle calls/sec, optimistic for the
/// attacker given foreseeable quantum hardware.
pub const DEFAULT_QUANTUM_OPS: f64 = 1e6;

#[derive(Error, Debug, PartialEq)]
pub enum AssumptionsError {
    #[error("classical rate must be a positive, finite ops/sec value, got {0}")]
    InvalidClassicalRate(f64),
    #[error("quantum rate must be a positive, finite ops/sec value, got {0}")]
    InvalidQuantumRate(f64),
}

/// Guessing rates for the two attacker models.
///
/// Rates are validated when the value is built; a constructed
/// `AttackerAssumptions` always holds positive, finite rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackerAssumptions {
    classical_ops_per_sec: f64,
    quantum_ops_per_sec: f64,
}

impl AttackerAssumptions {
    /// Builds assumptions from explicit rates.
    ///
    /// # Errors
    ///
    /// Returns an error if either rate is zero, negative, NaN or infinite.
    pub fn new(
        classical_ops_per_sec: f64,
        quantum_ops_per_sec: f64,
    ) -> Result<Self, AssumptionsError> {
        if !(classical_ops_per_sec.is_finite() && classical_ops_per_sec > 0.0) {
            return Err(AssumptionsError::InvalidClassicalRate(classical_ops_per_sec));
        }
        if !(quantum_ops_per_sec.is_finite() && quantum_ops_per_sec > 0.0) {
            return Err(AssumptionsError::InvalidQuantumRate(quantum_ops_per_sec));
        }
        Ok(AttackerAssumptions {
            classical_ops_per_sec,
            quantum_ops_per_sec,
        })
    }

    /// Classical guesses per second.
    pub fn classical_ops_per_sec(&self) -> f64 {
        self.classical_ops_per_sec
    }

    /// Grover oracle evaluations per second.
    pub fn quantum_ops_per_sec(&self) -> f64 {
        self.quantum_ops_per_sec
    }
}

impl Default for AttackerAssumptions {
    fn default() -> Self {
        AttackerAssumptions {
            classical_ops_per_sec: DEFAULT_CLASSICAL_OPS,
            quantum_ops_per_sec: DEFAULT_QUANTUM_OPS,
        }
    }
}
