//! Password entropy and crack-time estimation library
//!
//! This library computes password entropy from character-class composition
//! and estimates brute-force crack times under two attacker models:
//! classical exhaustive search and a Grover-style quantum search with a
//! quadratic speedup.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async estimation with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_entropy::{estimate, AttackerAssumptions};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let report = estimate(&password, &AttackerAssumptions::default());
//!
//! println!("Entropy: {:.1} bits ({})", report.entropy_bits, report.label());
//! println!("Classical full search: {}", report.classical_full);
//! println!("Quantum full search: {}", report.quantum_full);
//! ```

// Internal modules
mod assumptions;
mod estimator;
mod generator;
mod model;
mod report;

// Public API
pub use assumptions::{
    AssumptionsError, AttackerAssumptions, DEFAULT_CLASSICAL_OPS, DEFAULT_QUANTUM_OPS,
};
pub use estimator::{estimate, estimate_profile, CrackEstimate};
pub use generator::{generate_password, generate_password_with};
pub use model::{
    charset_size, classify, entropy_bits, search_space, CharClass, CharClassSet, CrackTime,
    PasswordProfile,
};
pub use report::{
    humanize_duration, length_projection, resistance_percent, ProjectionPoint, StrengthLabel,
    DEFAULT_LENGTH_RANGE,
};

#[cfg(feature = "async")]
pub use estimator::estimate_tx;
