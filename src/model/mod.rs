//! Core entropy model: character classes, entropy arithmetic and the two
//! attacker timing formulas.

mod attack;
mod entropy;
mod profile;

pub use attack::CrackTime;
pub use entropy::{charset_size, entropy_bits, search_space};
pub use profile::{classify, CharClass, CharClassSet, PasswordProfile};

pub(crate) use attack::{classical_full, grover_full};
