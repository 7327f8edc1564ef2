//! Random password generation over the four recognized classes.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

use crate::model::CharClass;

/// Generates a random password of `length` characters from the full
/// 94-character pool, using the operating system RNG.
pub fn generate_password(length: usize) -> SecretString {
    generate_password_with(&mut OsRng, length)
}

/// Same as [`generate_password`] with a caller-supplied RNG, e.g. a seeded
/// one. The `CryptoRng` bound keeps non-cryptographic generators out.
pub fn generate_password_with<R: Rng + CryptoRng>(rng: &mut R, length: usize) -> SecretString {
    let alphabet: Vec<char> = CharClass::ALL
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect();

    let password: String = (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    SecretString::new(password.into())
}
