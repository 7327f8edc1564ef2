//! Password classification - character classes and the scan that derives a profile.

use secrecy::{ExposeSecret, SecretString};

const LOWER_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT_ALPHABET: &str = "0123456789";
const SYMBOL_ALPHABET: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The four character classes the brute-force model recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Lowercase ASCII letters.
    Lower,
    /// Uppercase ASCII letters.
    Upper,
    /// ASCII digits.
    Digit,
    /// ASCII punctuation, a fixed 32-character set.
    Symbol,
}

impl CharClass {
    /// All four classes, in pool-summation order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// The literal alphabet this class covers.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lower => LOWER_ALPHABET,
            CharClass::Upper => UPPER_ALPHABET,
            CharClass::Digit => DIGIT_ALPHABET,
            CharClass::Symbol => SYMBOL_ALPHABET,
        }
    }

    /// Pool size the attacker is assumed to cover once this class appears.
    /// Derived from the literal alphabet so the two cannot drift apart.
    pub fn pool_size(self) -> u32 {
        self.alphabet().len() as u32
    }

    /// Whether `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Symbol => c.is_ascii_punctuation(),
        }
    }

    /// The class `c` falls into, if any.
    ///
    /// Whitespace and non-ASCII characters belong to no class: they count
    /// toward length but never widen the assumed pool, so passwords built
    /// from exotic alphabets under-report entropy.
    pub fn of(c: char) -> Option<CharClass> {
        CharClass::ALL.into_iter().find(|class| class.contains(c))
    }

    const fn bit(self) -> u8 {
        match self {
            CharClass::Lower => 0b0001,
            CharClass::Upper => 0b0010,
            CharClass::Digit => 0b0100,
            CharClass::Symbol => 0b1000,
        }
    }
}

/// Set of character classes, stored as a fixed-size bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharClassSet(u8);

impl CharClassSet {
    /// The empty set.
    pub const EMPTY: CharClassSet = CharClassSet(0);

    /// The set containing all four classes.
    pub const FULL: CharClassSet = CharClassSet(0b1111);

    /// Adds a class to the set.
    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    /// Whether the set contains `class`.
    pub fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Number of classes in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no class is present.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the classes present, in pool-summation order.
    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharClass> for CharClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = CharClassSet::EMPTY;
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Character-class composition of a password: its length and which classes
/// appear in it. Everything downstream of classification works off this
/// value; the password itself never travels further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordProfile {
    length: usize,
    classes: CharClassSet,
}

impl PasswordProfile {
    /// Builds a profile directly from a composition, without a concrete
    /// password. Length projections use this to sweep hypothetical lengths
    /// over a fixed class set.
    pub fn from_composition(length: usize, classes: CharClassSet) -> Self {
        PasswordProfile { length, classes }
    }

    /// Number of characters (Unicode scalar values) in the password.
    pub fn length(self) -> usize {
        self.length
    }

    /// The character classes present.
    pub fn classes(self) -> CharClassSet {
        self.classes
    }
}

/// Scans a password once, recording its length and the character classes
/// present.
///
/// # Returns
/// A `PasswordProfile`. There are no error conditions: the empty password
/// yields a zero-length profile, and unrecognized characters count toward
/// length only.
pub fn classify(password: &SecretString) -> PasswordProfile {
    let mut length = 0;
    let mut classes = CharClassSet::EMPTY;

    for c in password.expose_secret().chars() {
        length += 1;
        if let Some(class) = CharClass::of(c) {
            classes.insert(class);
        }
    }

    PasswordProfile { length, classes }
}
