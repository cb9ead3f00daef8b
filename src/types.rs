//! Value types produced by a password evaluation.

use secrecy::SecretString;
use std::fmt;

/// Strength label derived from the estimated entropy of a password.
///
/// Thresholds (bits, half-open on the low side): `< 28` Poor, `< 36` Weak,
/// `< 60` Good, otherwise Very good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Poor,
    Weak,
    Good,
    VeryGood,
}

impl PasswordStrength {
    /// Classifies an entropy estimate (unrounded bits) into a strength label.
    pub fn from_entropy_bits(bits: f64) -> Self {
        if bits < 28.0 {
            PasswordStrength::Poor
        } else if bits < 36.0 {
            PasswordStrength::Weak
        } else if bits < 60.0 {
            PasswordStrength::Good
        } else {
            PasswordStrength::VeryGood
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::Poor => "Poor",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Good => "Good",
            PasswordStrength::VeryGood => "Very good",
        };
        write!(f, "{label}")
    }
}

/// Which character categories appear at least once in a password.
///
/// `other` covers anything that is neither alphanumeric nor ASCII
/// punctuation: whitespace, control characters, Unicode symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
    pub other: bool,
}

impl CharacterClasses {
    /// Names of the detected classes, in the fixed order
    /// lower, upper, digit, symbol, other.
    pub fn detected(&self) -> Vec<&'static str> {
        let flags = [
            (self.lower, "lower"),
            (self.upper, "upper"),
            (self.digit, "digit"),
            (self.symbol, "symbol"),
            (self.other, "other"),
        ];
        flags
            .into_iter()
            .filter_map(|(present, name)| present.then_some(name))
            .collect()
    }
}

/// Complete result of one password evaluation.
///
/// Built fresh per call and never mutated afterwards. `suggestions` is
/// guaranteed non-empty: when nothing is wrong, a single "good password"
/// message takes its place.
#[derive(Debug, Clone)]
pub struct PasswordEvaluation {
    /// The evaluated password, carried back for echo-mode display.
    pub password: SecretString,
    /// Length in characters (not bytes).
    pub length: usize,
    /// Shannon entropy estimate in bits, rounded to 2 decimal places.
    pub entropy_bits: f64,
    pub classes: CharacterClasses,
    pub strength: PasswordStrength,
    pub suggestions: Vec<String>,
}
