//! Character-class presence detection.

use crate::types::CharacterClasses;

/// Reports which character categories appear at least once in the password.
///
/// `symbol` means ASCII punctuation; `other` is anything neither
/// alphanumeric nor ASCII punctuation (whitespace, control characters,
/// Unicode symbols). Each flag is independent: a password can set all five.
pub fn character_classes(password: &str) -> CharacterClasses {
    CharacterClasses {
        lower: password.chars().any(|c| c.is_lowercase()),
        upper: password.chars().any(|c| c.is_uppercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        symbol: password.chars().any(|c| c.is_ascii_punctuation()),
        other: password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_ascii_punctuation()),
    }
}
