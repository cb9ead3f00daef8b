//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::analysis::{
    DEFAULT_SEQ_LEN, character_classes, has_sequence, max_repetition_run, shannon_entropy,
};
use crate::types::{PasswordEvaluation, PasswordStrength};
use crate::wordlist::is_common_password;

/// Evaluates a password and returns the full evaluation record.
///
/// Total over every input, including the empty string; calling it twice
/// with the same password yields the same result. The strength label is
/// derived from the unrounded entropy estimate; only the reported
/// `entropy_bits` field is rounded to 2 decimal places.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    let entropy = shannon_entropy(pwd);
    let classes = character_classes(pwd);
    let strength = PasswordStrength::from_entropy_bits(entropy);

    #[cfg(feature = "tracing")]
    tracing::debug!(length, entropy, "evaluating password");

    let mut suggestions = Vec::new();

    if length < 8 {
        suggestions.push("Increase the password length to at least 12 characters.".to_string());
    } else if length < 12 {
        suggestions.push("Consider a password of 12+ characters for better security.".to_string());
    }

    if !classes.upper {
        suggestions.push("Add uppercase letters.".to_string());
    }
    if !classes.lower {
        suggestions.push("Add lowercase letters.".to_string());
    }
    if !classes.digit {
        suggestions.push("Add digits.".to_string());
    }
    if !classes.symbol {
        suggestions.push("Add punctuation/symbols (e.g. !@#$%).".to_string());
    }

    if is_common_password(pwd) {
        suggestions.push("Do not use a common password.".to_string());
    }
    if has_sequence(pwd, DEFAULT_SEQ_LEN) {
        suggestions.push(
            "Avoid obvious sequences like 'abcd', '1234' or keyboard row patterns.".to_string(),
        );
    }
    if max_repetition_run(pwd) >= 3.max(length / 2) {
        suggestions.push("Avoid repeated characters (e.g. 'aaaaaa' or '111111').".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(
            "Good password. Consider a password manager for unique passwords per service."
                .to_string(),
        );
    }

    PasswordEvaluation {
        password: password.clone(),
        length,
        entropy_bits: (entropy * 100.0).round() / 100.0,
        classes,
        strength,
        suggestions,
    }
}
