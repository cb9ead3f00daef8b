//! Predictable-sequence detection: alphabet, digit and keyboard-row runs.

use std::sync::LazyLock;

/// Minimum run length the evaluator uses when scanning for sequences.
pub const DEFAULT_SEQ_LEN: usize = 4;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const KEYBOARD_ROWS: [&str; 4] = ["`1234567890-=", "qwertyuiop[]\\", "asdfghjkl;'", "zxcvbnm,./"];

/// Forward and reversed variants of the alphabet, the digit string and the
/// four keyboard rows. Built once, never mutated.
static REFERENCE_SEQUENCES: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut sequences = Vec::with_capacity(12);
    for base in [ALPHABET, DIGITS].into_iter().chain(KEYBOARD_ROWS) {
        sequences.push(base.to_string());
        sequences.push(base.chars().rev().collect());
    }
    sequences
});

/// Returns true if the password contains a run of at least `seq_len`
/// characters that appears verbatim inside the alphabet, the digit string
/// or a keyboard row, read in either direction. Matching is
/// case-insensitive.
///
/// Every substring length from `seq_len` up to the full input is tried at
/// every offset; passwords are short enough that the quadratic scan is not
/// worth avoiding. If `seq_len` exceeds the input length the scan is empty
/// and the result is false.
pub fn has_sequence(password: &str, seq_len: usize) -> bool {
    let lowered = password.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let n = chars.len();

    for len in seq_len..=n {
        for start in 0..=(n - len) {
            let sub: String = chars[start..start + len].iter().collect();
            if REFERENCE_SEQUENCES.iter().any(|seq| seq.contains(&sub)) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_alphabetic_run() {
        assert!(has_sequence("xxabcdxx", DEFAULT_SEQ_LEN));
        assert!(has_sequence("mnopq", DEFAULT_SEQ_LEN));
    }

    #[test]
    fn test_sequence_numeric_run() {
        assert!(has_sequence("pw1234pw", DEFAULT_SEQ_LEN));
        assert!(has_sequence("abcd1234", DEFAULT_SEQ_LEN));
    }

    #[test]
    fn test_sequence_reversed_runs() {
        assert!(has_sequence("dcba", DEFAULT_SEQ_LEN));
        assert!(has_sequence("9876", DEFAULT_SEQ_LEN));
        assert!(has_sequence("poiu", DEFAULT_SEQ_LEN)); // qwerty row reversed
    }

    #[test]
    fn test_sequence_keyboard_rows() {
        assert!(has_sequence("qwer", DEFAULT_SEQ_LEN));
        assert!(has_sequence("asdf", DEFAULT_SEQ_LEN));
        assert!(has_sequence("zxcv", DEFAULT_SEQ_LEN));
        // Row includes the punctuation columns
        assert!(has_sequence("jkl;", DEFAULT_SEQ_LEN));
        assert!(has_sequence("890-=", DEFAULT_SEQ_LEN));
    }

    #[test]
    fn test_sequence_case_insensitive() {
        assert!(has_sequence("ABCD", DEFAULT_SEQ_LEN));
        assert!(has_sequence("QwEr", DEFAULT_SEQ_LEN));
    }

    #[test]
    fn test_sequence_requires_contiguity() {
        // "abce" breaks the alphabet run at the last char
        assert!(!has_sequence("abce", DEFAULT_SEQ_LEN));
        assert!(!has_sequence("a1b2c3d4", DEFAULT_SEQ_LEN));
    }

    #[test]
    fn test_sequence_shorter_than_min_run() {
        assert!(!has_sequence("abc", DEFAULT_SEQ_LEN));
        assert!(!has_sequence("", DEFAULT_SEQ_LEN));
    }

    #[test]
    fn test_sequence_seq_len_longer_than_input() {
        assert!(!has_sequence("abcd", 5));
    }

    #[test]
    fn test_sequence_no_match_in_ordinary_word() {
        assert!(!has_sequence("password", DEFAULT_SEQ_LEN));
        assert!(!has_sequence("Tr0ub4dor&3", DEFAULT_SEQ_LEN));
    }

    #[test]
    fn test_sequence_custom_min_length() {
        // A 3-char run only counts when seq_len allows it
        assert!(has_sequence("xyz", 3));
        assert!(!has_sequence("xyz", 4));
    }
}
