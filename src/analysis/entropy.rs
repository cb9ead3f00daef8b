//! Shannon entropy estimate over the observed character distribution.

use std::collections::HashMap;

/// Estimates the entropy of a password in bits.
///
/// Computes the Shannon entropy of the observed per-character frequency
/// distribution and scales it by the character count. This measures the
/// diversity of the given string, not the unpredictability of whatever
/// process generated it: any permutation of the same characters scores
/// the same, and a string of one repeated character scores 0.
pub fn shannon_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in password.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let length = password.chars().count();
    let entropy_per_char: f64 = counts
        .values()
        .map(|&cnt| {
            let p = cnt as f64 / length as f64;
            -p * p.log2()
        })
        .sum();

    entropy_per_char * length as f64
}
