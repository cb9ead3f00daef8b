//! Repetition-run detection.

/// Returns the length of the longest run of immediately repeated identical
/// characters: `"aaab"` → 3, `"abab"` → 1, `""` → 0.
pub fn max_repetition_run(password: &str) -> usize {
    let mut max_run = 0;
    let mut current = 0;
    let mut previous: Option<char> = None;

    for c in password.chars() {
        if previous == Some(c) {
            current += 1;
        } else {
            current = 1;
        }
        max_run = max_run.max(current);
        previous = Some(c);
    }
    max_run
}
