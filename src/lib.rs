//! Entropy-based password strength estimation
//!
//! This library estimates the strength of a password from the Shannon
//! entropy of its character distribution and derives human-readable
//! improvement suggestions from a handful of pattern detectors.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to a common-password file
//!   (one password per line). Without it, a small built-in list is used.
//!
//! # Example
//!
//! ```rust
//! use pwd_entropy::{evaluate_password_strength, init_wordlist};
//! use secrecy::SecretString;
//!
//! // Initialize the common-password set (call once at startup)
//! init_wordlist().expect("Failed to load wordlist");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Strength: {}", evaluation.strength);
//! println!("Entropy: {} bits", evaluation.entropy_bits);
//! for suggestion in &evaluation.suggestions {
//!     println!("- {suggestion}");
//! }
//! ```
//!
//! The entropy estimate measures the diversity of the string itself, not
//! the process that produced it: this is a usability heuristic, not a
//! cryptographic strength guarantee or a breach-corpus check.

// Internal modules
mod analysis;
mod evaluator;
mod types;
mod wordlist;

// Public API
pub use analysis::{
    DEFAULT_SEQ_LEN, character_classes, has_sequence, max_repetition_run, shannon_entropy,
};
pub use evaluator::evaluate_password_strength;
pub use types::{CharacterClasses, PasswordEvaluation, PasswordStrength};
pub use wordlist::{WordlistError, init_wordlist, init_wordlist_from_path, is_common_password};
