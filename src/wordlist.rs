//! Common-password wordlist
//!
//! Holds the reference set of well-known passwords. Ships with a small
//! built-in list and can be replaced by an external file at startup.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

/// Built-in fallback list, used until (or unless) `init_wordlist` loads
/// an external file. Entries are stored lowercase.
const DEFAULT_COMMON_PASSWORDS: [&str; 12] = [
    "123456",
    "password",
    "123456789",
    "12345678",
    "qwerty",
    "abc123",
    "111111",
    "1234567",
    "iloveyou",
    "admin",
    "welcome",
    "letmein",
];

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Initializes the common-password set.
///
/// If `PWD_WORDLIST_PATH` is set, the file it points to is loaded (one
/// password per line, case-insensitive). Otherwise the built-in default
/// list is installed. Idempotent: once initialized, later calls return
/// the current size without reloading.
///
/// # Errors
///
/// Returns an error if `PWD_WORDLIST_PATH` points to a file that does
/// not exist, cannot be read, or is empty.
pub fn init_wordlist() -> Result<usize, WordlistError> {
    match std::env::var("PWD_WORDLIST_PATH") {
        Ok(path) => init_wordlist_from_path(PathBuf::from(path)),
        Err(_) => {
            let set: HashSet<String> = DEFAULT_COMMON_PASSWORDS
                .iter()
                .map(|p| (*p).to_string())
                .collect();
            install(set)
        }
    }
}

/// Initializes the common-password set from a specific file path.
///
/// Use this when the caller resolves the path itself instead of relying
/// on the `PWD_WORDLIST_PATH` environment variable.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    // Idempotent: if already initialized, return the current size
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: FileNotFound {}", path.display());
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: Empty file {}", path.display());
        return Err(WordlistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    install(set)
}

fn install(set: HashSet<String>) -> Result<usize, WordlistError> {
    let count = set.len();
    {
        let mut guard = COMMON_PASSWORDS.write().unwrap();
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.len());
        }
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist initialized: {} passwords", count);

    Ok(count)
}

/// Checks whether a password is in the common-password set (case-insensitive).
///
/// Falls back to the built-in default list when `init_wordlist` has not
/// been called, so evaluation works without any setup.
pub fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    let guard = COMMON_PASSWORDS.read().unwrap();
    match guard.as_ref() {
        Some(set) => set.contains(&lowered),
        None => DEFAULT_COMMON_PASSWORDS.contains(&lowered.as_str()),
    }
}

/// Resets the wordlist for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = None;
}
