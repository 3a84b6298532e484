//! Weak-password list management
//!
//! Handles loading and querying the list of known weak passwords.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static WEAK_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

/// Built-in fallback list, used when no external file is configured.
const DEFAULT_WEAK_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "12345678", "12345",
    "1234567", "password123", "admin", "qwerty", "abc123",
    "letmein", "monkey", "1234567890", "dragon", "111111",
    "baseball", "iloveyou", "trustno1", "sunshine", "master",
    "welcome", "shadow", "ashley", "football", "jesus",
    "michael", "ninja", "mustang", "password1", "root", "sudo",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Weak-password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read weak-password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Weak-password file is empty")]
    EmptyFile,
}

/// Returns the weak-password file path.
///
/// Priority:
/// 1. Environment variable `PWD_GUARD_BLACKLIST_PATH`
/// 2. Default path `./assets/weak-passwords.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("PWD_GUARD_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/weak-passwords.txt"))
}

/// Initializes the weak-password list from an external file.
///
/// Set `PWD_GUARD_BLACKLIST_PATH` to specify a custom file location; defaults
/// to `./assets/weak-passwords.txt`.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or is empty.
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    let path = get_blacklist_path();
    init_blacklist_from_path(&path)
}

/// Initializes the weak-password list from a specific file path.
///
/// Idempotent: once a list is loaded, later calls return its size without
/// re-reading anything.
pub fn init_blacklist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = WEAK_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Weak-password list initialization FAILED: file not found {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Weak-password list initialization FAILED: empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = WEAK_PASSWORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Weak-password list initialized: {} entries from {:?}", count, path);

    Ok(count)
}

/// Installs the built-in weak-password list.
///
/// Used by the REPL when no external file is available; idempotent like the
/// file-based initializers.
pub fn init_builtin_blacklist() -> usize {
    {
        let guard = WEAK_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return set.len();
        }
    }

    let set: HashSet<String> = DEFAULT_WEAK_PASSWORDS.iter().map(|p| p.to_string()).collect();
    let count = set.len();
    let mut guard = WEAK_PASSWORDS.write().unwrap();
    *guard = Some(set);
    count
}

/// Checks if a password is in the weak-password list.
///
/// Comparison is an exact, case-insensitive match. Returns `false` if the
/// list has not been initialized.
pub fn is_blacklisted(password: &str) -> bool {
    let guard = WEAK_PASSWORDS.read().unwrap();
    guard
        .as_ref()
        .map(|list| list.contains(&password.to_lowercase()))
        .unwrap_or(false)
}

/// Resets the weak-password list for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = WEAK_PASSWORDS.write().unwrap();
    *guard = None;
}
