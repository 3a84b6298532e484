//! Weak-password check against the known-weak list.

use crate::blacklist::is_blacklisted;
use secrecy::{ExposeSecret, SecretString};

/// Checks if the password is in the weak-password list (exact,
/// case-insensitive match).
pub fn is_weak_password(password: &SecretString) -> bool {
    is_blacklisted(password.expose_secret())
}
