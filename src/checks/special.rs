//! Special-character check against the allowed set.

use secrecy::{ExposeSecret, SecretString};

/// Special characters accepted by the strength rules.
pub const ALLOWED_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Checks if the password contains at least one allowed special character.
pub fn contains_special_char(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| ALLOWED_SPECIAL_CHARS.contains(c))
}
