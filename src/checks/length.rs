//! Length check - password minimum length.

use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least `min` characters.
pub fn has_min_length(password: &SecretString, min: usize) -> bool {
    password.expose_secret().chars().count() >= min
}
