//! Password strength analysis - runs all checks and produces an overall
//! rating.

use secrecy::SecretString;

use crate::checks::{
    contains_digit, contains_mixed_case, contains_special_char, count_character_groups,
    has_min_length, is_weak_password, MIN_LENGTH,
};

/// Overall strength rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthRating {
    /// All criteria met and not a known weak password.
    Strong,
    /// Not weak, at least three character groups, minimum length met.
    Medium,
    /// Everything else.
    Weak,
}

/// Per-criterion results of a password analysis.
#[derive(Debug, Clone)]
pub struct PasswordAnalysis {
    pub length_ok: bool,
    pub has_digit: bool,
    pub has_mixed_case: bool,
    pub has_special: bool,
    pub is_weak: bool,
    pub group_count: usize,
}

impl PasswordAnalysis {
    pub fn rating(&self) -> StrengthRating {
        if !self.is_weak
            && self.length_ok
            && self.has_digit
            && self.has_mixed_case
            && self.has_special
        {
            StrengthRating::Strong
        } else if !self.is_weak && self.group_count >= 3 && self.length_ok {
            StrengthRating::Medium
        } else {
            StrengthRating::Weak
        }
    }
}

/// Runs every strength check against the password.
///
/// Pure with respect to monitor state; only the weak-password list (loaded
/// once at startup) is consulted.
pub fn analyze_password(password: &SecretString) -> PasswordAnalysis {
    PasswordAnalysis {
        length_ok: has_min_length(password, MIN_LENGTH),
        has_digit: contains_digit(password),
        has_mixed_case: contains_mixed_case(password),
        has_special: contains_special_char(password),
        is_weak: is_weak_password(password),
        group_count: count_character_groups(password),
    }
}
