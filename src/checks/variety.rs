//! Variety checks - digits, letter case, and character-group counting.

use secrecy::{ExposeSecret, SecretString};

use super::contains_special_char;

/// Checks if the password contains at least one ASCII digit.
pub fn contains_digit(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Checks if the password contains both an uppercase and a lowercase ASCII
/// letter.
pub fn contains_mixed_case(password: &SecretString) -> bool {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    has_upper && has_lower
}

/// Counts distinct character groups present in the password.
///
/// Groups: digits, uppercase letters, lowercase letters, special characters
/// (from the allowed set). Result is in `0..=4`.
pub fn count_character_groups(password: &SecretString) -> usize {
    let pwd = password.expose_secret();
    let mut groups = 0;

    if contains_digit(password) {
        groups += 1;
    }
    if pwd.chars().any(|c| c.is_ascii_uppercase()) {
        groups += 1;
    }
    if pwd.chars().any(|c| c.is_ascii_lowercase()) {
        groups += 1;
    }
    if contains_special_char(password) {
        groups += 1;
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_contains_digit() {
        assert!(contains_digit(&secret("abc1")));
        assert!(!contains_digit(&secret("abcdef")));
        assert!(!contains_digit(&secret("")));
    }

    #[test]
    fn test_contains_mixed_case() {
        assert!(contains_mixed_case(&secret("aB")));
        assert!(!contains_mixed_case(&secret("lowercase")));
        assert!(!contains_mixed_case(&secret("UPPERCASE")));
        assert!(!contains_mixed_case(&secret("1234!")));
    }

    #[test]
    fn test_count_character_groups_all_four() {
        assert_eq!(count_character_groups(&secret("Aa1!")), 4);
    }

    #[test]
    fn test_count_character_groups_partial() {
        assert_eq!(count_character_groups(&secret("abc")), 1);
        assert_eq!(count_character_groups(&secret("Abc")), 2);
        assert_eq!(count_character_groups(&secret("Abc1")), 3);
        assert_eq!(count_character_groups(&secret("")), 0);
    }
}
