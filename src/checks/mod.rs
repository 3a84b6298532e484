//! Password strength checks
//!
//! Each check is a pure, stateless predicate over one aspect of the
//! password. The orchestration and overall rating live in
//! [`crate::analysis`].

mod length;
mod special;
mod variety;
mod weak;

pub use length::{has_min_length, MIN_LENGTH};
pub use special::{contains_special_char, ALLOWED_SPECIAL_CHARS};
pub use variety::{contains_digit, contains_mixed_case, count_character_groups};
pub use weak::is_weak_password;
