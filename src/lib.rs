//! Password strength checking with injection-threat monitoring
//!
//! This library provides pure password strength checks plus a stateful
//! threat monitor that scans free-text input for known injection payloads
//! and escalates offending origins (first offense = warning, second offense
//! = lockout).
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GUARD_BLACKLIST_PATH`: Custom path to the weak-password file
//!   (default: `./assets/weak-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_guard::{analyze_password, ThreatMonitor, Verdict};
//! use secrecy::SecretString;
//!
//! // Load the weak-password list once at startup.
//! pwd_guard::init_builtin_blacklist();
//!
//! let monitor = ThreatMonitor::new();
//!
//! // Threatening input advances escalation state instead of being analyzed.
//! assert_ne!(monitor.classify("' OR '1'='1"), Verdict::Clean);
//!
//! // Harmless input goes through the strength checks.
//! assert_eq!(monitor.classify("MySecurePass123!"), Verdict::Clean);
//! let password = SecretString::new("MySecurePass123!".to_string().into());
//! let analysis = analyze_password(&password);
//! println!("Rating: {:?}", analysis.rating());
//! ```

// Internal modules
mod analysis;
mod blacklist;
mod checks;
mod monitor;
mod origin;
mod signatures;

// Public API
pub use analysis::{analyze_password, PasswordAnalysis, StrengthRating};
pub use blacklist::{
    get_blacklist_path, init_blacklist, init_blacklist_from_path, init_builtin_blacklist,
    is_blacklisted, BlacklistError,
};
pub use checks::{
    contains_digit, contains_mixed_case, contains_special_char, count_character_groups,
    has_min_length, is_weak_password, ALLOWED_SPECIAL_CHARS, MIN_LENGTH,
};
pub use monitor::{AlertSink, MonitorStats, StderrSink, ThreatMonitor, Verdict};
pub use origin::{LocalHostResolver, OriginResolver, StaticOrigin, FALLBACK_ORIGIN};
pub use signatures::{match_signature, SIGNATURES};
