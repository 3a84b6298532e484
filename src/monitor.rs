//! Threat monitor - classifies input against the signature catalog and
//! tracks per-origin escalation state.
//!
//! Escalation is a two-strike policy: the first matched input from an origin
//! produces a warning, the second blocks that origin until an explicit
//! administrative [`ThreatMonitor::unblock`]. State lives in the monitor
//! instance for the process lifetime; nothing is persisted.

use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

use chrono::Local;

use crate::origin::{LocalHostResolver, OriginResolver};
use crate::signatures::match_signature;

/// Per-call classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No signature matched; no state was touched.
    Clean,
    /// First offense from this origin; the session may continue.
    WarnedFirstOffense,
    /// Second or later offense; the origin is blocked.
    BlockedNow,
}

/// Destination for formatted security alerts.
///
/// Fire-and-forget: the monitor never consumes a return value, and callers
/// must not rely on the alert text, only on the returned [`Verdict`].
pub trait AlertSink: Send + Sync {
    fn emit(&self, message: &str);
}

/// Default sink writing alerts to stderr.
pub struct StderrSink;

impl AlertSink for StderrSink {
    fn emit(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Both sets are guarded by one lock so the membership check and the insert
/// that follows it are atomic. Two concurrent first offenses from the same
/// origin must not both be treated as "first".
#[derive(Default)]
struct EscalationState {
    flagged: HashSet<String>,
    blocked: HashSet<String>,
}

/// Read-only snapshot of monitor state at call time.
#[derive(Debug, Clone)]
pub struct MonitorStats {
    pub flagged_count: usize,
    pub blocked_count: usize,
    pub flagged_origins: Vec<String>,
    pub blocked_origins: Vec<String>,
}

impl fmt::Display for MonitorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Security statistics:")?;
        writeln!(f, "Flagged origins (first warning): {}", self.flagged_count)?;
        write!(f, "Blocked origins: {}", self.blocked_count)?;
        if !self.flagged_origins.is_empty() {
            write!(f, "\nFlagged: {}", self.flagged_origins.join(", "))?;
        }
        if !self.blocked_origins.is_empty() {
            write!(f, "\nBlocked: {}", self.blocked_origins.join(", "))?;
        }
        Ok(())
    }
}

/// Stateful input-threat monitor.
///
/// Constructed explicitly and passed by reference; a fresh instance per test
/// or per embedding gives isolated escalation state.
///
/// # Example
///
/// ```rust
/// use pwd_guard::{StaticOrigin, StderrSink, ThreatMonitor, Verdict};
///
/// let monitor = ThreatMonitor::with_parts(
///     Box::new(StaticOrigin::new("192.0.2.1")),
///     Box::new(StderrSink),
/// );
///
/// assert_eq!(monitor.classify("MySecurePass123!"), Verdict::Clean);
/// assert_eq!(monitor.classify("' OR '1'='1"), Verdict::WarnedFirstOffense);
/// assert_eq!(monitor.classify("admin'--"), Verdict::BlockedNow);
/// assert!(monitor.is_blocked());
/// ```
pub struct ThreatMonitor {
    state: Mutex<EscalationState>,
    resolver: Box<dyn OriginResolver>,
    sink: Box<dyn AlertSink>,
}

impl Default for ThreatMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreatMonitor {
    /// Monitor with local-host origin resolution and stderr alerts.
    pub fn new() -> Self {
        Self::with_parts(Box::new(LocalHostResolver), Box::new(StderrSink))
    }

    /// Monitor with injected origin resolution and alert sink.
    pub fn with_parts(resolver: Box<dyn OriginResolver>, sink: Box<dyn AlertSink>) -> Self {
        Self {
            state: Mutex::new(EscalationState::default()),
            resolver,
            sink,
        }
    }

    /// Classifies `candidate` against the signature catalog and, on a match,
    /// advances the resolved origin's escalation state.
    ///
    /// Non-threatening input (including empty or whitespace-only text) never
    /// mutates state and always returns [`Verdict::Clean`]. Once an origin is
    /// blocked, further matches keep returning [`Verdict::BlockedNow`];
    /// re-matching never demotes.
    pub fn classify(&self, candidate: &str) -> Verdict {
        if candidate.trim().is_empty() {
            return Verdict::Clean;
        }
        let Some(signature) = match_signature(candidate) else {
            return Verdict::Clean;
        };

        let origin = self.resolver.resolve();
        let verdict = {
            let mut state = self.state.lock().unwrap();
            if state.flagged.contains(&origin) {
                state.blocked.insert(origin.clone());
                Verdict::BlockedNow
            } else {
                state.flagged.insert(origin.clone());
                Verdict::WarnedFirstOffense
            }
        };

        // Alert formatting and emission happen after the lock is released so
        // a slow sink never stalls concurrent callers.
        self.sink
            .emit(&format_alert(candidate, signature, &origin, verdict));

        #[cfg(feature = "tracing")]
        tracing::warn!(%origin, signature, ?verdict, "injection signature matched");

        verdict
    }

    /// Whether the current caller's origin is blocked. Pure read.
    pub fn is_blocked(&self) -> bool {
        self.is_origin_blocked(&self.resolver.resolve())
    }

    /// Whether a specific origin is blocked. Pure read.
    pub fn is_origin_blocked(&self, origin: &str) -> bool {
        self.state.lock().unwrap().blocked.contains(origin)
    }

    /// Administrative override: clears `origin` from both the flagged and the
    /// blocked set. A no-op for unknown origins. This is the only way an
    /// origin returns to a clean record.
    pub fn unblock(&self, origin: &str) {
        let mut state = self.state.lock().unwrap();
        state.blocked.remove(origin);
        state.flagged.remove(origin);

        #[cfg(feature = "tracing")]
        tracing::info!(origin, "origin unblocked");
    }

    /// Snapshot of current escalation state. Origin lists are sorted for
    /// stable reporting.
    pub fn stats(&self) -> MonitorStats {
        let state = self.state.lock().unwrap();
        let mut flagged_origins: Vec<String> = state.flagged.iter().cloned().collect();
        let mut blocked_origins: Vec<String> = state.blocked.iter().cloned().collect();
        flagged_origins.sort();
        blocked_origins.sort();
        MonitorStats {
            flagged_count: state.flagged.len(),
            blocked_count: state.blocked.len(),
            flagged_origins,
            blocked_origins,
        }
    }
}

fn format_alert(candidate: &str, signature: &str, origin: &str, verdict: Verdict) -> String {
    let rule = "=".repeat(60);
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let notice = match verdict {
        Verdict::BlockedNow => {
            "YOUR ORIGIN HAS BEEN BLOCKED!\n\
             Reason: repeated injection attempts.\n\
             Contact an administrator to be unblocked."
        }
        _ => {
            "WARNING: the next attempt will block your origin!\n\
             This activity has been logged and reported."
        }
    };
    format!(
        "\n{rule}\n\
         SECURITY ALERT: INJECTION ATTEMPT DETECTED\n\
         {rule}\n\
         Suspicious input: {candidate}\n\
         Matched signature: {signature}\n\
         Origin: {origin}\n\
         Time: {timestamp}\n\n\
         {notice}\n\
         {rule}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::origin::StaticOrigin;
    use std::sync::{Arc, Mutex as StdMutex};
    use std::thread;

    /// Sink collecting emitted alerts for assertions.
    #[derive(Default)]
    struct CollectingSink(StdMutex<Vec<String>>);

    impl AlertSink for &'static CollectingSink {
        fn emit(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    struct SilentSink;

    impl AlertSink for SilentSink {
        fn emit(&self, _message: &str) {}
    }

    fn monitor_for(origin: &str) -> ThreatMonitor {
        ThreatMonitor::with_parts(Box::new(StaticOrigin::new(origin)), Box::new(SilentSink))
    }

    #[test]
    fn test_clean_input_never_mutates_state() {
        let monitor = monitor_for("192.0.2.1");

        for input in ["", "   ", "\t\n", "MySecurePass123!"] {
            assert_eq!(monitor.classify(input), Verdict::Clean);
        }

        let stats = monitor.stats();
        assert_eq!(stats.flagged_count, 0);
        assert_eq!(stats.blocked_count, 0);
        assert!(!monitor.is_blocked());
    }

    #[test]
    fn test_first_offense_warns() {
        let monitor = monitor_for("192.0.2.1");

        assert_eq!(monitor.classify("' OR '1'='1"), Verdict::WarnedFirstOffense);

        let stats = monitor.stats();
        assert_eq!(stats.flagged_origins, vec!["192.0.2.1".to_string()]);
        assert_eq!(stats.blocked_count, 0);
        assert!(!monitor.is_blocked());
    }

    #[test]
    fn test_second_offense_blocks() {
        let monitor = monitor_for("192.0.2.1");

        assert_eq!(monitor.classify("' OR '1'='1"), Verdict::WarnedFirstOffense);
        assert_eq!(monitor.classify("admin'--"), Verdict::BlockedNow);

        assert!(monitor.is_blocked());
        assert!(monitor.is_origin_blocked("192.0.2.1"));
        assert_eq!(monitor.stats().blocked_origins, vec!["192.0.2.1".to_string()]);
    }

    #[test]
    fn test_blocked_origin_stays_blocked() {
        let monitor = monitor_for("192.0.2.1");

        monitor.classify("' OR '1'='1");
        monitor.classify("admin'--");

        // Re-matching never demotes.
        assert_eq!(monitor.classify("'; DROP TABLE users"), Verdict::BlockedNow);
        assert_eq!(monitor.classify("' OR 1=1#"), Verdict::BlockedNow);
        assert!(monitor.is_blocked());
    }

    #[test]
    fn test_case_insensitive_escalation() {
        let monitor = monitor_for("192.0.2.1");

        assert_eq!(monitor.classify("' or '1'='1"), Verdict::WarnedFirstOffense);
        assert_eq!(monitor.classify("' OR '1'='1"), Verdict::BlockedNow);
    }

    #[test]
    fn test_unblock_fully_resets_origin() {
        let monitor = monitor_for("192.0.2.1");

        monitor.classify("' OR '1'='1");
        monitor.classify("admin'--");
        assert!(monitor.is_blocked());

        monitor.unblock("192.0.2.1");
        assert!(!monitor.is_blocked());
        let stats = monitor.stats();
        assert_eq!(stats.flagged_count, 0);
        assert_eq!(stats.blocked_count, 0);

        // Next match counts as a fresh first offense again.
        assert_eq!(monitor.classify("' OR '1'='1"), Verdict::WarnedFirstOffense);
    }

    #[test]
    fn test_unblock_unknown_origin_is_noop() {
        let monitor = monitor_for("192.0.2.1");
        monitor.unblock("203.0.113.9");
        assert_eq!(monitor.stats().flagged_count, 0);
    }

    #[test]
    fn test_independent_origins_escalate_independently() {
        let sink = || Box::new(SilentSink) as Box<dyn AlertSink>;
        let a = ThreatMonitor::with_parts(Box::new(StaticOrigin::new("10.0.0.1")), sink());
        let b = ThreatMonitor::with_parts(Box::new(StaticOrigin::new("10.0.0.2")), sink());

        assert_eq!(a.classify("admin'--"), Verdict::WarnedFirstOffense);
        assert_eq!(b.classify("admin'--"), Verdict::WarnedFirstOffense);
        assert!(!a.is_blocked());
        assert!(!b.is_blocked());
    }

    #[test]
    fn test_alert_contains_input_signature_and_origin() {
        static SINK: CollectingSink = CollectingSink(StdMutex::new(Vec::new()));
        let monitor =
            ThreatMonitor::with_parts(Box::new(StaticOrigin::new("192.0.2.7")), Box::new(&SINK));

        monitor.classify("admin'--");

        let alerts = SINK.0.lock().unwrap();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("admin'--"));
        assert!(alerts[0].contains("192.0.2.7"));
    }

    #[test]
    fn test_concurrent_first_offenses_escalate_exactly_once() {
        let monitor = Arc::new(monitor_for("192.0.2.1"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let monitor = Arc::clone(&monitor);
                thread::spawn(move || monitor.classify("' OR '1'='1"))
            })
            .collect();

        let verdicts: Vec<Verdict> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let warned = verdicts
            .iter()
            .filter(|v| **v == Verdict::WarnedFirstOffense)
            .count();
        let blocked = verdicts.iter().filter(|v| **v == Verdict::BlockedNow).count();

        // Exactly one caller observes the Clean -> Warned transition; every
        // other racer sees the origin already flagged and blocks it.
        assert_eq!(warned, 1);
        assert_eq!(blocked, 7);
        assert!(monitor.is_blocked());
        assert_eq!(monitor.stats().flagged_count, 1);
    }

    #[test]
    fn test_scenario_from_interactive_session() {
        let monitor = monitor_for("192.0.2.1");

        assert_eq!(monitor.classify("MySecurePass123!"), Verdict::Clean);
        assert_eq!(monitor.classify("' OR '1'='1"), Verdict::WarnedFirstOffense);
        assert_eq!(monitor.classify("admin'--"), Verdict::BlockedNow);
        assert!(monitor.is_blocked());
        monitor.unblock("192.0.2.1");
        assert!(!monitor.is_blocked());
    }

    #[test]
    fn test_stats_display_reports_counts() {
        let monitor = monitor_for("192.0.2.1");
        monitor.classify("admin'--");

        let report = monitor.stats().to_string();
        assert!(report.contains("Flagged origins (first warning): 1"));
        assert!(report.contains("Blocked origins: 0"));
        assert!(report.contains("192.0.2.1"));
    }
}
