//! Signature catalog - known injection payload fragments.
//!
//! Detection is deliberately simple: case-insensitive substring containment
//! against a fixed list of literals. That trades detection quality for
//! predictability - legitimate text containing a fragment (an `admin'` next
//! to a quote) is a false positive, and any encoding or whitespace variation
//! evades it. The escalation policy in [`crate::monitor`] is built on top of
//! exactly this behavior, so the catalog is kept literal on purpose.

/// Known injection fragments, matched as case-insensitive substrings.
pub const SIGNATURES: &[&str] = &[
    // Classic SQL injection
    "' OR '1'='1",
    "' OR 1=1--",
    "' OR 1=1#",
    "' OR 1=1/*",
    "admin'--",
    "admin'#",
    "admin'/*",
    "' OR 'x'='x",
    "' OR 'a'='a",
    "') OR ('1'='1",
    // Union-based
    "' UNION SELECT",
    "' UNION ALL SELECT",
    "UNION SELECT NULL",
    "UNION SELECT 1,2,3",
    // Blind
    "' AND (SELECT SUBSTRING",
    "' AND ASCII(SUBSTRING",
    "' AND LENGTH(",
    "' WAITFOR DELAY",
    "' AND SLEEP(5)",
    // Error-based
    "' AND EXTRACTVALUE",
    "' AND UPDATEXML",
    "' AND EXP(~(SELECT",
    // Stacked queries
    "'; DROP TABLE",
    "'; DELETE FROM",
    "'; INSERT INTO",
    "'; UPDATE",
    // Common payloads
    "1' OR '1'='1",
    "admin' OR '1'='1'--",
    "x' OR 1=1 OR 'x'='y",
    "' OR ''='",
    "1' OR 1=1#",
    "' OR 1=1 LIMIT 1--",
    // NoSQL operators
    "' || '1'=='1",
    "' && '1'=='1",
    "$ne",
    "$gt",
    "$where",
    // Generic dangerous keywords
    "SELECT * FROM",
    "DROP DATABASE",
    "EXEC xp_cmdshell",
    "LOAD_FILE(",
    "INTO OUTFILE",
    "BENCHMARK(",
    "pg_sleep(",
];

/// Returns the first catalog signature contained in `candidate`.
///
/// Comparison is case-insensitive; both sides are upper-cased before the
/// substring test. Empty or whitespace-only input never matches, whatever
/// the catalog contains.
pub fn match_signature(candidate: &str) -> Option<&'static str> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_uppercase();
    SIGNATURES
        .iter()
        .find(|signature| upper.contains(&signature.to_uppercase()))
        .copied()
}
