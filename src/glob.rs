// Copyright 2025 Cowboy AI, LLC.

//! Exclusion-pattern matching
//!
//! A bespoke, dot-segment-aware glob grammar: `**` matches any sequence of
//! whole dot-separated segments (possibly zero), `*` matches any run of
//! characters within a single segment. Patterns are anchored — the whole
//! candidate string must match, not a substring. No generic glob crate
//! implements this exact grammar, so it is implemented directly (see
//! `DESIGN.md`).

/// Whether `candidate` (e.g. a fully qualified type name) matches `pattern`
///
/// # Examples
///
/// ```rust
/// use hexaglue_classifier::glob::matches;
///
/// assert!(matches("**.*Exception", "com.example.OrderException"));
/// assert!(!matches("**.*Exception", "com.example.Order"));
/// ```
pub fn matches(pattern: &str, candidate: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.split('.').collect();
    let candidate_segments: Vec<&str> = candidate.split('.').collect();
    match_segments(&pattern_segments, &candidate_segments)
}

fn match_segments(pattern: &[&str], candidate: &[&str]) -> bool {
    match pattern.first() {
        None => candidate.is_empty(),
        Some(&"**") => {
            // `**` may absorb zero or more whole segments.
            for split in 0..=candidate.len() {
                if match_segments(&pattern[1..], &candidate[split..]) {
                    return true;
                }
            }
            false
        }
        Some(&seg) => match candidate.first() {
            Some(&head) if segment_matches(seg, head) => match_segments(&pattern[1..], &candidate[1..]),
            _ => false,
        },
    }
}

/// Anchored single-segment match where `*` in `pattern` matches any run of
/// characters (including the empty run) within the segment.
fn segment_matches(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    // Standard glob DP over a single segment (only `*` is a metacharacter).
    let mut dp = vec![vec![false; t.len() + 1]; p.len() + 1];
    dp[0][0] = true;
    for (i, &pc) in p.iter().enumerate() {
        if pc == '*' {
            dp[i + 1][0] = dp[i][0];
        }
    }
    for i in 0..p.len() {
        for j in 0..t.len() {
            dp[i + 1][j + 1] = if p[i] == '*' {
                dp[i][j + 1] || dp[i + 1][j]
            } else {
                p[i] == t[j] && dp[i][j]
            };
        }
    }
    dp[p.len()][t.len()]
}

/// Whether `fqn` matches any of `patterns`
pub fn matches_any<'a>(patterns: impl IntoIterator<Item = &'a str>, fqn: &str) -> bool {
    patterns.into_iter().any(|p| matches(p, fqn))
}
