//! sprintf-style placeholder scanning
//!
//! Two pattern families: all placeholders (`%s` and `%2$s` alike) and
//! unordered-only placeholders (no explicit `N$` position). Both treat a
//! `%` that directly follows another `%` as escaped, the way a negative
//! lookbehind would — the `regex` crate has no lookbehind, so candidates
//! are rejected by hand and the scan resumes one byte after the rejected
//! start, which reproduces PCRE's position-by-position behavior.

use regex::Regex;
use std::sync::OnceLock;

/// These regexes adapted from http://php.net/manual/en/function.sprintf.php#93552
pub const SPRINTF_PLACEHOLDER_PATTERN: &str =
    r"%(?:[0-9]+\$)?[+-]?(?:[ 0]|'.)?-?[0-9]*(?:\.[0-9]+)?[bcdeEufFgGosxX]";

/// "Unordered" means there's no position specifier: '%s', not '%2$s'.
pub const UNORDERED_SPRINTF_PLACEHOLDER_PATTERN: &str =
    r"%[+-]?(?:[ 0]|'.)?-?[0-9]*(?:\.[0-9]+)?[bcdeEufFgGosxX]";

/// Which placeholder family to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderSet {
    /// Ordered and unordered alike
    All,
    /// Only placeholders without an explicit position
    UnorderedOnly,
}

fn regex_for(set: PlaceholderSet) -> &'static Regex {
    static ALL: OnceLock<Regex> = OnceLock::new();
    static UNORDERED: OnceLock<Regex> = OnceLock::new();
    match set {
        PlaceholderSet::All => {
            ALL.get_or_init(|| Regex::new(SPRINTF_PLACEHOLDER_PATTERN).unwrap())
        }
        PlaceholderSet::UnorderedOnly => {
            UNORDERED.get_or_init(|| Regex::new(UNORDERED_SPRINTF_PLACEHOLDER_PATTERN).unwrap())
        }
    }
}

/// Extract the requested placeholder family from `content`, in occurrence
/// order. Never fails; unmatched content yields an empty vector.
pub fn placeholders(content: &str, set: PlaceholderSet) -> Vec<String> {
    let regex = regex_for(set);
    let bytes = content.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(m) = regex.find_at(content, pos) {
        if m.start() > 0 && bytes[m.start() - 1] == b'%' {
            // Escaped percent; resume scanning right after the rejected `%`.
            pos = m.start() + 1;
            continue;
        }
        found.push(m.as_str().to_string());
        pos = m.end();
    }

    found
}

/// Remove every placeholder (ordered or not) from `content`. Escaped `%%`
/// sequences stay in place.
pub fn strip_placeholders(content: &str) -> String {
    let regex = regex_for(PlaceholderSet::All);
    let bytes = content.as_bytes();
    let mut out = String::with_capacity(content.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(m) = regex.find_at(content, pos) {
        if m.start() > 0 && bytes[m.start() - 1] == b'%' {
            pos = m.start() + 1;
            continue;
        }
        out.push_str(&content[copied..m.start()]);
        copied = m.end();
        pos = m.end();
    }
    out.push_str(&content[copied..]);

    out
}
