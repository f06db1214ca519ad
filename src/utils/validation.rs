//! Input predicates shared by the HTTP and CLI entry points.

use regex::Regex;
use std::sync::LazyLock;

// ASCII only: `\d` would also accept other Unicode decimal digits.
static BADGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("badge regex is valid"));

/// A badge identifier is exactly four ASCII decimal digits.
pub fn is_valid_badge_id(candidate: &str) -> bool {
    BADGE_RE.is_match(candidate)
}
