//! Series rules.
//!
//! A rule either captures a `series` group or, when it has none, the series
//! is everything before the match.

use super::chapter::bare_number_guard;
use super::{Rule, Scope, COMICS, NUMBERED, PROSE};
use crate::model::LibraryType;
use regex::Regex;
use std::sync::LazyLock;

pub(super) static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Earliest volume or chapter token: "Naruto v01", "Naruto - Vol. 1 Ch. 3"
        Rule::new(
            "numbered-token",
            r"(?i)^(?P<series>.+?)[\s\-,\[(]+(?:vol(?:ume)?s?\.?\s*|chapters?\s*|ch(?:p|ap)?\.?\s*|episode\s*|ep\.?\s*|v|c)\d",
            Scope::Except(PROSE),
        ),
        // Prose only trusts spelled-out tokens: "My Light Novel Vol. 4"
        Rule::new(
            "explicit-token",
            r"(?i)^(?P<series>.+?)[\s\-,\[(]+(?:vol(?:ume)?s?\.?|chapters?|chap|ch\.?)\s*\d",
            Scope::All,
        ),
        // "Some Series SP01"; after the numbered rules so "v01 SP01" is cut too
        Rule::new("special-marker", r"(?i)^(?P<series>.+?)[\s\-,]+sp\d+", Scope::All),
        Rule::new(
            "season",
            r"(?i)^(?P<series>.+?)\s+s\d+(?:\s|$)",
            Scope::Only(&[LibraryType::Manga]),
        ),
        Rule::new("hash", r"^(?P<series>.+?)\s*#\d", Scope::Only(NUMBERED)),
        Rule::new(
            "tome",
            r"(?i)^(?P<series>.+?)[\s\-,]+(?:tome|t)\s?\d",
            Scope::Only(COMICS),
        ),
        Rule::new(
            "cjk",
            r"^(?P<series>.+?)\s*(?:第\d|[卷册]\d|\d+[巻권話话화]|제\d)",
            Scope::Except(COMICS),
        ),
        Rule::new(
            "ru",
            r"(?i)^(?P<series>.+?)[\s\-,]*(?:том|глава)\s*\d",
            Scope::Except(COMICS),
        ),
        Rule::new("ru-n-tom", r"(?i)^(?P<series>.+?)\s+\d+\s*том", Scope::Except(COMICS)),
        Rule::new("th", r"^(?P<series>.+?)\s*(?:เล่ม|ตอนที่)\s*\d", Scope::Except(COMICS)),
        // "Batman 001 (2016)"
        Rule::new(
            "number-then-year",
            r"^(?P<series>.+?)\s+-?\s*\d+(?:\.\d+)?\s+\(\d{4}\)",
            Scope::Except(PROSE),
        ),
        // "Batman (2016) 001", "Dune (1965)"
        Rule::new("parenthesized-number", r"^(?P<series>.+?)\s*\(\d", Scope::All),
        Rule::new(
            "dash-number",
            r"\s-\s?(?P<number>\d+(?:\.\d+)?(?:-\d+(?:\.\d+)?)?)(?:$|[^\p{L}\d])",
            Scope::Only(NUMBERED),
        )
        .with_guard(bare_number_guard),
        Rule::new(
            "bare-number",
            r"[\s\-](?P<number>\d+(?:\.\d+)?(?:-\d+(?:\.\d+)?)?)(?:$|[^\p{L}\d])",
            Scope::Only(NUMBERED),
        )
        .with_guard(bare_number_guard),
    ]
});

static NUMBERING_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:vol(?:ume)?s?\.?|v|chapters?|chap|ch\.?|c|tome|t|sp)\s*\d+(?:\.\d+)?(?:[-~]\d+(?:\.\d+)?)?$",
    )
    .expect("valid numbering-only pattern")
});

/// A cleaned candidate is usable when it is non-empty and is not itself just
/// a volume or chapter token.
pub(super) fn is_usable(candidate: &str) -> bool {
    !candidate.is_empty() && !NUMBERING_ONLY.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_usable() {
        assert!(is_usable("Naruto"));
        assert!(is_usable("100"));
        assert!(!is_usable(""));
        assert!(!is_usable("Vol 1"));
        assert!(!is_usable("v01"));
        assert!(!is_usable("Chapter 2-3"));
    }
}
