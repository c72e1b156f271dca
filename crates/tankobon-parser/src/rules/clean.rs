//! Title cleanup and edition tags.

use crate::model::LibraryType;
use crate::special;
use regex::Regex;
use std::sync::LazyLock;

static GROUPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]*\]|\{[^}]*\}|\(\s*\)").expect("valid group pattern")
});

static EMPTY_BRACKETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*\)|\[\s*\]|\{\s*\}").expect("valid bracket pattern")
});

static EDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?P<edition>omnibus(?:\s+edition)?|uncensored|full\s*colou?r(?:ed)?|digital\s*colou?r(?:ed)?|deluxe(?:\s+edition)?)\b",
    )
    .expect("valid edition pattern")
});

/// Clean a raw series/title candidate.
///
/// Underscores become spaces, `[...]` and `{...}` groups and empty brackets
/// are removed, special keywords are dropped for non-prose libraries, runs of
/// whitespace collapse and stray `-`/`,` at either end are trimmed.
///
/// ```
/// use tankobon_parser::{rules::clean_title, LibraryType};
///
/// assert_eq!(clean_title("[Group]_Berserk_-_", LibraryType::Manga), "Berserk");
/// assert_eq!(clean_title("Naruto Omake", LibraryType::Manga), "Naruto");
/// assert_eq!(clean_title("Batman Annual", LibraryType::Comic), "Batman");
/// ```
pub fn clean_title(text: &str, library_type: LibraryType) -> String {
    let text = text.replace('_', " ");
    let mut out = GROUPS.replace_all(&text, " ").into_owned();
    if !library_type.is_prose() {
        out = special::strip_keywords(&out, library_type);
    }
    tidy(&out)
}

/// Edition tag found in `text`, such as "Omnibus Edition" or "Full Color".
pub fn parse_edition(text: &str) -> Option<String> {
    let text = text.replace('_', " ");
    EDITION
        .captures(&text)
        .and_then(|caps| caps.name("edition"))
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
}

/// `text` with every edition tag removed.
///
/// ```
/// use tankobon_parser::rules::strip_edition;
///
/// assert_eq!(strip_edition("One Piece (Omnibus Edition)"), "One Piece");
/// assert_eq!(strip_edition("Vinland Saga Deluxe"), "Vinland Saga");
/// ```
pub fn strip_edition(text: &str) -> String {
    let stripped = EDITION.replace_all(text, " ");
    let stripped = EMPTY_BRACKETS.replace_all(&stripped, " ");
    tidy(&stripped)
}

fn tidy(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| c == '-' || c == ',' || c.is_whitespace())
        .to_string()
}
