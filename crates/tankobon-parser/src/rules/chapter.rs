//! Chapter rules and the bare-number guard shared with series rules.

use super::{Rule, Scope, COMICS, NUMBERED, PROSE};
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub(super) static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // "Chapter 10.5", "Ch. 12-14", "Chp 3"
        Rule::new(
            "explicit",
            r"(?i)(?:^|[^\p{L}])(?:chapters?|chap|chp|ch)\.?\s*(?P<chapter>\d+(?:\.\d+)?(?:-(?:ch?\.?\s*)?\d+(?:\.\d+)?)?)",
            Scope::All,
        ),
        // "c0982", "v01c001", "c12-c14"
        Rule::new(
            "bare-c",
            r"(?i)(?:^|[^\p{L}])c(?P<chapter>\d+(?:\.\d+)?(?:-c?\d+(?:\.\d+)?)?)(?:$|[^\p{L}\d])",
            Scope::Except(PROSE),
        ),
        Rule::new(
            "episode",
            r"(?i)(?:^|[^\p{L}])(?:episode|ep)\.?\s*(?P<chapter>\d+(?:\.\d+)?(?:-\d+(?:\.\d+)?)?)",
            Scope::Except(PROSE),
        ),
        // "Batman #12"
        Rule::new(
            "hash",
            r"#(?P<chapter>\d+(?:\.\d+)?(?:-\d+(?:\.\d+)?)?)",
            Scope::Only(NUMBERED),
        ),
        Rule::new("cjk-di-hua", r"第(?P<chapter>\d+)[话話章回]", Scope::Except(COMICS)),
        Rule::new("cjk-hua", r"(?P<chapter>\d+)[话話章]", Scope::Except(COMICS)),
        Rule::new("ko-hwa", r"제?(?P<chapter>\d+)화", Scope::Except(COMICS)),
        Rule::new("ru-glava", r"(?i)глава\s*(?P<chapter>\d+)", Scope::Except(COMICS)),
        Rule::new("th-ton", r"ตอนที่\s*(?P<chapter>\d+)", Scope::Except(COMICS)),
        // "Kaiju No. 8 - 045"
        Rule::new(
            "dash-number",
            r"\s-\s?(?P<chapter>\d+(?:\.\d+)?(?:-\d+(?:\.\d+)?)?)(?:$|[^\p{L}\d])",
            Scope::Only(NUMBERED),
        )
        .with_guard(bare_number_guard),
        // "Batman 2016 005"
        Rule::new(
            "bare-number",
            r"[\s\-](?P<chapter>\d+(?:\.\d+)?(?:-\d+(?:\.\d+)?)?)(?:$|[^\p{L}\d])",
            Scope::Only(NUMBERED),
        )
        .with_guard(bare_number_guard),
    ]
});

/// Words that make a following number something other than a chapter.
const NUMBER_PREFIX_WORDS: &[&str] = &[
    "vol", "volume", "volumes", "vols", "v", "tome", "t", "book", "part", "season", "chapter",
    "chapters", "chap", "chp", "ch", "c", "episode", "ep",
];

static VOLUME_AHEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^\p{L}])(?:vol(?:ume)?s?\.?\s*|v)\d").expect("valid volume pattern")
});

/// Accept a bare number only when it does not look like a year, is not the
/// argument of a volume-ish word and is not followed by a volume token.
///
/// The number is read from the `chapter` group, or `number` in series rules.
pub(super) fn bare_number_guard(text: &str, caps: &Captures<'_>) -> bool {
    let Some(number) = caps.name("chapter").or_else(|| caps.name("number")) else {
        return false;
    };
    let first = number.as_str().split('-').next().unwrap_or_default();
    if is_year_like(first) {
        return false;
    }

    let Some(whole) = caps.get(0) else {
        return false;
    };
    // "v01-03": the number closes a range opened by the previous token.
    let glued = text[..whole.start()]
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_digit());
    if glued && whole.as_str().starts_with('-') {
        return false;
    }
    let prefix = text[..whole.start()].trim();
    let last_word = prefix
        .rsplit(|c: char| c.is_whitespace() || c == '-')
        .find(|word| !word.is_empty());
    let Some(last_word) = last_word else {
        return false;
    };
    let last_word = last_word.trim_end_matches('.').to_lowercase();
    if NUMBER_PREFIX_WORDS.contains(&last_word.as_str()) {
        return false;
    }

    !VOLUME_AHEAD.is_match(&text[number.end()..])
}

/// Four digits between 1900 and 2099.
fn is_year_like(value: &str) -> bool {
    value.len() == 4 && value.parse::<u16>().is_ok_and(|year| (1900..=2099).contains(&year))
}
