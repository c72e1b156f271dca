//! Token extraction rules.
//!
//! Each of series, volume and chapter has an ordered rule table. A rule is a
//! case-insensitive pattern scoped to a set of library types, optionally with
//! a guard that can veto a match (the `regex` crate has no look-around, so
//! context checks such as "not a year" live in guards). The first rule that
//! applies to the library type and produces an accepted match wins.
//!
//! Tables are built once into immutable statics and shared by every thread.

mod chapter;
mod clean;
mod series;
mod volume;

pub use clean::{clean_title, parse_edition, strip_edition};

use crate::model::{ChapterToken, LibraryType, Numbering, VolumeToken};
use regex::{Captures, Regex};

/// Veto hook run on a candidate match: `(haystack, captures) -> accept`.
pub(crate) type Guard = fn(&str, &Captures<'_>) -> bool;

/// The library types a rule applies to.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Scope {
    All,
    Only(&'static [LibraryType]),
    Except(&'static [LibraryType]),
}

impl Scope {
    fn applies(self, library_type: LibraryType) -> bool {
        match self {
            Scope::All => true,
            Scope::Only(types) => types.contains(&library_type),
            Scope::Except(types) => !types.contains(&library_type),
        }
    }
}

pub(crate) const PROSE: &[LibraryType] = &[LibraryType::Book, LibraryType::LightNovel];
pub(crate) const COMICS: &[LibraryType] = &[LibraryType::Comic, LibraryType::ComicLegacy];
pub(crate) const NUMBERED: &[LibraryType] = &[
    LibraryType::Manga,
    LibraryType::Comic,
    LibraryType::ComicLegacy,
    LibraryType::Image,
];

/// One entry of a rule table.
pub(crate) struct Rule {
    pub(crate) name: &'static str,
    pattern: Regex,
    scope: Scope,
    guard: Option<Guard>,
}

impl Rule {
    pub(crate) fn new(name: &'static str, pattern: &str, scope: Scope) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid rule pattern"),
            scope,
            guard: None,
        }
    }

    pub(crate) fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Leftmost match accepted by the guard. Candidates may overlap, so the
    /// search restarts one character after each rejected match.
    fn find<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        let mut start = 0;
        while start <= text.len() {
            let caps = self.pattern.captures_at(text, start)?;
            let at = caps.get(0)?.start();
            if self.guard.map_or(true, |guard| guard(text, &caps)) {
                return Some(caps);
            }
            start = match text[at..].chars().next() {
                Some(ch) => at + ch.len_utf8(),
                None => break,
            };
        }
        None
    }
}

/// First rule in `rules` that applies to `library_type` and matches `text`.
fn first_match<'r, 't>(
    rules: &'r [Rule],
    text: &'t str,
    library_type: LibraryType,
) -> Option<(&'r Rule, Captures<'t>)> {
    rules
        .iter()
        .filter(|rule| rule.scope.applies(library_type))
        .find_map(|rule| {
            let caps = rule.find(text)?;
            tracing::trace!(rule = rule.name, text, "rule matched");
            Some((rule, caps))
        })
}

fn prepare(text: &str) -> String {
    text.replace('_', " ").trim().to_string()
}

/// Volume token found in `text`, or loose-leaf.
///
/// ```
/// use tankobon_parser::{rules, LibraryType};
///
/// assert_eq!(rules::parse_volume("Naruto v01", LibraryType::Manga).to_string(), "1");
/// assert_eq!(rules::parse_volume("Tower of God S01 014", LibraryType::Manga).to_string(), "1");
/// assert!(rules::parse_volume("Dune v2", LibraryType::Book).is_loose_leaf());
/// ```
pub fn parse_volume(text: &str, library_type: LibraryType) -> VolumeToken {
    let text = prepare(text);
    first_match(&volume::RULES, &text, library_type)
        .and_then(|(_, caps)| caps.name("volume").map(|m| Numbering::from_token(m.as_str())))
        .unwrap_or_default()
}

/// Chapter token found in `text`, or loose-leaf.
///
/// ```
/// use tankobon_parser::{rules, LibraryType};
///
/// assert_eq!(rules::parse_chapter("One Piece c0982", LibraryType::Manga).to_string(), "982");
/// assert_eq!(rules::parse_chapter("Batman 2016 005", LibraryType::Comic).to_string(), "5");
/// ```
pub fn parse_chapter(text: &str, library_type: LibraryType) -> ChapterToken {
    let text = prepare(text);
    first_match(&chapter::RULES, &text, library_type)
        .and_then(|(_, caps)| caps.name("chapter").map(|m| Numbering::from_token(m.as_str())))
        .unwrap_or_default()
}

/// Series name found by a rule, or `None` when no rule yields a usable name.
pub fn match_series(text: &str, library_type: LibraryType) -> Option<String> {
    let text = prepare(text);
    series::RULES
        .iter()
        .filter(|rule| rule.scope.applies(library_type))
        .find_map(|rule| {
            let caps = rule.find(&text)?;
            let raw = match caps.name("series") {
                Some(m) => m.as_str(),
                None => &text[..caps.get(0)?.start()],
            };
            let candidate = clean_title(raw, library_type);
            if series::is_usable(&candidate) {
                tracing::trace!(rule = rule.name, series = %candidate, "series rule matched");
                Some(candidate)
            } else {
                None
            }
        })
}

/// Series name for `text`. Never fails: without a rule match the cleaned
/// input is returned.
///
/// ```
/// use tankobon_parser::{rules, LibraryType};
///
/// assert_eq!(rules::parse_series("Naruto v01", LibraryType::Manga), "Naruto");
/// assert_eq!(rules::parse_series("My Light Novel Vol. 4", LibraryType::LightNovel), "My Light Novel");
/// assert_eq!(rules::parse_series("[Group] Berserk", LibraryType::Manga), "Berserk");
/// ```
pub fn parse_series(text: &str, library_type: LibraryType) -> String {
    match_series(text, library_type).unwrap_or_else(|| clean_title(text, library_type))
}

/// True iff `token` is the loose-leaf sentinel.
pub fn is_loose_leaf(token: &Numbering) -> bool {
    token.is_loose_leaf()
}

/// Whether `text` carries a volume or chapter token but no series of its
/// own, like a `Vol 01` or `Chapter 3` folder.
pub fn is_numbering_only(text: &str, library_type: LibraryType) -> bool {
    (!parse_volume(text, library_type).is_loose_leaf()
        || !parse_chapter(text, library_type).is_loose_leaf())
        && match_series(text, library_type).is_none()
}
