//! Special-release detection.
//!
//! A special is bonus content (omake, artbooks, one-shots, annuals) rather
//! than a numbered release. An `SP<n>` marker makes a special unless the file
//! also carries a chapter number; a keyword or a "specials" folder only does
//! when the file carries no volume or chapter number.

use crate::format::strip_supported_extension;
use crate::model::LibraryType;
use crate::rules::{parse_chapter, parse_volume};
use regex::Regex;
use std::sync::LazyLock;

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^\p{L}])sp(?P<index>\d+)(?:$|[^\p{L}\d])").expect("valid marker pattern")
});

static MANGA_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[^\p{L}])(?:specials?|one[- ]?shot|extras?|art\s?collection|side\s?stor(?:y|ies)|bonus|omake|art\s?book)(?:$|[^\p{L}])",
    )
    .expect("valid manga keyword pattern")
});

static COMIC_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[^\p{L}])(?:specials?|annual|tpb|omnibus|compendium|fcbd|absolute|preview|one[- ]?shot|hors[- ]s[ée]rie|hs|ths)(?:$|[^\p{L}])",
    )
    .expect("valid comic keyword pattern")
});

/// Folder names that group specials.
const SPECIAL_FOLDERS: &[&str] = &["specials", "special", "extras", "extra", "omake", "bonus"];

fn keywords(library_type: LibraryType) -> &'static Regex {
    if library_type.is_comic() {
        &COMIC_KEYWORDS
    } else {
        &MANGA_KEYWORDS
    }
}

/// Whether `text` contains an `SP<n>` marker.
pub fn has_special_marker(text: &str) -> bool {
    MARKER.is_match(&text.replace('_', " "))
}

/// Index of the `SP<n>` marker in `text`, or 0 when there is none.
///
/// ```
/// use tankobon_parser::special::parse_special_index;
///
/// assert_eq!(parse_special_index("Some Series SP01"), 1);
/// assert_eq!(parse_special_index("Some Series"), 0);
/// ```
pub fn parse_special_index(text: &str) -> u32 {
    MARKER
        .captures(&text.replace('_', " "))
        .and_then(|caps| caps.name("index")?.as_str().parse().ok())
        .unwrap_or(0)
}

/// Whether `text` names a special by keyword for `library_type`.
pub fn has_special_keyword(text: &str, library_type: LibraryType) -> bool {
    keywords(library_type).is_match(&text.replace('_', " "))
}

/// Whether `folder` is a folder that conventionally holds specials.
pub fn is_special_folder(folder: &str) -> bool {
    let folder = folder.trim().to_lowercase();
    SPECIAL_FOLDERS.contains(&folder.as_str())
}

/// Decide whether a file is a special.
///
/// `filename` may carry its extension. `folder_name` is the folder the file
/// lives in, when known.
///
/// ```
/// use tankobon_parser::{special::is_special, LibraryType};
///
/// assert!(is_special("Some Series SP01.cbz", Some("Some Series"), LibraryType::Manga));
/// assert!(is_special("Berserk Omake.cbz", None, LibraryType::Manga));
/// assert!(!is_special("Berserk Omake c05.cbz", None, LibraryType::Manga));
/// assert!(is_special("Art.cbz", Some("Specials"), LibraryType::Manga));
/// ```
pub fn is_special(filename: &str, folder_name: Option<&str>, library_type: LibraryType) -> bool {
    let stem = strip_supported_extension(filename)
        .map(|(stem, _)| stem)
        .unwrap_or(filename);
    let has_chapter = !parse_chapter(stem, library_type).is_loose_leaf();
    if has_special_marker(stem) && !has_chapter {
        return true;
    }
    if has_chapter || !parse_volume(stem, library_type).is_loose_leaf() {
        return false;
    }
    has_special_keyword(stem, library_type) || folder_name.is_some_and(is_special_folder)
}

/// `text` with every special keyword of `library_type` removed.
pub(crate) fn strip_keywords(text: &str, library_type: LibraryType) -> String {
    let pattern = keywords(library_type);
    let mut out = text.to_string();
    // Adjacent keywords share a separator, so repeat until nothing matches.
    while pattern.is_match(&out) {
        out = pattern.replace_all(&out, " ").into_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker() {
        assert!(has_special_marker("Some Series SP01"));
        assert!(has_special_marker("Some_Series_sp2"));
        assert!(!has_special_marker("Spy x Family 01"));
        assert!(!has_special_marker("Wasp3"));
        assert_eq!(parse_special_index("Naruto - SP12 - Extra"), 12);
    }

    #[test]
    fn test_keywords_by_library() {
        assert!(has_special_keyword("Berserk Artbook", LibraryType::Manga));
        assert!(has_special_keyword("Vagabond One-Shot", LibraryType::Manga));
        assert!(!has_special_keyword("Batman Annual", LibraryType::Manga));
        assert!(has_special_keyword("Batman Annual", LibraryType::Comic));
        assert!(has_special_keyword("Saga TPB", LibraryType::ComicLegacy));
        assert!(!has_special_keyword("Bonuses of Life", LibraryType::Manga));
    }

    #[test]
    fn test_special_folder() {
        assert!(is_special_folder("Specials"));
        assert!(is_special_folder(" OMAKE "));
        assert!(!is_special_folder("Naruto"));
    }

    #[test]
    fn test_numbered_keyword_is_not_special() {
        assert!(!is_special("Naruto Extra v01", None, LibraryType::Manga));
        assert!(!is_special("Naruto c10", Some("Specials"), LibraryType::Manga));
    }

    #[test]
    fn test_marker_wins_over_volume() {
        assert!(is_special("Naruto v01 SP01", None, LibraryType::Manga));
    }

    #[test]
    fn test_chapter_beats_marker() {
        assert!(!is_special("Naruto c10 SP01.cbz", None, LibraryType::Manga));
        assert!(!is_special("Naruto Vol 1 Ch 3 SP2", None, LibraryType::Manga));
    }

    #[test]
    fn test_strip_keywords() {
        assert_eq!(
            strip_keywords("Naruto Specials Extras", LibraryType::Manga).trim(),
            "Naruto"
        );
        assert_eq!(strip_keywords("Batman Annual", LibraryType::Comic).trim(), "Batman");
    }
}
