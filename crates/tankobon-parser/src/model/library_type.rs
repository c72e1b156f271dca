//! Library type enum.

use super::ParseError;

/// Cataloguing convention of the library a file lives in.
///
/// The same raw text is read differently depending on the library: a bare
/// `v1` is a volume marker in a manga library but is ignored in book
/// libraries, where prose titles often contain such tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LibraryType {
    /// Manga, manhwa and manhua
    #[default]
    Manga,
    /// Western comics
    Comic,
    /// Generic books (epub/pdf)
    Book,
    /// Light novels
    LightNovel,
    /// Loose image collections
    Image,
    /// Comics using the older manga-style conventions
    ComicLegacy,
}

impl LibraryType {
    /// All library types, in declaration order.
    pub const ALL: [LibraryType; 6] = [
        LibraryType::Manga,
        LibraryType::Comic,
        LibraryType::Book,
        LibraryType::LightNovel,
        LibraryType::Image,
        LibraryType::ComicLegacy,
    ];

    /// Whether comic conventions (issues, tomes, annuals) apply.
    pub fn is_comic(self) -> bool {
        matches!(self, LibraryType::Comic | LibraryType::ComicLegacy)
    }

    /// Whether titles are prose, so bare numeric tokens are not trusted.
    pub fn is_prose(self) -> bool {
        matches!(self, LibraryType::Book | LibraryType::LightNovel)
    }
}

impl std::fmt::Display for LibraryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryType::Manga => write!(f, "manga"),
            LibraryType::Comic => write!(f, "comic"),
            LibraryType::Book => write!(f, "book"),
            LibraryType::LightNovel => write!(f, "light-novel"),
            LibraryType::Image => write!(f, "image"),
            LibraryType::ComicLegacy => write!(f, "comic-legacy"),
        }
    }
}

impl std::str::FromStr for LibraryType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "manga" => Ok(LibraryType::Manga),
            "comic" | "comics" => Ok(LibraryType::Comic),
            "book" | "books" => Ok(LibraryType::Book),
            "light-novel" | "lightnovel" | "ln" => Ok(LibraryType::LightNovel),
            "image" | "images" => Ok(LibraryType::Image),
            "comic-legacy" | "comiclegacy" => Ok(LibraryType::ComicLegacy),
            _ => Err(ParseError(format!("invalid library type: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_type_display_fromstr_roundtrip() {
        for variant in LibraryType::ALL {
            let parsed: LibraryType = variant.to_string().parse().expect("should parse");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn library_type_aliases() {
        assert_eq!("LightNovel".parse::<LibraryType>().unwrap(), LibraryType::LightNovel);
        assert_eq!("light_novel".parse::<LibraryType>().unwrap(), LibraryType::LightNovel);
        assert_eq!("Comic Legacy".parse::<LibraryType>().unwrap(), LibraryType::ComicLegacy);
        assert!("audiobook".parse::<LibraryType>().is_err());
    }

    #[test]
    fn library_type_groups() {
        assert!(LibraryType::Comic.is_comic());
        assert!(LibraryType::ComicLegacy.is_comic());
        assert!(!LibraryType::Manga.is_comic());
        assert!(LibraryType::Book.is_prose());
        assert!(LibraryType::LightNovel.is_prose());
        assert!(!LibraryType::Image.is_prose());
        assert_eq!(LibraryType::default(), LibraryType::Manga);
    }
}
