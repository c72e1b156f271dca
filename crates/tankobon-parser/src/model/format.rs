//! File format enum.

use super::ParseError;

/// Coarse content format of a library file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    /// Comic/manga archive (cbz, zip, rar, 7z, ...)
    #[default]
    Archive,
    /// EPUB book
    Epub,
    /// PDF document
    Pdf,
    /// Loose image file
    Image,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Archive => write!(f, "Archive"),
            Format::Epub => write!(f, "Epub"),
            Format::Pdf => write!(f, "Pdf"),
            Format::Image => write!(f, "Image"),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "archive" => Ok(Format::Archive),
            "epub" => Ok(Format::Epub),
            "pdf" => Ok(Format::Pdf),
            "image" => Ok(Format::Image),
            _ => Err(ParseError(format!("invalid format: {}", s))),
        }
    }
}
