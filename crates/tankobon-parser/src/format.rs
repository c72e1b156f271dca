//! Supported extensions and format detection.

use crate::model::Format;
use phf::phf_map;

/// Allow-listed extensions (lower case, without the dot) and their format.
static EXTENSIONS: phf::Map<&'static str, Format> = phf_map! {
    "cbz" => Format::Archive,
    "zip" => Format::Archive,
    "rar" => Format::Archive,
    "cbr" => Format::Archive,
    "7z" => Format::Archive,
    "7zip" => Format::Archive,
    "cb7" => Format::Archive,
    "cbt" => Format::Archive,
    "tar.gz" => Format::Archive,
    "epub" => Format::Epub,
    "pdf" => Format::Pdf,
    "png" => Format::Image,
    "jpg" => Format::Image,
    "jpeg" => Format::Image,
    "webp" => Format::Image,
    "gif" => Format::Image,
    "avif" => Format::Image,
};

const COMPOUND_EXTENSIONS: &[&str] = &["tar.gz"];

/// Split a file name into its stem and supported extension.
///
/// The extension is returned lower-cased. Unsupported extensions, names
/// without an extension and names with an empty stem yield `None`.
///
/// ```
/// use tankobon_parser::format::strip_supported_extension;
///
/// assert_eq!(strip_supported_extension("Naruto v01.CBZ"), Some(("Naruto v01", "cbz".to_string())));
/// assert_eq!(strip_supported_extension("Saga 001.tar.gz"), Some(("Saga 001", "tar.gz".to_string())));
/// assert_eq!(strip_supported_extension("notes.txt"), None);
/// ```
pub fn strip_supported_extension(filename: &str) -> Option<(&str, String)> {
    let lower = filename.to_ascii_lowercase();
    for compound in COMPOUND_EXTENSIONS {
        let suffix = format!(".{}", compound);
        if lower.ends_with(&suffix) {
            let stem = &filename[..filename.len() - suffix.len()];
            return non_empty(stem).map(|stem| (stem, compound.to_string()));
        }
    }

    let idx = filename.rfind('.')?;
    let extension = filename[idx + 1..].to_ascii_lowercase();
    if !EXTENSIONS.contains_key(extension.as_str()) {
        return None;
    }
    non_empty(&filename[..idx]).map(|stem| (stem, extension))
}

fn non_empty(stem: &str) -> Option<&str> {
    if stem.trim().is_empty() {
        None
    } else {
        Some(stem)
    }
}

/// Format for an extension. Unknown extensions are treated as archives.
pub fn detect_format(extension: &str) -> Format {
    let extension = extension.trim_start_matches('.').to_ascii_lowercase();
    EXTENSIONS
        .get(extension.as_str())
        .copied()
        .unwrap_or(Format::Archive)
}

fn format_of(path: &str) -> Option<Format> {
    let filename = path.rsplit(['/', '\\']).next().unwrap_or(path);
    strip_supported_extension(filename).map(|(_, extension)| detect_format(&extension))
}

/// Whether `path` ends in an allow-listed extension.
pub fn is_supported(path: &str) -> bool {
    format_of(path).is_some()
}

pub fn is_epub(path: &str) -> bool {
    format_of(path) == Some(Format::Epub)
}

pub fn is_pdf(path: &str) -> bool {
    format_of(path) == Some(Format::Pdf)
}

pub fn is_image(path: &str) -> bool {
    format_of(path) == Some(Format::Image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_is_case_insensitive() {
        assert_eq!(
            strip_supported_extension("One Piece c0982.CbZ"),
            Some(("One Piece c0982", "cbz".to_string()))
        );
        assert_eq!(
            strip_supported_extension("Dune.EPUB"),
            Some(("Dune", "epub".to_string()))
        );
    }

    #[test]
    fn test_strip_rejects_unsupported() {
        assert_eq!(strip_supported_extension("README"), None);
        assert_eq!(strip_supported_extension("movie.mkv"), None);
        assert_eq!(strip_supported_extension(".cbz"), None);
        assert_eq!(strip_supported_extension("backup.gz"), None);
    }

    #[test]
    fn test_strip_keeps_inner_dots() {
        assert_eq!(
            strip_supported_extension("Vol. 1.cbz"),
            Some(("Vol. 1", "cbz".to_string()))
        );
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("cbr"), Format::Archive);
        assert_eq!(detect_format("tar.gz"), Format::Archive);
        assert_eq!(detect_format(".EPUB"), Format::Epub);
        assert_eq!(detect_format("pdf"), Format::Pdf);
        assert_eq!(detect_format("webp"), Format::Image);
        assert_eq!(detect_format("unknown"), Format::Archive);
    }

    #[test]
    fn test_predicates() {
        assert!(is_supported("/lib/a/b.cb7"));
        assert!(!is_supported("/lib/a/b.txt"));
        assert!(is_epub(r"C:\Books\Dune.epub"));
        assert!(!is_epub("/lib/x.cbz"));
        assert!(is_pdf("/lib/x.PDF"));
        assert!(is_image("/lib/x/001.jpeg"));
        assert!(!is_image("/lib/x/001.cbz"));
    }
}
