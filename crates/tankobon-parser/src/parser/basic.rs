//! File-name and folder based parsing.

use super::ParsingStrategy;
use crate::config::ParseContext;
use crate::format::{self, detect_format, strip_supported_extension};
use crate::model::{EmbeddedMetadata, Format, LibraryType, Numbering, ParseResult};
use crate::rules::{
    clean_title, is_numbering_only, match_series, parse_chapter, parse_edition, parse_series,
    parse_volume, strip_edition,
};
use crate::special::{has_special_marker, is_special, is_special_folder, parse_special_index};
use tankobon_common::paths::normalize_path;

/// Parses any supported file from its name, falling back to the folders
/// between the library root and the file.
///
/// ```
/// use tankobon_parser::{BasicParser, ParseContext, ParsingStrategy};
///
/// let result = BasicParser::new()
///     .parse("/manga/Naruto/Naruto v01.cbz", &ParseContext::default(), None)
///     .unwrap();
/// assert_eq!(result.series, "Naruto");
/// assert_eq!(result.volumes.to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicParser;

impl BasicParser {
    pub fn new() -> Self {
        Self
    }
}

impl ParsingStrategy for BasicParser {
    fn is_applicable(&self, path: &str, _library_type: LibraryType) -> bool {
        format::is_supported(path) && !format::is_epub(path)
    }

    fn parse(
        &self,
        path: &str,
        ctx: &ParseContext,
        sidecar: Option<&EmbeddedMetadata>,
    ) -> Option<ParseResult> {
        let normalized = normalize_path(path);
        let filename = normalized.file_name();
        let Some((stem, extension)) = strip_supported_extension(filename) else {
            tracing::debug!(path, "unsupported extension");
            return None;
        };
        let lt = ctx.library_type;
        let format = ctx
            .format_override
            .unwrap_or_else(|| detect_format(&extension));

        let mut result = ParseResult::new(normalized.as_str(), filename, format);
        result.title = stem.trim().to_string();
        result.volumes = parse_volume(stem, lt);
        result.chapters = parse_chapter(stem, lt);
        let mut series = match_series(stem, lt).unwrap_or_default();

        let folders = normalized.folders_till_root(ctx.library_root.as_deref());
        if series.is_empty() || format == Format::Image {
            let hint = FolderHint::collect(&folders, lt);
            tracing::debug!(path, ?hint, "using folder fallback");
            if result.volumes.is_loose_leaf() {
                result.volumes = hint.volumes;
            }
            if result.chapters.is_loose_leaf() {
                result.chapters = hint.chapters;
            }
            if let Some(folder_series) = hint.series {
                series = folder_series;
            }
        }

        if let Some(edition) = parse_edition(stem) {
            series = strip_edition(&series);
            result.edition = edition;
        }

        if has_special_marker(stem) && parse_chapter(stem, lt).is_loose_leaf() {
            result.is_special = true;
            result.special_index = parse_special_index(stem);
            result.volumes = Numbering::LooseLeaf;
            result.chapters = Numbering::LooseLeaf;
            if ctx.library_root.is_some() {
                if let Some(folder_series) = FolderHint::collect(&folders, lt).series {
                    series = folder_series;
                }
            }
        } else if is_special(stem, folders.first().map(String::as_str), lt) {
            result.is_special = true;
        }

        if series.is_empty() {
            series = strip_edition(&clean_title(stem, lt));
        }
        result.series = strip_pdf_suffix(&series).trim().to_string();
        result.embedded_metadata = sidecar.cloned();

        if result.is_valid() {
            Some(result)
        } else {
            tracing::debug!(path, "no series found");
            None
        }
    }
}

/// What the folders above a file say about it.
#[derive(Debug, Default)]
struct FolderHint {
    series: Option<String>,
    volumes: Numbering,
    chapters: Numbering,
}

impl FolderHint {
    /// Walk `folders` nearest first up to the series folder: the nearest one
    /// that is neither a specials folder nor a bare `Vol 01`/`Chapter 3`
    /// folder. Numbering is only taken from folders below it.
    fn collect(folders: &[String], library_type: LibraryType) -> Self {
        let mut hint = FolderHint::default();
        for folder in folders {
            if is_special_folder(folder) {
                continue;
            }
            if is_numbering_only(folder, library_type) {
                if hint.volumes.is_loose_leaf() {
                    hint.volumes = parse_volume(folder, library_type);
                }
                if hint.chapters.is_loose_leaf() {
                    hint.chapters = parse_chapter(folder, library_type);
                }
                continue;
            }
            let series = parse_series(folder, library_type);
            if !series.is_empty() {
                if hint.volumes.is_loose_leaf() {
                    hint.volumes = parse_volume(folder, library_type);
                }
                hint.series = Some(series);
                break;
            }
        }
        hint
    }
}

fn strip_pdf_suffix(series: &str) -> &str {
    let len = series.len();
    if len >= 4 && series.is_char_boundary(len - 4) && series[len - 4..].eq_ignore_ascii_case(".pdf") {
        &series[..len - 4]
    } else {
        series
    }
}
