//! EPUB parsing with metadata reconciliation.

use super::{BookMetadataExtractor, ParsingStrategy};
use crate::config::ParseContext;
use crate::format::{self, strip_supported_extension};
use crate::model::{EmbeddedMetadata, Format, LibraryType, ParseResult};
use crate::rules::{parse_chapter, parse_series, parse_volume};
use crate::special::{is_special, parse_special_index};
use std::sync::Arc;
use tankobon_common::paths::normalize_path;

/// Parses EPUB files.
///
/// With metadata enabled the book's own descriptive metadata is authoritative
/// and a book that cannot be read fails. Volume numbers that leak into the
/// series name are then reconciled against the title and a second opinion
/// from the injected `basic` strategy, run as a `Book` library.
pub struct BookParser {
    extractor: Arc<dyn BookMetadataExtractor>,
    basic: Arc<dyn ParsingStrategy>,
}

impl BookParser {
    pub fn new(extractor: Arc<dyn BookMetadataExtractor>, basic: Arc<dyn ParsingStrategy>) -> Self {
        Self { extractor, basic }
    }

    /// Minimal result from the file name alone; no folder fallback.
    fn from_filename(&self, path: &str, ctx: &ParseContext) -> Option<ParseResult> {
        let normalized = normalize_path(path);
        let filename = normalized.file_name();
        let (stem, _) = strip_supported_extension(filename)?;
        let lt = ctx.library_type;

        let mut result = ParseResult::new(normalized.as_str(), filename, Format::Epub);
        result.title = stem.trim().to_string();
        result.series = parse_series(stem, lt);
        result.volumes = parse_volume(stem, lt);
        result.chapters = parse_chapter(stem, lt);
        result.is_special = is_special(stem, None, lt);
        result.special_index = parse_special_index(stem);
        Some(result)
    }

    /// Fix series names that carry a volume number, like "Series Vol. 3".
    fn reconcile(
        &self,
        path: &str,
        ctx: &ParseContext,
        sidecar: Option<&EmbeddedMetadata>,
        result: ParseResult,
    ) -> ParseResult {
        let lt = ctx.library_type;
        let vol_from_series = parse_volume(&result.series, lt);
        if vol_from_series.is_loose_leaf() {
            return result;
        }
        let vol_from_title = parse_volume(&result.title, lt);
        let sidecar_has_volume = sidecar.is_some_and(EmbeddedMetadata::has_volume);

        if !sidecar_has_volume
            && !vol_from_title.is_loose_leaf()
            && (!vol_from_series.is_loose_leaf() || result.series.is_empty())
        {
            tracing::debug!(path, title = %result.title, "taking series and volume from title");
            return ParseResult {
                series: parse_series(&result.title, lt),
                volumes: vol_from_title,
                ..result
            };
        }

        let Some(second) = self
            .basic
            .parse(path, &ctx.with_library_type(LibraryType::Book), sidecar)
        else {
            return result;
        };
        tracing::debug!(path, second_series = %second.series, "merging second opinion");
        let mut merged = result.merge(&second);
        if parse_volume(&second.series, lt).is_loose_leaf() {
            merged.series = second.series;
        }
        merged
    }
}

impl ParsingStrategy for BookParser {
    fn is_applicable(&self, path: &str, _library_type: LibraryType) -> bool {
        format::is_epub(path)
    }

    fn parse(
        &self,
        path: &str,
        ctx: &ParseContext,
        sidecar: Option<&EmbeddedMetadata>,
    ) -> Option<ParseResult> {
        let mut result = if ctx.enable_metadata {
            match self.extractor.extract(path) {
                Some(result) => result,
                None => {
                    tracing::debug!(path, "no embedded book metadata");
                    return None;
                }
            }
        } else {
            self.from_filename(path, ctx)?
        };
        if let Some(format) = ctx.format_override {
            result.format = format;
        }

        result.embedded_metadata = sidecar.cloned();

        if let Some(meta) = sidecar {
            let series = meta.series.trim();
            if result.is_special
                && result.volumes.is_loose_leaf()
                && !series.is_empty()
                && series != result.series
            {
                tracing::debug!(path, series, "special takes sidecar series");
                result.series = series.to_string();
            }
        }

        let result = self.reconcile(path, ctx, sidecar, result);
        if result.is_valid() {
            Some(result)
        } else {
            tracing::debug!(path, "no series found");
            None
        }
    }
}
