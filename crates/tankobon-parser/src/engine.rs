//! Strategy dispatch.

use crate::config::ParseContext;
use crate::format;
use crate::model::{EmbeddedMetadata, ParseResult};
use crate::overrides::apply_sidecar;
use crate::parser::{BasicParser, BookMetadataExtractor, BookParser, ParsingStrategy};
use std::sync::Arc;

/// Picks the first applicable strategy for a file, runs it and applies
/// sidecar overrides.
///
/// The engine holds no per-call state; one instance can be shared by any
/// number of threads.
///
/// ```
/// use tankobon_parser::{ParseContext, ParseEngine};
///
/// let engine = ParseEngine::basic();
/// let result = engine.parse("/manga/One Piece c0982.cbz", &ParseContext::default(), None).unwrap();
/// assert_eq!(result.series, "One Piece");
/// assert!(engine.parse("/manga/notes.txt", &ParseContext::default(), None).is_none());
/// ```
pub struct ParseEngine {
    strategies: Vec<Arc<dyn ParsingStrategy>>,
}

impl ParseEngine {
    /// Engine over `strategies`, tried in order.
    pub fn new(strategies: Vec<Arc<dyn ParsingStrategy>>) -> Self {
        Self { strategies }
    }

    /// Engine with only the file-name parser. EPUB files are not handled.
    pub fn basic() -> Self {
        Self::new(vec![Arc::new(BasicParser::new())])
    }

    /// Engine with the book parser (backed by `extractor`) ahead of the
    /// file-name parser.
    pub fn with_defaults(extractor: Arc<dyn BookMetadataExtractor>) -> Self {
        let basic: Arc<dyn ParsingStrategy> = Arc::new(BasicParser::new());
        let book: Arc<dyn ParsingStrategy> = Arc::new(BookParser::new(extractor, Arc::clone(&basic)));
        Self::new(vec![book, basic])
    }

    /// First strategy that claims `path`.
    pub fn strategy_for(&self, path: &str, ctx: &ParseContext) -> Option<&Arc<dyn ParsingStrategy>> {
        self.strategies
            .iter()
            .find(|strategy| strategy.is_applicable(path, ctx.library_type))
    }

    /// Whether `path` has an allow-listed extension and a strategy for it.
    pub fn is_supported(&self, path: &str, ctx: &ParseContext) -> bool {
        format::is_supported(path) && self.strategy_for(path, ctx).is_some()
    }

    /// Parse one file. `None` means no strategy applies or the file could not
    /// be catalogued.
    pub fn parse(
        &self,
        path: &str,
        ctx: &ParseContext,
        sidecar: Option<&EmbeddedMetadata>,
    ) -> Option<ParseResult> {
        let Some(strategy) = self.strategy_for(path, ctx) else {
            tracing::trace!(path, "no applicable strategy");
            return None;
        };
        let result = strategy.parse(path, ctx, sidecar)?;
        let result = match sidecar {
            Some(sidecar) => apply_sidecar(result, sidecar),
            None => result,
        };
        if result.is_valid() {
            Some(result)
        } else {
            tracing::debug!(path, "result has no series after overrides");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Format, LibraryType, Numbering};

    struct NoMetadata;

    impl BookMetadataExtractor for NoMetadata {
        fn extract(&self, _path: &str) -> Option<ParseResult> {
            None
        }
    }

    #[test]
    fn test_strategy_selection() {
        let engine = ParseEngine::with_defaults(Arc::new(NoMetadata));
        let ctx = ParseContext::default();
        assert!(engine.is_supported("/a/b.epub", &ctx));
        assert!(engine.is_supported("/a/b.cbz", &ctx));
        assert!(!engine.is_supported("/a/b.mobi", &ctx));
        assert!(engine.strategy_for("/a/b.mobi", &ctx).is_none());
    }

    #[test]
    fn test_basic_engine_skips_epub() {
        let engine = ParseEngine::basic();
        let ctx = ParseContext::builder().enable_metadata(false).build();
        assert!(!engine.is_supported("/books/Dune.epub", &ctx));
        assert!(engine.parse("/books/Dune.epub", &ctx, None).is_none());
    }

    #[test]
    fn test_epub_routes_to_book_parser() {
        let engine = ParseEngine::with_defaults(Arc::new(NoMetadata));
        let on = ParseContext::builder().library_type(LibraryType::Book).build();
        assert!(engine.parse("/books/Dune Vol. 1.epub", &on, None).is_none());

        let off = ParseContext::builder()
            .library_type(LibraryType::Book)
            .enable_metadata(false)
            .build();
        let result = engine.parse("/books/Dune Vol. 1.epub", &off, None).unwrap();
        assert_eq!(result.series, "Dune");
        assert_eq!(result.format, Format::Epub);
    }

    #[test]
    fn test_sidecar_overrides_apply() {
        let engine = ParseEngine::basic();
        let sidecar = EmbeddedMetadata::new().with_volume("7").with_number("60");
        let result = engine
            .parse("/manga/Naruto v01.cbz", &ParseContext::default(), Some(&sidecar))
            .unwrap();
        assert_eq!(result.volumes, Numbering::from_token("7"));
        assert_eq!(result.chapters, Numbering::from_token("60"));
        assert_eq!(result.embedded_metadata, Some(sidecar));
    }
}
