//! # tankobon-parser
//!
//! Derives the bibliographic identity of manga, comic and book files.
//!
//! Given a path and the library it lives in, the engine works out the series
//! name, volume and chapter numbers, the content format and whether the file
//! is a special (bonus content). Files that cannot be catalogued yield `None`;
//! malformed input never raises an error.
//!
//! ## Quick Start
//!
//! ```
//! use tankobon_parser::{parse, LibraryType};
//!
//! let result = parse("/manga/Naruto/Naruto v01.cbz", LibraryType::Manga).unwrap();
//! assert_eq!(result.series, "Naruto");
//! assert_eq!(result.volumes.to_string(), "1");
//! assert!(result.chapters.is_loose_leaf());
//! ```
//!
//! ## Library Context
//!
//! ```
//! use tankobon_parser::{ParseContext, ParseEngine, LibraryType};
//!
//! let ctx = ParseContext::builder()
//!     .library_root("/manga")
//!     .library_type(LibraryType::Manga)
//!     .build();
//!
//! let engine = ParseEngine::basic();
//! let result = engine.parse("/manga/Berserk/Vol 02/001.cbz", &ctx, None).unwrap();
//! assert_eq!(result.series, "Berserk");
//! assert_eq!(result.volumes.to_string(), "2");
//! ```

pub mod config;
pub mod engine;
pub mod format;
pub mod model;
pub mod overrides;
pub mod rules;
pub mod special;

mod parser;

// Re-export main types for convenience
pub use config::{ParseContext, ParseContextBuilder};
pub use engine::ParseEngine;
pub use model::{
    ChapterToken, EmbeddedMetadata, Format, LibraryType, Numbering, ParseError, ParseResult,
    VolumeToken, LOOSE_LEAF, LOOSE_LEAF_NUMBER,
};
pub use parser::{BasicParser, BookMetadataExtractor, BookParser, ParsingStrategy};

/// Parse a non-EPUB file name with the basic parser and no library root.
///
/// For EPUB files, library roots and sidecar metadata use [`ParseEngine`].
pub fn parse(path: &str, library_type: LibraryType) -> Option<ParseResult> {
    let ctx = ParseContext::builder().library_type(library_type).build();
    BasicParser::new().parse(path, &ctx, None)
}
