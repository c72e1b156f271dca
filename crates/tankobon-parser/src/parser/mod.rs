//! Parsing strategies.
//!
//! A strategy claims the files it can handle through `is_applicable` and turns
//! a path plus library context into a [`ParseResult`]. [`BasicParser`] works
//! from the file name and folders alone; [`BookParser`] reads EPUB metadata
//! first and reconciles it with a second opinion from a basic parser.

mod basic;
mod book;

pub use basic::BasicParser;
pub use book::BookParser;

use crate::config::ParseContext;
use crate::model::{EmbeddedMetadata, LibraryType, ParseResult};

/// A way of deriving the bibliographic identity of a file.
pub trait ParsingStrategy: Send + Sync {
    /// Whether this strategy handles `path` in a library of `library_type`.
    fn is_applicable(&self, path: &str, library_type: LibraryType) -> bool;

    /// Parse `path`. `None` means the file could not be catalogued.
    fn parse(
        &self,
        path: &str,
        ctx: &ParseContext,
        sidecar: Option<&EmbeddedMetadata>,
    ) -> Option<ParseResult>;
}

/// Reads the descriptive metadata stored inside a book.
pub trait BookMetadataExtractor: Send + Sync {
    /// Initial result for the book at `path`, or `None` when it cannot be read.
    fn extract(&self, path: &str) -> Option<ParseResult>;
}
