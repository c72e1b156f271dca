//! Data model types for parsed library files.
//!
//! This module contains the types describing the bibliographic identity the
//! engine derives for one file: its format, the library context it was parsed
//! under, volume/chapter numbering and the optional sidecar metadata record.

mod format;
mod library_type;
mod metadata;
mod numbering;
mod result;

pub use format::Format;
pub use library_type::LibraryType;
pub use metadata::EmbeddedMetadata;
pub use numbering::{ChapterToken, Numbering, VolumeToken, LOOSE_LEAF, LOOSE_LEAF_NUMBER};
pub use result::ParseResult;

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}
