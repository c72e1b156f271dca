//! Error types for metadata reading.

use std::io;
use thiserror::Error;

/// Errors raised while reading book or archive metadata.
///
/// These never reach the parsing engine: the public readers log them and
/// report "no metadata" instead.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// I/O error while reading an archive entry.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file could not be loaded through the file system.
    #[error(transparent)]
    Common(#[from] tankobon_common::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML parsing error
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The EPUB container could not be opened.
    #[error("EPUB error: {0}")]
    Epub(String),

    /// A required entry is missing from the archive.
    #[error("Missing required file: {0}")]
    MissingEntry(String),

    /// The document does not have the expected structure.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The archive format has no reader.
    #[error("Unsupported archive: {0}")]
    Unsupported(String),
}

/// Result type for metadata operations
pub type Result<T> = std::result::Result<T, MetadataError>;
