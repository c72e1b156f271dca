//! Tankobon-Metadata: embedded metadata readers.
//!
//! - [`EpubMetadataExtractor`]: the [`BookMetadataExtractor`] behind the book
//!   parser, reading title and series information from EPUB package documents
//! - [`ComicInfoReader`]: `ComicInfo.xml` sidecars inside zip/cbz archives,
//!   returned as [`EmbeddedMetadata`] for the engine's sidecar overrides
//!
//! Both go through a [`tankobon_common::FileSystem`] and never fail loudly:
//! unreadable files are logged and reported as "no metadata".
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use tankobon_metadata::{ComicInfoReader, EpubMetadataExtractor};
//! use tankobon_parser::{LibraryType, ParseContext, ParseEngine};
//!
//! let engine = ParseEngine::with_defaults(Arc::new(EpubMetadataExtractor::default()));
//! let ctx = ParseContext::builder()
//!     .library_root("/comics")
//!     .library_type(LibraryType::Comic)
//!     .build();
//!
//! let path = "/comics/Batman/Batman 001.cbz";
//! let sidecar = ComicInfoReader::default().read(path);
//! let result = engine.parse(path, &ctx, sidecar.as_ref());
//! ```
//!
//! [`BookMetadataExtractor`]: tankobon_parser::BookMetadataExtractor
//! [`EmbeddedMetadata`]: tankobon_parser::EmbeddedMetadata

mod archive;
pub mod comic_info;
pub mod epub;
pub mod error;

pub use comic_info::{parse_comic_info, ComicInfoReader};
pub use epub::{read_series_meta, EpubInfo, EpubMetadataExtractor, SeriesMeta};
pub use error::{MetadataError, Result};
