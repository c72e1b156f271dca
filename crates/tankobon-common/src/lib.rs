//! Tankobon-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across tankobon:
//!
//! - **Path Utilities**: Separator normalisation and folder walking up to a library root
//! - **File System**: The [`FileSystem`] seam the parsing engine and metadata readers go through
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use tankobon_common::paths::normalize_path;
//! use tankobon_common::{Error, Result};
//!
//! let path = normalize_path(r"C:\Manga\Naruto\Naruto v01.cbz");
//! assert_eq!(path.as_str(), "c:/Manga/Naruto/Naruto v01.cbz");
//! assert_eq!(path.file_name(), "Naruto v01.cbz");
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("ComicInfo.xml"))
//! }
//! ```

pub mod error;
pub mod fs;
pub mod paths;

pub use error::{Error, Result};
pub use fs::{FileSystem, MemoryFileSystem, StdFileSystem};
