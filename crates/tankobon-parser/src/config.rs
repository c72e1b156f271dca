//! Per-call parsing context.

use crate::model::{Format, LibraryType};

/// Library context a file is parsed under.
///
/// Use the builder pattern to create a context:
///
/// ```
/// use tankobon_parser::config::ParseContext;
/// use tankobon_parser::LibraryType;
///
/// let ctx = ParseContext::builder()
///     .library_root("/data/manga")
///     .library_type(LibraryType::Manga)
///     .build();
/// assert!(ctx.enable_metadata);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseContext {
    /// Root folder of the library the file belongs to.
    /// Folders between the root and the file are used as a fallback for the
    /// series name and numbering.
    pub library_root: Option<String>,

    /// Cataloguing convention of the library.
    /// Default: Manga
    pub library_type: LibraryType,

    /// Whether to read descriptive metadata embedded in books.
    /// Default: true
    pub enable_metadata: bool,

    /// Forces the format instead of deriving it from the extension.
    pub format_override: Option<Format>,
}

impl Default for ParseContext {
    fn default() -> Self {
        Self {
            library_root: None,
            library_type: LibraryType::default(),
            enable_metadata: true,
            format_override: None,
        }
    }
}

impl ParseContext {
    /// Create a new default context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context builder.
    pub fn builder() -> ParseContextBuilder {
        ParseContextBuilder::default()
    }

    /// The same context under a different library type.
    pub fn with_library_type(&self, library_type: LibraryType) -> Self {
        Self {
            library_type,
            ..self.clone()
        }
    }
}

/// Builder for `ParseContext`.
#[derive(Debug, Clone, Default)]
pub struct ParseContextBuilder {
    library_root: Option<String>,
    library_type: Option<LibraryType>,
    enable_metadata: Option<bool>,
    format_override: Option<Format>,
}

impl ParseContextBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the library root folder.
    pub fn library_root(mut self, root: impl Into<String>) -> Self {
        self.library_root = Some(root.into());
        self
    }

    /// Set the library type.
    ///
    /// Default: Manga
    pub fn library_type(mut self, library_type: LibraryType) -> Self {
        self.library_type = Some(library_type);
        self
    }

    /// Set whether embedded book metadata is read.
    ///
    /// When disabled, books are parsed from their file name only.
    ///
    /// Default: true
    pub fn enable_metadata(mut self, enabled: bool) -> Self {
        self.enable_metadata = Some(enabled);
        self
    }

    /// Force the format of every parsed file.
    pub fn format_override(mut self, format: Format) -> Self {
        self.format_override = Some(format);
        self
    }

    /// Build the context.
    pub fn build(self) -> ParseContext {
        ParseContext {
            library_root: self.library_root,
            library_type: self.library_type.unwrap_or_default(),
            enable_metadata: self.enable_metadata.unwrap_or(true),
            format_override: self.format_override,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = ParseContext::default();
        assert!(ctx.library_root.is_none());
        assert_eq!(ctx.library_type, LibraryType::Manga);
        assert!(ctx.enable_metadata);
        assert!(ctx.format_override.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let ctx = ParseContext::builder()
            .library_root("/books")
            .library_type(LibraryType::LightNovel)
            .enable_metadata(false)
            .format_override(Format::Pdf)
            .build();

        assert_eq!(ctx.library_root.as_deref(), Some("/books"));
        assert_eq!(ctx.library_type, LibraryType::LightNovel);
        assert!(!ctx.enable_metadata);
        assert_eq!(ctx.format_override, Some(Format::Pdf));
    }

    #[test]
    fn test_with_library_type() {
        let ctx = ParseContext::builder().library_root("/lib").build();
        let book = ctx.with_library_type(LibraryType::Book);
        assert_eq!(book.library_type, LibraryType::Book);
        assert_eq!(book.library_root, ctx.library_root);
    }
}
