use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tankobon_parser::{LibraryType, ParseContext};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub libraries: Vec<LibraryConfig>,
}

impl Config {
    /// Library with the given name (case-insensitive).
    pub fn library(&self, name: &str) -> Option<&LibraryConfig> {
        self.libraries
            .iter()
            .find(|library| library.name.eq_ignore_ascii_case(name))
    }

    /// Library whose root contains `path`. The deepest root wins.
    pub fn library_for(&self, path: &std::path::Path) -> Option<&LibraryConfig> {
        self.libraries
            .iter()
            .filter(|library| path.starts_with(&library.root))
            .max_by_key(|library| library.root.components().count())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Worker threads for parsing (0 = rayon default)
    #[serde(default)]
    pub threads: usize,

    /// Follow symbolic links while walking library roots
    #[serde(default)]
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    pub name: String,

    pub root: PathBuf,

    #[serde(default)]
    pub library_type: LibraryType,

    /// Read EPUB metadata and ComicInfo.xml sidecars
    #[serde(default = "default_enable_metadata")]
    pub enable_metadata: bool,
}

fn default_enable_metadata() -> bool {
    true
}

impl LibraryConfig {
    /// Parse context for files under this library.
    pub fn context(&self) -> ParseContext {
        ParseContext::builder()
            .library_root(self.root.to_string_lossy())
            .library_type(self.library_type)
            .enable_metadata(self.enable_metadata)
            .build()
    }
}
