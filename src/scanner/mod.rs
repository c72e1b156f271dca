//! Library scanner.
//!
//! Walks a configured library root, parses every supported file in parallel
//! and groups the results by series. A file that cannot be parsed is
//! recorded and never stops the scan.

use crate::config::LibraryConfig;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tankobon_metadata::{ComicInfoReader, EpubMetadataExtractor};
use tankobon_parser::{ParseContext, ParseEngine, ParseResult};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Parses library files with EPUB metadata and ComicInfo.xml sidecars.
pub struct Scanner {
    engine: ParseEngine,
    comic_info: ComicInfoReader,
    follow_symlinks: bool,
}

/// Outcome of scanning one library.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryReport {
    pub library: String,
    pub root: PathBuf,
    /// Parsed files keyed by series name.
    pub series: BTreeMap<String, Vec<ParseResult>>,
    /// Supported files that could not be catalogued.
    pub failed: Vec<String>,
}

impl LibraryReport {
    pub fn file_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }
}

impl Scanner {
    pub fn new(follow_symlinks: bool) -> Self {
        Self {
            engine: ParseEngine::with_defaults(Arc::new(EpubMetadataExtractor::default())),
            comic_info: ComicInfoReader::default(),
            follow_symlinks,
        }
    }

    /// Parse one file. Archives get their ComicInfo.xml as sidecar when
    /// metadata is enabled.
    pub fn parse_file(&self, path: &str, ctx: &ParseContext) -> Option<ParseResult> {
        let sidecar = if ctx.enable_metadata
            && ComicInfoReader::can_read(path)
            && Path::new(path).is_file()
        {
            self.comic_info.read(path)
        } else {
            None
        };
        self.engine.parse(path, ctx, sidecar.as_ref())
    }

    /// Supported files under `root`, sorted by path.
    pub fn collect_files(&self, root: &Path, ctx: &ParseContext) -> Vec<String> {
        let mut files: Vec<String> = WalkDir::new(root)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Failed to read directory entry under {:?}: {}", root, e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.path().to_string_lossy().into_owned())
            .filter(|path| {
                let supported = self.engine.is_supported(path, ctx);
                if !supported {
                    debug!("Skipping unsupported file: {}", path);
                }
                supported
            })
            .collect();
        files.sort();
        files
    }

    /// Scan a whole library.
    pub fn scan_library(&self, library: &LibraryConfig) -> LibraryReport {
        info!("Scanning library '{}' at {:?}", library.name, library.root);
        let ctx = library.context();
        let files = self.collect_files(&library.root, &ctx);

        let parsed: Vec<(String, Option<ParseResult>)> = files
            .into_par_iter()
            .map(|path| {
                let result = self.parse_file(&path, &ctx);
                (path, result)
            })
            .collect();

        let mut report = LibraryReport {
            library: library.name.clone(),
            root: library.root.clone(),
            series: BTreeMap::new(),
            failed: Vec::new(),
        };
        for (path, result) in parsed {
            match result {
                Some(result) => report
                    .series
                    .entry(result.series.clone())
                    .or_default()
                    .push(result),
                None => {
                    debug!("Could not parse {}", path);
                    report.failed.push(path);
                }
            }
        }

        info!(
            "Scan complete: {} files in {} series, {} failed",
            report.file_count(),
            report.series.len(),
            report.failed.len()
        );
        report
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(false)
    }
}
