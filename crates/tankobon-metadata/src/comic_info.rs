//! ComicInfo.xml sidecar reader.
//!
//! Comic and manga archives often carry a `ComicInfo.xml` entry (the format
//! popularised by ComicRack). Its fields feed the parser as sidecar
//! overrides.

use crate::archive::{self, entry_file_name};
use crate::error::{MetadataError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;
use std::sync::Arc;
use tankobon_common::{FileSystem, StdFileSystem};
use tankobon_parser::EmbeddedMetadata;

const COMIC_INFO: &str = "ComicInfo.xml";

/// Archive extensions the reader can open.
const ZIP_EXTENSIONS: &[&str] = &["cbz", "zip"];

/// Reads `ComicInfo.xml` out of zip-based comic archives.
pub struct ComicInfoReader {
    fs: Arc<dyn FileSystem>,
}

impl ComicInfoReader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Whether `path` is an archive this reader can open.
    pub fn can_read(path: &str) -> bool {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ZIP_EXTENSIONS.iter().any(|z| ext.eq_ignore_ascii_case(z)))
    }

    /// Sidecar metadata for the archive at `path`.
    ///
    /// Archives without a `ComicInfo.xml` entry, other archive formats and
    /// unreadable or malformed files all yield `None`.
    pub fn read(&self, path: &str) -> Option<EmbeddedMetadata> {
        match self.try_read(path) {
            Ok(metadata) => Some(metadata),
            Err(MetadataError::MissingEntry(_)) => {
                tracing::trace!(path, "no ComicInfo.xml");
                None
            }
            Err(MetadataError::Unsupported(ext)) => {
                tracing::trace!(path, %ext, "archive format has no ComicInfo reader");
                None
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "failed to read ComicInfo.xml");
                None
            }
        }
    }

    /// Like [`ComicInfoReader::read`] but reports why nothing was read.
    pub fn try_read(&self, path: &str) -> Result<EmbeddedMetadata> {
        if !Self::can_read(path) {
            let ext = Path::new(path)
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(MetadataError::Unsupported(ext));
        }
        let bytes = self.fs.read(Path::new(path))?;
        let mut archive = archive::open(&bytes)?;
        let xml = archive::read_entry(&mut archive, COMIC_INFO, |name| {
            entry_file_name(name).eq_ignore_ascii_case(COMIC_INFO)
        })?;
        parse_comic_info(&xml)
    }
}

impl Default for ComicInfoReader {
    fn default() -> Self {
        Self::new(Arc::new(StdFileSystem))
    }
}

/// Parse a `ComicInfo.xml` document.
///
/// Element names are matched case-insensitively. Unknown elements are
/// ignored, so are nested ones such as `<Pages>`.
pub fn parse_comic_info(xml: &str) -> Result<EmbeddedMetadata> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut metadata = EmbeddedMetadata::default();
    let mut saw_root = false;
    let mut depth = 0usize;
    let mut field: Option<String> = None;
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_lowercase();
                if depth == 1 {
                    if name != "comicinfo" {
                        return Err(MetadataError::InvalidDocument(format!(
                            "unexpected root element <{}>",
                            name
                        )));
                    }
                    saw_root = true;
                } else if depth == 2 {
                    field = Some(name);
                    text.clear();
                }
            }
            Event::Empty(e) if depth == 0 => {
                if !e.local_name().as_ref().eq_ignore_ascii_case(b"comicinfo") {
                    return Err(MetadataError::InvalidDocument("unexpected root element".into()));
                }
                saw_root = true;
            }
            Event::Text(e) if depth == 2 && field.is_some() => {
                text.push_str(&e.unescape()?);
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some(name) = field.take() {
                        set_field(&mut metadata, &name, std::mem::take(&mut text));
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(MetadataError::InvalidDocument("missing <ComicInfo> root".into()));
    }
    Ok(metadata)
}

fn set_field(metadata: &mut EmbeddedMetadata, name: &str, value: String) {
    let value = value.trim().to_string();
    match name {
        "series" => metadata.series = value,
        "localizedseries" => metadata.localized_series = value,
        "title" => metadata.title = value,
        "number" => metadata.number = value,
        "volume" => metadata.volume = value,
        "summary" => metadata.summary = value,
        "year" => metadata.year = value.parse::<u16>().ok().filter(|year| *year > 0),
        "writer" => metadata.writer = value,
        "publisher" => metadata.publisher = value,
        "genre" => metadata.genre = value,
        "languageiso" => metadata.language_iso = value,
        "format" => metadata.format = value,
        _ => {}
    }
}
