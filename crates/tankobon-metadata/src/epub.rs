//! EPUB descriptive metadata.
//!
//! Dublin Core fields come from the `epub` crate. Series information lives in
//! `<meta>` elements the crate does not model, so the package document is
//! scanned for it directly:
//!
//! - calibre: `<meta name="calibre:series" content="..."/>` and
//!   `<meta name="calibre:series_index" content="..."/>`
//! - EPUB 3: `<meta property="belongs-to-collection" id="c1">...</meta>` refined
//!   by `<meta refines="#c1" property="group-position">...</meta>`

use crate::archive;
use crate::error::{MetadataError, Result};
use epub::doc::EpubDoc;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tankobon_common::paths::normalize_path;
use tankobon_common::{FileSystem, StdFileSystem};
use tankobon_parser::format::strip_supported_extension;
use tankobon_parser::special::{has_special_marker, parse_special_index};
use tankobon_parser::{BookMetadataExtractor, Format, Numbering, ParseResult};

/// Series membership declared in a package document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesMeta {
    pub name: Option<String>,
    pub index: Option<String>,
}

/// Descriptive metadata of one EPUB.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpubInfo {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub language: Option<String>,
    pub publisher: Option<String>,
    pub description: Option<String>,
    pub series: SeriesMeta,
}

impl EpubInfo {
    /// Identity of the book at `path` as the metadata declares it.
    ///
    /// Without series metadata the title stands in for the series and the
    /// volume is loose-leaf; the book parser reconciles numbers that leak into
    /// such a series name.
    pub fn to_parse_result(&self, path: &str) -> ParseResult {
        let normalized = normalize_path(path);
        let filename = normalized.file_name();
        let title = self.title.clone().unwrap_or_else(|| {
            strip_supported_extension(filename)
                .map(|(stem, _)| stem.trim().to_string())
                .unwrap_or_else(|| filename.to_string())
        });

        let mut result = ParseResult::new(normalized.as_str(), filename, Format::Epub);
        match &self.series.name {
            Some(series) => {
                result.series = series.clone();
                result.volumes = self
                    .series
                    .index
                    .as_deref()
                    .map(series_index)
                    .unwrap_or_default();
            }
            None => result.series = title.clone(),
        }
        result.is_special = has_special_marker(&title);
        result.special_index = parse_special_index(&title);
        result.title = title;
        result
    }
}

/// Reads EPUB metadata for the book parser.
pub struct EpubMetadataExtractor {
    fs: Arc<dyn FileSystem>,
}

impl EpubMetadataExtractor {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read the descriptive metadata of the EPUB at `path`.
    pub fn read_info(&self, path: &str) -> Result<EpubInfo> {
        let bytes = self.fs.read(Path::new(path))?;

        let series = {
            let mut archive = archive::open(&bytes)?;
            let opf = archive::read_entry(&mut archive, "package document", |name| {
                name.to_ascii_lowercase().ends_with(".opf")
            })?;
            read_series_meta(&opf)?
        };

        let doc = EpubDoc::from_reader(Cursor::new(bytes))
            .map_err(|e| MetadataError::Epub(format!("failed to open EPUB: {e}")))?;
        let field = |name: &str| {
            doc.mdata(name)
                .map(|m| m.value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Ok(EpubInfo {
            title: field("title"),
            creator: field("creator"),
            language: field("language"),
            publisher: field("publisher"),
            description: field("description"),
            series,
        })
    }
}

impl Default for EpubMetadataExtractor {
    fn default() -> Self {
        Self::new(Arc::new(StdFileSystem))
    }
}

impl BookMetadataExtractor for EpubMetadataExtractor {
    fn extract(&self, path: &str) -> Option<ParseResult> {
        match self.read_info(path) {
            Ok(info) => {
                tracing::trace!(path, ?info, "read EPUB metadata");
                Some(info.to_parse_result(path))
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "failed to read EPUB metadata");
                None
            }
        }
    }
}

/// Scan a package document for series metadata.
///
/// calibre's series wins over an EPUB 3 collection when both are present.
pub fn read_series_meta(opf: &str) -> Result<SeriesMeta> {
    let mut reader = Reader::from_str(opf);
    reader.trim_text(true);

    let mut calibre = SeriesMeta::default();
    let mut collection = SeriesMeta::default();
    let mut collection_id: Option<String> = None;
    let mut positions: Vec<(String, String)> = Vec::new();
    let mut open: Option<(MetaAttributes, String)> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(e) if is_meta(&e) => {
                calibre.apply(&meta_attributes(&e)?);
            }
            Event::Start(e) if is_meta(&e) => {
                let attrs = meta_attributes(&e)?;
                calibre.apply(&attrs);
                open = Some((attrs, String::new()));
            }
            Event::Text(e) => {
                if let Some((_, text)) = open.as_mut() {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"meta" => {
                if let Some((attrs, text)) = open.take() {
                    let text = text.trim().to_string();
                    match attrs.property.as_deref() {
                        _ if text.is_empty() => {}
                        Some("belongs-to-collection") if collection.name.is_none() => {
                            collection.name = Some(text);
                            collection_id = attrs.id;
                        }
                        Some("group-position") => {
                            if let Some(target) = attrs.refines {
                                positions.push((target.trim_start_matches('#').to_string(), text));
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if calibre.name.is_some() {
        return Ok(calibre);
    }
    if let Some(id) = collection_id {
        collection.index = positions
            .into_iter()
            .find(|(target, _)| *target == id)
            .map(|(_, position)| position);
    }
    Ok(collection)
}

#[derive(Debug, Default)]
struct MetaAttributes {
    name: Option<String>,
    content: Option<String>,
    property: Option<String>,
    id: Option<String>,
    refines: Option<String>,
}

impl SeriesMeta {
    fn apply(&mut self, attrs: &MetaAttributes) {
        let content = attrs
            .content
            .as_deref()
            .map(str::trim)
            .filter(|content| !content.is_empty());
        match (attrs.name.as_deref(), content) {
            (Some("calibre:series"), Some(content)) => self.name = Some(content.to_string()),
            (Some("calibre:series_index"), Some(content)) => self.index = Some(content.to_string()),
            _ => {}
        }
    }
}

fn is_meta(e: &BytesStart<'_>) -> bool {
    e.local_name().as_ref() == b"meta"
}

fn meta_attributes(e: &BytesStart<'_>) -> Result<MetaAttributes> {
    let mut attrs = MetaAttributes::default();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = attr.unescape_value()?.into_owned();
        match attr.key.local_name().as_ref() {
            b"name" => attrs.name = Some(value),
            b"content" => attrs.content = Some(value),
            b"property" => attrs.property = Some(value),
            b"id" => attrs.id = Some(value),
            b"refines" => attrs.refines = Some(value),
            _ => {}
        }
    }
    Ok(attrs)
}

/// calibre writes indices as floats ("3.0"); drop the redundant fraction.
fn series_index(raw: &str) -> Numbering {
    let raw = raw.trim();
    let raw = match raw.split_once('.') {
        Some((whole, fraction)) => match fraction.trim_end_matches('0') {
            "" => whole,
            _ => raw.trim_end_matches('0'),
        },
        None => raw,
    };
    Numbering::from_token(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALIBRE_OPF: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:title>The Empty Box and Zeroth Maria 3</dc:title>
    <meta name="calibre:series" content="The Empty Box and Zeroth Maria"/>
    <meta name="calibre:series_index" content="3.0"/>
  </metadata>
</package>"#;

    const EPUB3_OPF: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:title>Spice and Wolf, Vol. 2</dc:title>
    <meta property="belongs-to-collection" id="c01">Spice and Wolf</meta>
    <meta refines="#c01" property="collection-type">series</meta>
    <meta refines="#c01" property="group-position">2</meta>
  </metadata>
</package>"##;

    #[test]
    fn test_calibre_series() {
        let meta = read_series_meta(CALIBRE_OPF).unwrap();
        assert_eq!(meta.name.as_deref(), Some("The Empty Box and Zeroth Maria"));
        assert_eq!(meta.index.as_deref(), Some("3.0"));
    }

    #[test]
    fn test_epub3_collection() {
        let meta = read_series_meta(EPUB3_OPF).unwrap();
        assert_eq!(meta.name.as_deref(), Some("Spice and Wolf"));
        assert_eq!(meta.index.as_deref(), Some("2"));
    }

    #[test]
    fn test_calibre_wins_over_collection() {
        let opf = EPUB3_OPF.replace(
            "<dc:title>",
            r#"<meta name="calibre:series" content="Calibre Name"/><dc:title>"#,
        );
        let meta = read_series_meta(&opf).unwrap();
        assert_eq!(meta.name.as_deref(), Some("Calibre Name"));
        assert_eq!(meta.index, None);
    }

    #[test]
    fn test_no_series() {
        let opf = r#"<package><metadata><meta name="cover" content="img"/></metadata></package>"#;
        assert_eq!(read_series_meta(opf).unwrap(), SeriesMeta::default());
    }

    #[test]
    fn test_series_index_normalization() {
        assert_eq!(series_index("3.0"), Numbering::Number("3".into()));
        assert_eq!(series_index("1.50"), Numbering::Number("1.5".into()));
        assert_eq!(series_index("10"), Numbering::Number("10".into()));
        assert_eq!(series_index("0.0"), Numbering::Number("0".into()));
        assert_eq!(series_index("0"), Numbering::Number("0".into()));
        assert_eq!(series_index("0.5"), Numbering::Number("0.5".into()));
        assert!(series_index("").is_loose_leaf());
    }

    #[test]
    fn test_to_parse_result_with_series() {
        let info = EpubInfo {
            title: Some("Spice and Wolf, Vol. 2".into()),
            series: SeriesMeta {
                name: Some("Spice and Wolf".into()),
                index: Some("2".into()),
            },
            ..Default::default()
        };
        let result = info.to_parse_result("/books/Spice and Wolf/book.epub");
        assert_eq!(result.series, "Spice and Wolf");
        assert_eq!(result.volumes, Numbering::Number("2".into()));
        assert_eq!(result.title, "Spice and Wolf, Vol. 2");
        assert_eq!(result.filename, "book.epub");
        assert_eq!(result.format, Format::Epub);
    }

    #[test]
    fn test_to_parse_result_falls_back_to_title() {
        let info = EpubInfo {
            title: Some("Side Story SP02".into()),
            ..Default::default()
        };
        let result = info.to_parse_result("/books/x.epub");
        assert_eq!(result.series, "Side Story SP02");
        assert!(result.volumes.is_loose_leaf());
        assert!(result.is_special);
        assert_eq!(result.special_index, 2);

        let untitled = EpubInfo::default().to_parse_result("/books/Dune.epub");
        assert_eq!(untitled.title, "Dune");
        assert_eq!(untitled.series, "Dune");
    }
}
