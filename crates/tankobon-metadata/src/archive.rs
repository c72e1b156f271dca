//! Zip entry lookup shared by the EPUB and ComicInfo readers.

use crate::error::{MetadataError, Result};
use std::io::{Cursor, Read};
use zip::ZipArchive;

pub(crate) type Archive<'a> = ZipArchive<Cursor<&'a [u8]>>;

pub(crate) fn open(bytes: &[u8]) -> Result<Archive<'_>> {
    Ok(ZipArchive::new(Cursor::new(bytes))?)
}

/// Read the first entry whose name satisfies `matches` as text.
///
/// `what` names the entry in the `MissingEntry` error.
pub(crate) fn read_entry(
    archive: &mut Archive<'_>,
    what: &str,
    matches: impl Fn(&str) -> bool,
) -> Result<String> {
    let name = archive
        .file_names()
        .filter(|name| !name.starts_with("__MACOSX/"))
        .find(|name| matches(name))
        .map(str::to_string)
        .ok_or_else(|| MetadataError::MissingEntry(what.to_string()))?;

    let mut entry = archive.by_name(&name)?;
    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(content)
}

/// Last path segment of an archive entry name.
pub(crate) fn entry_file_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
