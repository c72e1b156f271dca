//! Sidecar metadata overrides.
//!
//! A ComicInfo record is authoritative for a handful of fields when it sets
//! them. Values that do not parse are ignored rather than failing the file.

use crate::model::{EmbeddedMetadata, Numbering, ParseResult};

/// Apply the fields `sidecar` sets on top of `result`.
///
/// ```
/// use tankobon_parser::{overrides::apply_sidecar, EmbeddedMetadata, ParseResult, Format};
///
/// let mut parsed = ParseResult::new("/m/x v01.cbz", "x v01.cbz", Format::Archive);
/// parsed.series = "x".into();
/// let sidecar = EmbeddedMetadata::new().with_series("X Saga").with_volume("two");
///
/// let result = apply_sidecar(parsed, &sidecar);
/// assert_eq!(result.series, "X Saga");
/// assert!(result.volumes.is_loose_leaf());
/// ```
pub fn apply_sidecar(mut result: ParseResult, sidecar: &EmbeddedMetadata) -> ParseResult {
    if sidecar.has_volume() {
        match sidecar.volume.parse::<Numbering>() {
            Ok(volumes) => result.volumes = volumes,
            Err(err) => tracing::debug!(volume = %sidecar.volume, %err, "ignoring sidecar volume"),
        }
    }

    if sidecar.has_series() {
        result.series = sidecar.series.trim().to_string();
    }

    if sidecar.has_number() {
        match sidecar.number.parse::<Numbering>() {
            Ok(chapters) => {
                result.chapters = chapters;
                result.is_special = false;
                result.special_index = 0;
            }
            Err(err) => tracing::debug!(number = %sidecar.number, %err, "ignoring sidecar number"),
        }
    }

    if sidecar.is_special_format() {
        result.is_special = true;
        result.volumes = Numbering::LooseLeaf;
        result.chapters = Numbering::LooseLeaf;
    }

    if result.embedded_metadata.is_none() {
        result.embedded_metadata = Some(sidecar.clone());
    }
    result
}
