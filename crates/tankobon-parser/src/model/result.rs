//! The parsed identity of one file.

use super::{EmbeddedMetadata, Format, Numbering};

/// The bibliographic identity derived for one file.
///
/// A result handed out by the engine always has a non-empty `series`; a file
/// that cannot produce one is reported as `None` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// Normalised, forward-slash path.
    pub full_path: String,
    /// Bare file name, extension included.
    pub filename: String,
    /// Best-effort human title. Defaults to the file stem.
    pub title: String,
    pub series: String,
    /// Edition tag stripped from the series, such as "Omnibus".
    pub edition: String,
    pub volumes: Numbering,
    pub chapters: Numbering,
    pub format: Format,
    /// Bonus or extra content rather than a numbered release.
    pub is_special: bool,
    /// Ordering index from an `SP<n>` marker; 0 when there is none.
    pub special_index: u32,
    /// Sidecar record attached after extraction.
    pub embedded_metadata: Option<EmbeddedMetadata>,
}

impl ParseResult {
    /// An empty result for `full_path`, with every numbering at loose-leaf.
    pub fn new(full_path: impl Into<String>, filename: impl Into<String>, format: Format) -> Self {
        Self {
            full_path: full_path.into(),
            filename: filename.into(),
            format,
            ..Self::default()
        }
    }

    /// Whether the result may be handed to a caller.
    pub fn is_valid(&self) -> bool {
        !self.series.trim().is_empty()
    }

    /// Combine two candidate results.
    ///
    /// Every field keeps `self`'s value unless that value is unset (an empty
    /// string, loose-leaf numbering, `false` or `0`), in which case `other`'s
    /// value is used. Path, file name and format always come from `self`.
    /// Sidecar metadata present on either side is kept, `self`'s first.
    ///
    /// ```
    /// # use tankobon_parser::{Format, Numbering, ParseResult};
    /// let mut primary = ParseResult::new("/b/x.epub", "x.epub", Format::Epub);
    /// primary.series = "X".into();
    /// let mut second = ParseResult::new("/b/x.epub", "x.epub", Format::Epub);
    /// second.series = "Y".into();
    /// second.volumes = Numbering::from_token("2");
    ///
    /// let merged = primary.merge(&second);
    /// assert_eq!(merged.series, "X");
    /// assert_eq!(merged.volumes.to_string(), "2");
    /// ```
    pub fn merge(&self, other: &ParseResult) -> ParseResult {
        ParseResult {
            full_path: self.full_path.clone(),
            filename: self.filename.clone(),
            title: pick_str(&self.title, &other.title),
            series: pick_str(&self.series, &other.series),
            edition: pick_str(&self.edition, &other.edition),
            volumes: pick_numbering(&self.volumes, &other.volumes),
            chapters: pick_numbering(&self.chapters, &other.chapters),
            format: self.format,
            is_special: self.is_special || other.is_special,
            special_index: if self.special_index != 0 {
                self.special_index
            } else {
                other.special_index
            },
            embedded_metadata: self
                .embedded_metadata
                .clone()
                .or_else(|| other.embedded_metadata.clone()),
        }
    }
}

fn pick_str(primary: &str, other: &str) -> String {
    if primary.is_empty() {
        other.to_string()
    } else {
        primary.to_string()
    }
}

fn pick_numbering(primary: &Numbering, other: &Numbering) -> Numbering {
    if primary.is_loose_leaf() {
        other.clone()
    } else {
        primary.clone()
    }
}
