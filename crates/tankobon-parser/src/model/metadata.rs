//! Sidecar metadata record.

/// Format values that mark a release as a special.
const SPECIAL_FORMATS: &[&str] = &["special", "one-shot", "oneshot", "one shot", "extra", "omake"];

/// A ComicInfo-style metadata record, read from inside an archive by a
/// collaborator and handed to the engine alongside the path.
///
/// Only `series`, `volume`, `number` and `format` influence parsing; the rest
/// is carried through so callers get one record per file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmbeddedMetadata {
    pub series: String,
    pub localized_series: String,
    pub title: String,
    /// Chapter or issue number.
    pub number: String,
    pub volume: String,
    /// Free-form descriptive block.
    pub summary: String,
    pub year: Option<u16>,
    pub writer: String,
    pub publisher: String,
    pub genre: String,
    pub language_iso: String,
    /// Release format such as "Special" or "TPB".
    pub format: String,
}

impl EmbeddedMetadata {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the series name.
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = series.into();
        self
    }

    /// Set the volume.
    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = volume.into();
        self
    }

    /// Set the chapter/issue number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Set the release format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn has_series(&self) -> bool {
        !self.series.trim().is_empty()
    }

    pub fn has_volume(&self) -> bool {
        !self.volume.trim().is_empty()
    }

    pub fn has_number(&self) -> bool {
        !self.number.trim().is_empty()
    }

    /// True when `format` names a special release, in any casing.
    pub fn is_special_format(&self) -> bool {
        let format = self.format.trim().to_lowercase();
        SPECIAL_FORMATS.contains(&format.as_str())
    }
}
