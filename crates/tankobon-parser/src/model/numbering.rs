//! Volume and chapter numbering.

use super::ParseError;
use regex::Regex;
use std::sync::LazyLock;

/// Textual form of the loose-leaf sentinel.
pub const LOOSE_LEAF: &str = "-100000";

/// Numeric form of the loose-leaf sentinel, used for sorting.
pub const LOOSE_LEAF_NUMBER: f32 = -100_000.0;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(?:[-~]\s*(?:ch?\.?\s*)?(\d+(?:\.\d+)?))?\s*$")
        .expect("valid numbering pattern")
});

/// A volume or chapter number, a range of them, or the loose-leaf sentinel.
///
/// For volumes the sentinel means "not part of a numbered volume"; for
/// chapters it means default placement (a whole volume or a special).
/// Numbers keep their textual form with leading zeros removed, so parsing the
/// same file twice always yields the same value.
///
/// # Example
/// ```
/// # use tankobon_parser::Numbering;
/// let range = Numbering::from_token("01-03");
/// assert_eq!(range.to_string(), "1-3");
/// assert_eq!(range.min_number(), 1.0);
/// assert_eq!(range.max_number(), 3.0);
/// assert!(Numbering::from_token("nope").is_loose_leaf());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub enum Numbering {
    /// No number was found.
    #[default]
    LooseLeaf,
    /// A single integer or decimal number.
    Number(String),
    /// An inclusive range.
    Range(String, String),
}

/// Volume numbering of a file.
pub type VolumeToken = Numbering;

/// Chapter numbering of a file.
pub type ChapterToken = Numbering;

impl Numbering {
    /// The loose-leaf sentinel.
    pub fn loose_leaf() -> Self {
        Numbering::LooseLeaf
    }

    /// Build a numbering from a raw matched token such as `"0982"`, `"10.5"`,
    /// `"1-3"` or `"12-c14"`. Anything without a number is loose-leaf.
    pub fn from_token(raw: &str) -> Self {
        let Some(caps) = TOKEN_PATTERN.captures(raw) else {
            return Numbering::LooseLeaf;
        };
        let start = trim_leading_zeros(&caps[1]);
        match caps.get(2).map(|m| trim_leading_zeros(m.as_str())) {
            Some(end) if end != start => Numbering::Range(start, end),
            _ => Numbering::Number(start),
        }
    }

    /// True iff this is the loose-leaf sentinel.
    pub fn is_loose_leaf(&self) -> bool {
        matches!(self, Numbering::LooseLeaf)
    }

    /// Lowest number covered, or the sentinel value.
    pub fn min_number(&self) -> f32 {
        match self {
            Numbering::LooseLeaf => LOOSE_LEAF_NUMBER,
            Numbering::Number(n) => to_f32(n),
            Numbering::Range(start, end) => to_f32(start).min(to_f32(end)),
        }
    }

    /// Highest number covered, or the sentinel value.
    pub fn max_number(&self) -> f32 {
        match self {
            Numbering::LooseLeaf => LOOSE_LEAF_NUMBER,
            Numbering::Number(n) => to_f32(n),
            Numbering::Range(start, end) => to_f32(start).max(to_f32(end)),
        }
    }
}

fn to_f32(value: &str) -> f32 {
    value.parse().unwrap_or(LOOSE_LEAF_NUMBER)
}

fn trim_leading_zeros(value: &str) -> String {
    let trimmed = value.trim_start_matches('0');
    if trimmed.is_empty() || trimmed.starts_with('.') {
        format!("0{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

impl std::fmt::Display for Numbering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Numbering::LooseLeaf => write!(f, "{}", LOOSE_LEAF),
            Numbering::Number(n) => write!(f, "{}", n),
            Numbering::Range(start, end) => write!(f, "{}-{}", start, end),
        }
    }
}

impl std::str::FromStr for Numbering {
    type Err = ParseError;

    /// Strict parse used for stored and sidecar values; unlike
    /// [`Numbering::from_token`] it rejects text that is not a number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == LOOSE_LEAF {
            return Ok(Numbering::LooseLeaf);
        }
        match Numbering::from_token(s) {
            Numbering::LooseLeaf => Err(ParseError(format!("invalid number: {}", s))),
            numbering => Ok(numbering),
        }
    }
}

impl From<Numbering> for String {
    fn from(value: Numbering) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Numbering {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
