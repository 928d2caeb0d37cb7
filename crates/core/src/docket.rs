use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Two ASCII digits, hyphen, one uppercase letter, hyphen, four ASCII digits.
pub const DOCKET_PATTERN: &str = r"[0-9]{2}-[A-Z]-[0-9]{4}";

/// Marker that identifies links to a case detail page.
pub const MATTER_SEQ_MARKER: &str = "MatterSeq";

pub(crate) static DOCKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOCKET_PATTERN).expect("Failed to compile docket regex"));

static DOCKET_EXACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{DOCKET_PATTERN}$")).expect("Failed to compile exact docket regex")
});

pub(crate) static MATTER_SEQ_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!(r#"a[href*="{MATTER_SEQ_MARKER}"]"#))
        .expect("Failed to parse MatterSeq selector - this is a bug")
});

/// A docket link found on a case-search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocketRecord {
    pub docket_id: String,
    pub href: String,
}

/// A validated docket identifier such as `22-E-0123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocketId(String);

impl DocketId {
    /// Parse a full-string docket identifier. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, ExtractError> {
        let trimmed = input.trim();
        if DOCKET_EXACT_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ExtractError::InvalidDocketId(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit year prefix, e.g. `22`.
    pub fn year(&self) -> &str {
        &self.0[..2]
    }

    /// Industry letter, e.g. `E` for electric.
    pub fn industry(&self) -> char {
        // The pattern guarantees an ASCII letter at byte 3.
        self.0.as_bytes()[3] as char
    }

    /// Four-digit sequence suffix, e.g. `0123`.
    pub fn sequence(&self) -> &str {
        &self.0[5..]
    }
}

impl fmt::Display for DocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocketId {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DocketId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DocketId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Returns true when `text` contains a docket-shaped substring anywhere.
pub fn contains_docket_id(text: &str) -> bool {
    DOCKET_RE.is_match(text)
}

/// Visible text of an element with surrounding whitespace and byte-order marks removed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}

/// Build a record from a `MatterSeq` anchor.
pub(crate) fn record_from_anchor(anchor: &ElementRef) -> DocketRecord {
    DocketRecord {
        docket_id: element_text(anchor),
        href: anchor.value().attr("href").unwrap_or_default().to_string(),
    }
}

/// Extract docket links from a case-search results page
///
/// Selects every anchor whose `href` contains `MatterSeq` and keeps those whose
/// trimmed text contains a docket-shaped substring. The text is kept as-is, so
/// `"Case 22-E-0123 Filed"` is returned whole. Document order is preserved and
/// malformed markup never fails.
pub fn extract_docket_details(html: &str) -> Vec<DocketRecord> {
    let document = Html::parse_document(html);

    document
        .select(&MATTER_SEQ_SELECTOR)
        .map(|anchor| record_from_anchor(&anchor))
        .filter(|record| contains_docket_id(&record.docket_id))
        .collect()
}

/// Extract every docket-shaped substring from raw text, in order, duplicates included.
pub fn extract_docket_ids(text: &str) -> Vec<String> {
    DOCKET_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
