//! Case page filings table
//!
//! A case-master page lists every public document filed under the docket in a
//! table with id `tblPubDoc`. Each body row has the columns:
//!
//! | # | Column        |
//! |---|---------------|
//! | 0 | Serial        |
//! | 1 | Date filed    |
//! | 2 | Document type |
//! | 3 | Document link |
//! | 4 | Organization  |
//! | 5 | Item number   |
//! | 6 | File name     |
//!
//! Rows that do not fit this shape are reported back instead of failing the
//! whole page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::docket::element_text;
use crate::error::ExtractError;

pub const FILINGS_TABLE_SELECTOR_STR: &str = "#tblPubDoc";

const MIN_CELLS: usize = 7;
const LINK_COLUMN: usize = 3;

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(FILINGS_TABLE_SELECTOR_STR)
        .expect("Failed to parse filings table selector - this is a bug")
});

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("Failed to parse a selector - this is a bug"));

/// One public document filed under a docket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filing {
    pub serial: String,
    pub date_filed: String,
    #[serde(rename = "nypuc_doctype")]
    pub doc_type: String,
    pub name: String,
    pub url: String,
    pub organization: String,
    #[serde(rename = "itemNo")]
    pub item_no: String,
    pub file_name: String,
    pub docket_id: String,
}

/// A body row that could not be read as a filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Zero-based position among the table body rows.
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingsOutput {
    pub case: String,
    pub filings: Vec<Filing>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<SkippedRow>,
}

/// Direct element children of `parent` with the given tag name.
fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}

/// Rows of the table's own bodies, never rows of enclosing or nested tables.
fn body_rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    child_elements(table, "tbody").flat_map(|tbody| child_elements(tbody, "tr"))
}

fn filing_from_row(row: &ElementRef, case: &str) -> Result<Filing, String> {
    let cells: Vec<ElementRef> = child_elements(*row, "td").collect();
    if cells.len() < MIN_CELLS {
        return Err(format!(
            "expected at least {MIN_CELLS} cells, found {}",
            cells.len()
        ));
    }

    let link = cells[LINK_COLUMN]
        .select(&ANCHOR_SELECTOR)
        .next()
        .ok_or_else(|| format!("no link in column {LINK_COLUMN}"))?;

    Ok(Filing {
        serial: element_text(&cells[0]),
        date_filed: element_text(&cells[1]),
        doc_type: element_text(&cells[2]),
        name: element_text(&link),
        url: link.value().attr("href").unwrap_or_default().to_string(),
        organization: element_text(&cells[4]),
        item_no: element_text(&cells[5]),
        file_name: element_text(&cells[6]),
        docket_id: case.to_string(),
    })
}

/// Extract the filings table from a case-master page
///
/// Returns `ExtractError::TableNotFound` when the page has no `#tblPubDoc`
/// table. Malformed rows land in [`FilingsOutput::skipped`]; link targets are
/// returned raw.
pub fn extract_filings(html: &str, case: &str) -> Result<FilingsOutput, ExtractError> {
    let document = Html::parse_document(html);

    let table = document
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or_else(|| ExtractError::TableNotFound(FILINGS_TABLE_SELECTOR_STR.to_string()))?;

    let mut filings = Vec::new();
    let mut skipped = Vec::new();

    for (index, row) in body_rows(table).enumerate() {
        match filing_from_row(&row, case) {
            Ok(filing) => filings.push(filing),
            Err(reason) => skipped.push(SkippedRow { index, reason }),
        }
    }

    Ok(FilingsOutput {
        case: case.to_string(),
        filings,
        skipped,
    })
}
