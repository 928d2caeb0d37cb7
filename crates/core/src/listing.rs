//! Case-search result rows
//!
//! The case-search results page renders one table row per docket. Besides the
//! `MatterSeq` link, the row carries the case type, filing date, and a short
//! description. This module pairs each docket link with those columns.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::docket::{contains_docket_id, element_text, record_from_anchor, MATTER_SEQ_SELECTOR};

const CASE_TYPE_COLUMN: usize = 1;
const DESCRIPTION_COLUMN: usize = 4;
const DATE_CELL_CLASS: &str = "sorting_1";

static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("Failed to parse td selector - this is a bug"));

/// A docket link together with the columns of the row it sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocketListing {
    pub docket_id: String,
    pub href: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub case_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn enclosing_row<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "tr")
}

fn listing_from_row(anchor: &ElementRef, row: &ElementRef) -> DocketListing {
    let record = record_from_anchor(anchor);
    let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();

    let date = cells
        .iter()
        .find(|cell| cell.value().classes().any(|class| class == DATE_CELL_CLASS))
        .map(element_text);

    DocketListing {
        docket_id: record.docket_id,
        href: record.href,
        case_type: cells.get(CASE_TYPE_COLUMN).map(element_text),
        date,
        description: cells.get(DESCRIPTION_COLUMN).map(element_text),
    }
}

/// Extract docket rows from a case-search results table
///
/// Uses the same anchor selection and docket filter as
/// [`extract_docket_details`](crate::docket::extract_docket_details). Anchors
/// that are not inside a `<tr>` are skipped. Missing columns are `None`.
pub fn extract_docket_listing(html: &str) -> Vec<DocketListing> {
    let document = Html::parse_document(html);

    document
        .select(&MATTER_SEQ_SELECTOR)
        .filter(|anchor| contains_docket_id(&element_text(anchor)))
        .filter_map(|anchor| {
            let row = enclosing_row(&anchor)?;
            Some(listing_from_row(&anchor, &row))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
        <table id="tblSearchedMatter">
          <thead><tr><th>Case</th><th>Type</th><th>Date</th><th>Company</th><th>Title</th></tr></thead>
          <tbody>
            <tr>
              <td><a href="../MatterManagement/CaseMaster.aspx?MatterSeq=64000">22-E-0123</a></td>
              <td> Electric Rates </td>
              <td class="sorting_1">03/01/2022</td>
              <td>Con Edison</td>
              <td>Proceeding on Motion of the Commission</td>
            </tr>
            <tr>
              <td><a href="../MatterManagement/CaseMaster.aspx?MatterSeq=64001">23-G-4567</a></td>
              <td>Gas</td>
              <td class="sorting_1">11/15/2023</td>
              <td>National Grid</td>
              <td>Tariff filing</td>
            </tr>
          </tbody>
        </table>
    "#;

    #[test]
    fn test_extract_docket_listing_full_rows() {
        let rows = extract_docket_listing(RESULTS_PAGE);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].docket_id, "22-E-0123");
        assert_eq!(
            rows[0].href,
            "../MatterManagement/CaseMaster.aspx?MatterSeq=64000"
        );
        assert_eq!(rows[0].case_type.as_deref(), Some("Electric Rates"));
        assert_eq!(rows[0].date.as_deref(), Some("03/01/2022"));
        assert_eq!(
            rows[0].description.as_deref(),
            Some("Proceeding on Motion of the Commission")
        );

        assert_eq!(rows[1].docket_id, "23-G-4567");
        assert_eq!(rows[1].case_type.as_deref(), Some("Gas"));
    }

    #[test]
    fn test_extract_docket_listing_missing_columns() {
        let html = r#"<table><tr><td><a href="?MatterSeq=1">22-E-0123</a></td></tr></table>"#;
        let rows = extract_docket_listing(html);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].case_type, None);
        assert_eq!(rows[0].date, None);
        assert_eq!(rows[0].description, None);
    }

    #[test]
    fn test_extract_docket_listing_skips_anchor_outside_row() {
        let html = r#"<p><a href="?MatterSeq=1">22-E-0123</a></p>"#;
        assert!(extract_docket_listing(html).is_empty());
    }

    #[test]
    fn test_extract_docket_listing_skips_non_docket_text() {
        let html = r#"<table><tr><td><a href="?MatterSeq=1">View</a></td><td>Gas</td></tr></table>"#;
        assert!(extract_docket_listing(html).is_empty());
    }

    #[test]
    fn test_docket_listing_serialization_omits_missing_columns() {
        let listing = DocketListing {
            docket_id: "22-E-0123".to_string(),
            href: "?MatterSeq=1".to_string(),
            case_type: Some("Electric".to_string()),
            date: None,
            description: None,
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["docket_id"], "22-E-0123");
        assert_eq!(json["type"], "Electric");
        assert!(json.get("caseType").is_none());
        assert!(json.get("date").is_none());
        assert!(json.get("description").is_none());
    }
}
