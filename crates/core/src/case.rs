//! Case page URLs
//!
//! Helpers for building and inspecting links into the commission's matter
//! management site.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::docket::DocketId;
use crate::error::ExtractError;

/// Default root of the matter management pages.
pub const DEFAULT_BASE_URL: &str = "https://documents.dps.ny.gov/public/MatterManagement";

const CASE_MASTER_PAGE: &str = "CaseMaster.aspx";
const DOCUMENT_PAGE: &str = "ViewDoc.aspx";
const CASE_NUMBER_PARAM: &str = "MatterCaseNo";

/// Kind of page a link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    CaseMaster,
    Document,
    Other,
}

/// Build the case-master URL for a docket
///
/// Converts ("https://host/MatterManagement/", "22-M-0149") into
/// "https://host/MatterManagement/CaseMaster.aspx?MatterCaseNo=22-M-0149".
pub fn case_master_url(base: &str, docket: &DocketId) -> String {
    format!(
        "{}/{CASE_MASTER_PAGE}?{CASE_NUMBER_PARAM}={docket}",
        base.trim_end_matches('/')
    )
}

fn parse_lenient(url: &str) -> Result<Url, ExtractError> {
    match Url::parse(url) {
        Ok(parsed) => Ok(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(DEFAULT_BASE_URL)
            .and_then(|base| base.join(url))
            .map_err(|e| ExtractError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        Err(e) => Err(ExtractError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Read the `MatterCaseNo` query parameter from a case link
///
/// Relative links are accepted. Returns `None` when the parameter is missing,
/// empty, or the link cannot be parsed.
pub fn case_id_from_url(url: &str) -> Option<String> {
    let parsed = parse_lenient(url).ok()?;

    parsed
        .query_pairs()
        .find(|(key, _)| key == CASE_NUMBER_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Classify a link by the page it targets.
pub fn classify_page(url: &str) -> PageKind {
    if url.contains(CASE_MASTER_PAGE) {
        PageKind::CaseMaster
    } else if url.contains(DOCUMENT_PAGE) {
        PageKind::Document
    } else {
        PageKind::Other
    }
}

/// Resolve a possibly relative `href` against a base URL
///
/// The base is treated as a directory, so a trailing slash is added when
/// missing. Absolute hrefs are returned normalized.
pub fn resolve_href(base: &str, href: &str) -> Result<String, ExtractError> {
    let base_dir = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };

    let base_url = Url::parse(&base_dir).map_err(|e| ExtractError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    base_url
        .join(href)
        .map(String::from)
        .map_err(|e| ExtractError::InvalidUrl {
            url: href.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docket(id: &str) -> DocketId {
        DocketId::parse(id).unwrap()
    }

    #[test]
    fn test_case_master_url_default_base() {
        let url = case_master_url(DEFAULT_BASE_URL, &docket("22-M-0149"));
        assert_eq!(
            url,
            "https://documents.dps.ny.gov/public/MatterManagement/CaseMaster.aspx?MatterCaseNo=22-M-0149"
        );
    }

    #[test]
    fn test_case_master_url_trailing_slash() {
        let url = case_master_url("http://localhost/mm/", &docket("18-E-0138"));
        assert_eq!(
            url,
            "http://localhost/mm/CaseMaster.aspx?MatterCaseNo=18-E-0138"
        );
    }

    #[test]
    fn test_case_id_from_url_absolute() {
        let url = "https://documents.dps.ny.gov/public/MatterManagement/CaseMaster.aspx?MatterCaseNo=24-E-0165";
        assert_eq!(case_id_from_url(url), Some("24-E-0165".to_string()));
    }

    #[test]
    fn test_case_id_from_url_relative() {
        let url = "CaseMaster.aspx?MatterSeq=1&MatterCaseNo=22-M-0645";
        assert_eq!(case_id_from_url(url), Some("22-M-0645".to_string()));
    }

    #[test]
    fn test_case_id_from_url_missing_param() {
        assert_eq!(case_id_from_url("CaseMaster.aspx?MatterSeq=64000"), None);
        assert_eq!(case_id_from_url("CaseMaster.aspx?MatterCaseNo="), None);
    }

    #[test]
    fn test_case_id_round_trips_through_case_master_url() {
        let url = case_master_url(DEFAULT_BASE_URL, &docket("22-M-0149"));
        assert_eq!(case_id_from_url(&url), Some("22-M-0149".to_string()));
    }

    #[test]
    fn test_classify_page() {
        assert_eq!(
            classify_page("https://x/CaseMaster.aspx?MatterCaseNo=1"),
            PageKind::CaseMaster
        );
        assert_eq!(
            classify_page("../Common/ViewDoc.aspx?DocRefId={ABC}"),
            PageKind::Document
        );
        assert_eq!(classify_page("https://x/Search.aspx"), PageKind::Other);
    }

    #[test]
    fn test_resolve_href_relative() {
        let resolved = resolve_href(DEFAULT_BASE_URL, "../Common/ViewDoc.aspx?DocRefId=1").unwrap();
        assert_eq!(
            resolved,
            "https://documents.dps.ny.gov/public/Common/ViewDoc.aspx?DocRefId=1"
        );
    }

    #[test]
    fn test_resolve_href_absolute() {
        let resolved = resolve_href(DEFAULT_BASE_URL, "https://example.com/doc.pdf").unwrap();
        assert_eq!(resolved, "https://example.com/doc.pdf");
    }

    #[test]
    fn test_resolve_href_invalid_base() {
        let result = resolve_href("not a url", "doc.pdf");
        assert!(matches!(result, Err(ExtractError::InvalidUrl { .. })));
    }
}
