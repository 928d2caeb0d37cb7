/// Errors raised by the fallible extraction helpers.
///
/// The two docket extractors never fail; these cover identifier validation,
/// URL handling, and the case-page filings table.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Invalid docket id: '{0}' (expected DD-L-DDDD)")]
    InvalidDocketId(String),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Table not found: no element matches '{0}'")]
    TableNotFound(String),
}
