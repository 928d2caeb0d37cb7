//! Core library for dockets
//!
//! This crate implements the **Functional Core** of the dockets application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`dockets_core`** (this crate): Pure transformation functions with zero I/O
//! - **`dockets`**: Input handling, output rendering, and orchestration (the Imperative Shell)
//!
//! Every function here takes HTML or text that someone else fetched and returns
//! plain data. Parsing is permissive: malformed markup never fails, it just
//! yields fewer matches.
//!
//! # Module Organization
//!
//! - [`docket`]: Docket identifiers and `MatterSeq` links on case-search pages
//! - [`listing`]: Case-search result rows (docket link plus row columns)
//! - [`case`]: Case page URLs
//! - [`filings`]: The public documents table on a case page
//! - [`error`]: Errors for the fallible helpers
//!
//! # Example Usage
//!
//! ```rust
//! use dockets_core::docket::{extract_docket_details, extract_docket_ids};
//!
//! let html = r#"<a href="/MatterSeq?id=1">22-E-0123</a>"#;
//! let records = extract_docket_details(html);
//! assert_eq!(records[0].docket_id, "22-E-0123");
//! assert_eq!(records[0].href, "/MatterSeq?id=1");
//!
//! let ids = extract_docket_ids("See case 22-E-0123 and 23-G-4567 for details");
//! assert_eq!(ids, vec!["22-E-0123", "23-G-4567"]);
//! ```

pub mod case;
pub mod docket;
pub mod error;
pub mod filings;
pub mod listing;

pub use docket::{extract_docket_details, extract_docket_ids, DocketId, DocketRecord};
pub use error::ExtractError;
