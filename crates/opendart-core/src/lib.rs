#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/opendart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for the DART financial statement proxy.
//!
//! This crate provides the foundational pieces every other `opendart` crate builds on:
//!
//! - [`StatementQuery`](query::StatementQuery) - Validated upstream request parameters
//! - [`UpstreamStatus`](status::UpstreamStatus) - DART status codes and their messages
//! - [`extract_summary`](summary::extract_summary) - Line items to [`FinancialSummary`]
//! - [`DisclosureProvider`](provider::DisclosureProvider) - Upstream client abstraction

/// Error types for proxy operations.
pub mod error;
/// Upstream client trait.
pub mod provider;
/// Caller parameter validation.
pub mod query;
/// DART status code table.
pub mod status;
/// Financial summary extraction.
pub mod summary;
/// Core data types (line items, report codes, summaries).
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DartError, Result};
pub use provider::DisclosureProvider;
pub use query::{StatementParams, StatementQuery};
pub use status::UpstreamStatus;
pub use summary::{KEYWORD_RULES, KeywordRule, SummaryField, extract_summary};
pub use types::{FinancialSummary, FsDivision, LineItem, ReportCode, UpstreamResponse};
