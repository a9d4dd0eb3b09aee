//! Response envelope for a statement request.

use serde::{Deserialize, Serialize};

use opendart_core::{FinancialSummary, LineItem, StatementQuery, UpstreamStatus, extract_summary};

/// Outcome of one statement request that reached DART.
///
/// Both a successful statement and a DART status such as "no data" are
/// reports; only the former carries line items and a summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatementReport {
    /// DART status code.
    pub status: UpstreamStatus,
    /// Human-readable message for `status`.
    pub message: String,
    /// Corporation code the report is for.
    pub company_code: String,
    /// Business year the report is for.
    pub year: String,
    /// Raw statement rows as returned by DART.
    pub list: Vec<LineItem>,
    /// Figures extracted from `list`, present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<FinancialSummary>,
}

impl StatementReport {
    /// Builds a successful report, extracting the summary from `items`.
    #[must_use]
    pub fn success(query: &StatementQuery, items: Vec<LineItem>) -> Self {
        let summary = extract_summary(&items);
        let status = UpstreamStatus::Success;
        Self {
            message: status.message(None),
            status,
            company_code: query.corp_code.clone(),
            year: query.bsns_year.clone(),
            list: items,
            summary: Some(summary),
        }
    }

    /// Builds a report for a non-success DART status.
    #[must_use]
    pub fn upstream_failure(
        query: &StatementQuery,
        status: UpstreamStatus,
        message: String,
    ) -> Self {
        Self {
            status,
            message,
            company_code: query.corp_code.clone(),
            year: query.bsns_year.clone(),
            list: Vec::new(),
            summary: None,
        }
    }

    /// Returns true if DART answered `000`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
