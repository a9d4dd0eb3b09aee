//! Core data types for DART financial statements.
//!
//! This module defines the fundamental data structures:
//!
//! - [`LineItem`] - One named, valued row of a financial statement
//! - [`UpstreamResponse`] - Parsed body of a DART statement response
//! - [`ReportCode`] - Which disclosure document to query
//! - [`FsDivision`] - Consolidated or separate statements
//! - [`FinancialSummary`] - Key figures and ratios extracted from line items

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::{
    error::{DartError, Result},
    status::UpstreamStatus,
};

/// One row of a DART financial statement.
///
/// Only the account name and the current-term amount take part in summary
/// extraction. Every other upstream field is kept in [`LineItem::extra`] so the
/// row can be echoed back unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Account name (`account_nm`), e.g. "자산총계".
    #[serde(rename = "account_nm", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw current-term amount (`thstrm_amount`), possibly comma-grouped.
    #[serde(
        rename = "thstrm_amount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<String>,
    /// Remaining upstream fields (`rcept_no`, `sj_div`, `frmtrm_amount`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    /// Creates a line item with a name and a raw amount.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            extra: Map::new(),
        }
    }

    /// Returns the account name, treating an empty name as absent.
    #[must_use]
    pub fn account_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Parsed body of a `fnlttSinglAcntAll.json` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UpstreamResponse {
    /// Status code; `000` on success.
    pub status: UpstreamStatus,
    /// Upstream's own message.
    #[serde(default)]
    pub message: Option<String>,
    /// Statement rows, absent on most non-success statuses.
    #[serde(default)]
    pub list: Option<Vec<LineItem>>,
}

impl UpstreamResponse {
    /// Converts the response into its line items.
    ///
    /// A missing `list` on a successful response yields an empty sequence. Any
    /// non-success status becomes [`DartError::UpstreamStatus`] carrying the
    /// message resolved through the status table.
    pub fn into_line_items(self) -> Result<Vec<LineItem>> {
        if self.status.is_success() {
            return Ok(self.list.unwrap_or_default());
        }
        let message = self.status.message(self.message.as_deref());
        Err(DartError::UpstreamStatus {
            status: self.status,
            message,
        })
    }
}

/// Disclosure document selected by `reprt_code`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReportCode {
    /// `11011`: annual business report.
    #[default]
    Annual,
    /// `11012`: half-year report.
    HalfYear,
    /// `11013`: first-quarter report.
    FirstQuarter,
    /// `11014`: third-quarter report.
    ThirdQuarter,
}

impl ReportCode {
    /// Returns the DART wire code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Annual => "11011",
            Self::HalfYear => "11012",
            Self::FirstQuarter => "11013",
            Self::ThirdQuarter => "11014",
        }
    }
}

impl fmt::Display for ReportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ReportCode {
    type Err = DartError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "11011" => Ok(Self::Annual),
            "11012" => Ok(Self::HalfYear),
            "11013" => Ok(Self::FirstQuarter),
            "11014" => Ok(Self::ThirdQuarter),
            other => Err(DartError::InvalidRequest(format!(
                "unknown report type: {other}"
            ))),
        }
    }
}

/// Statement division selected by `fs_div`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FsDivision {
    /// `CFS`: consolidated statements.
    #[default]
    Consolidated,
    /// `OFS`: separate statements.
    Separate,
}

impl FsDivision {
    /// Returns the DART wire code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Consolidated => "CFS",
            Self::Separate => "OFS",
        }
    }
}

impl fmt::Display for FsDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FsDivision {
    type Err = DartError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CFS" => Ok(Self::Consolidated),
            "OFS" => Ok(Self::Separate),
            other => Err(DartError::InvalidRequest(format!(
                "unknown financial statement division: {other}"
            ))),
        }
    }
}

/// Key figures extracted from one statement.
///
/// Every amount is independently optional. The two ratios are percentages
/// rendered with two decimal places.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    // Income Statement
    /// Revenue.
    pub sales: Option<i64>,
    /// Operating profit.
    pub operating_profit: Option<i64>,
    /// Net income.
    pub net_income: Option<i64>,

    // Balance Sheet
    /// Total assets.
    pub total_assets: Option<i64>,
    /// Current assets.
    pub current_assets: Option<i64>,
    /// Non-current assets.
    pub non_current_assets: Option<i64>,
    /// Total liabilities.
    pub total_liabilities: Option<i64>,
    /// Current liabilities.
    pub current_liabilities: Option<i64>,
    /// Non-current liabilities.
    pub non_current_liabilities: Option<i64>,
    /// Total equity.
    pub total_equity: Option<i64>,

    // Cash Flow Statement
    /// Cash flow from operating activities.
    pub operating_cash_flow: Option<i64>,
    /// Cash flow from investing activities.
    pub investing_cash_flow: Option<i64>,
    /// Cash flow from financing activities.
    pub financing_cash_flow: Option<i64>,

    // Ratios
    /// Total liabilities over total assets, in percent.
    pub debt_ratio: Option<String>,
    /// Net income over total equity, in percent.
    pub roe: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_item_keeps_extra_fields() {
        let raw = json!({
            "rcept_no": "20240312000736",
            "sj_div": "BS",
            "account_nm": "자산총계",
            "thstrm_amount": "455905980000000",
            "frmtrm_amount": "448424507000000",
            "currency": "KRW"
        });

        let item: LineItem = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(item.account_name(), Some("자산총계"));
        assert_eq!(item.value.as_deref(), Some("455905980000000"));
        assert_eq!(item.extra.get("sj_div"), Some(&json!("BS")));

        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn test_line_item_missing_fields() {
        let item: LineItem = serde_json::from_value(json!({"sj_div": "IS"})).unwrap();
        assert_eq!(item.account_name(), None);
        assert_eq!(item.value, None);

        let empty = LineItem::new("", "100");
        assert_eq!(empty.account_name(), None);
    }

    #[test]
    fn test_upstream_success_without_list() {
        let response: UpstreamResponse =
            serde_json::from_value(json!({"status": "000", "message": "정상"})).unwrap();
        assert_eq!(response.into_line_items().unwrap(), Vec::new());
    }

    #[test]
    fn test_upstream_status_error() {
        let response: UpstreamResponse = serde_json::from_value(
            json!({"status": "013", "message": "조회된 데이타가 없습니다."}),
        )
        .unwrap();

        let err = response.into_line_items().unwrap_err();
        assert_eq!(
            err,
            DartError::UpstreamStatus {
                status: UpstreamStatus::NoData,
                message: "조회된 데이터가 없습니다.".to_string(),
            }
        );
    }

    #[test]
    fn test_report_code_parsing() {
        assert_eq!(ReportCode::default().code(), "11011");
        assert_eq!("11014".parse::<ReportCode>().unwrap(), ReportCode::ThirdQuarter);
        assert!(matches!(
            "99999".parse::<ReportCode>(),
            Err(DartError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_fs_division_parsing() {
        assert_eq!(FsDivision::default().code(), "CFS");
        assert_eq!("OFS".parse::<FsDivision>().unwrap(), FsDivision::Separate);
        assert!("cfs".parse::<FsDivision>().is_err());
    }

    #[test]
    fn test_summary_serializes_nulls_in_camel_case() {
        let summary = FinancialSummary {
            total_assets: Some(1000),
            debt_ratio: Some("40.00".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["totalAssets"], json!(1000));
        assert_eq!(value["debtRatio"], json!("40.00"));
        assert_eq!(value["nonCurrentLiabilities"], Value::Null);
        assert_eq!(value["roe"], Value::Null);
        assert_eq!(value.as_object().unwrap().len(), 15);
    }
}
