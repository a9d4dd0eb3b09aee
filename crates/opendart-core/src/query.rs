//! Caller parameter validation.
//!
//! [`StatementParams`] is what a caller sends; [`StatementQuery`] is what the
//! upstream client is allowed to send to DART. The only way from one to the
//! other is [`StatementQuery::from_params`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    error::{DartError, Result},
    types::{FsDivision, ReportCode},
};

/// Raw caller parameters, as they arrive on the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementParams {
    /// DART corporation code.
    pub company: Option<String>,
    /// Four-digit business year.
    pub year: Option<String>,
    /// Report type code, defaults to `11011`.
    pub report_type: Option<String>,
    /// Statement division code, defaults to `CFS`.
    pub fs_div: Option<String>,
}

impl StatementParams {
    /// Creates parameters for a company and year, leaving the codes at their defaults.
    #[must_use]
    pub fn new(company: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
            year: Some(year.into()),
            ..Default::default()
        }
    }

    /// Sets the report type code.
    #[must_use]
    pub fn with_report_type(mut self, report_type: impl Into<String>) -> Self {
        self.report_type = Some(report_type.into());
        self
    }

    /// Sets the statement division code.
    #[must_use]
    pub fn with_fs_div(mut self, fs_div: impl Into<String>) -> Self {
        self.fs_div = Some(fs_div.into());
        self
    }
}

/// A validated statement request, ready to be sent upstream.
#[derive(Clone, PartialEq, Eq)]
pub struct StatementQuery {
    api_key: String,
    /// DART corporation code.
    pub corp_code: String,
    /// Four-digit business year.
    pub bsns_year: String,
    /// Report type.
    pub report_code: ReportCode,
    /// Statement division.
    pub fs_div: FsDivision,
}

impl fmt::Debug for StatementQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementQuery")
            .field("api_key", &"[REDACTED]")
            .field("corp_code", &self.corp_code)
            .field("bsns_year", &self.bsns_year)
            .field("report_code", &self.report_code)
            .field("fs_div", &self.fs_div)
            .finish()
    }
}

impl StatementQuery {
    /// Validates caller parameters against the server credential.
    ///
    /// The credential is checked first: its absence is a server fault and
    /// yields [`DartError::Configuration`]. Missing or malformed caller values
    /// yield [`DartError::InvalidRequest`].
    pub fn from_params(api_key: Option<&str>, params: &StatementParams) -> Result<Self> {
        let api_key = non_blank(api_key).ok_or_else(|| {
            DartError::Configuration("DART API key is not configured".to_string())
        })?;

        let corp_code = non_blank(params.company.as_deref())
            .ok_or_else(|| DartError::InvalidRequest("company is required".to_string()))?;
        let bsns_year = non_blank(params.year.as_deref())
            .ok_or_else(|| DartError::InvalidRequest("year is required".to_string()))?;

        if bsns_year.len() != 4 || !bsns_year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DartError::InvalidRequest(format!(
                "year must be a four-digit year: {bsns_year}"
            )));
        }

        let report_code = non_blank(params.report_type.as_deref())
            .map(str::parse::<ReportCode>)
            .transpose()?
            .unwrap_or_default();
        let fs_div = non_blank(params.fs_div.as_deref())
            .map(str::parse::<FsDivision>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            api_key: api_key.to_string(),
            corp_code: corp_code.to_string(),
            bsns_year: bsns_year.to_string(),
            report_code,
            fs_div,
        })
    }

    /// Returns the upstream query pairs in DART's parameter names.
    #[must_use]
    pub fn to_pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("crtfc_key", self.api_key.as_str()),
            ("corp_code", self.corp_code.as_str()),
            ("bsns_year", self.bsns_year.as_str()),
            ("reprt_code", self.report_code.code()),
            ("fs_div", self.fs_div.code()),
        ]
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let params = StatementParams::new("00126380", "2023");
        let query = StatementQuery::from_params(Some("key"), &params).unwrap();

        assert_eq!(query.corp_code, "00126380");
        assert_eq!(query.bsns_year, "2023");
        assert_eq!(query.report_code, ReportCode::Annual);
        assert_eq!(query.fs_div, FsDivision::Consolidated);
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let params = StatementParams::new("00126380", "2023");
        assert!(matches!(
            StatementQuery::from_params(None, &params),
            Err(DartError::Configuration(_))
        ));
        assert!(matches!(
            StatementQuery::from_params(Some("  "), &params),
            Err(DartError::Configuration(_))
        ));
    }

    #[test]
    fn test_missing_key_checked_before_params() {
        let params = StatementParams::default();
        assert!(matches!(
            StatementQuery::from_params(None, &params),
            Err(DartError::Configuration(_))
        ));
    }

    #[test]
    fn test_missing_company_or_year() {
        let no_company = StatementParams {
            year: Some("2023".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            StatementQuery::from_params(Some("key"), &no_company),
            Err(DartError::InvalidRequest(_))
        ));

        let empty_year = StatementParams::new("00126380", "");
        assert!(matches!(
            StatementQuery::from_params(Some("key"), &empty_year),
            Err(DartError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_malformed_year() {
        for year in ["23", "2023a", "２０２３", "20231"] {
            let params = StatementParams::new("00126380", year);
            assert!(
                matches!(
                    StatementQuery::from_params(Some("key"), &params),
                    Err(DartError::InvalidRequest(_))
                ),
                "{year}"
            );
        }
    }

    #[test]
    fn test_explicit_codes_and_unknown_codes() {
        let params = StatementParams::new("00126380", "2023")
            .with_report_type("11012")
            .with_fs_div("OFS");
        let query = StatementQuery::from_params(Some("key"), &params).unwrap();
        assert_eq!(query.report_code, ReportCode::HalfYear);
        assert_eq!(query.fs_div, FsDivision::Separate);

        let blank_codes = StatementParams::new("00126380", "2023")
            .with_report_type("")
            .with_fs_div(" ");
        let query = StatementQuery::from_params(Some("key"), &blank_codes).unwrap();
        assert_eq!(query.report_code, ReportCode::Annual);
        assert_eq!(query.fs_div, FsDivision::Consolidated);

        let bad = StatementParams::new("00126380", "2023").with_report_type("12345");
        assert!(matches!(
            StatementQuery::from_params(Some("key"), &bad),
            Err(DartError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_pairs_and_redaction() {
        let params = StatementParams::new(" 00126380 ", "2023");
        let query = StatementQuery::from_params(Some("secret_key_12345"), &params).unwrap();

        assert_eq!(
            query.to_pairs(),
            [
                ("crtfc_key", "secret_key_12345"),
                ("corp_code", "00126380"),
                ("bsns_year", "2023"),
                ("reprt_code", "11011"),
                ("fs_div", "CFS"),
            ]
        );

        let debug_str = format!("{query:?}");
        assert!(!debug_str.contains("secret_key_12345"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
