//! Financial summary extraction.
//!
//! DART reports a statement as a flat list of named rows. Each summary field is
//! resolved by a [`KeywordRule`]: the keywords are tried in order, and the first
//! keyword that is a substring of some row's account name picks that row. Later
//! keywords are never consulted once an earlier one matches, even if they would
//! pick a row that appears earlier in the list.
//!
//! Matching is a plain case-sensitive substring test on the account name.

use crate::types::{FinancialSummary, LineItem};

/// A field of [`FinancialSummary`] resolved from line items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SummaryField {
    /// Revenue.
    Sales,
    /// Operating profit.
    OperatingProfit,
    /// Net income.
    NetIncome,
    /// Total assets.
    TotalAssets,
    /// Current assets.
    CurrentAssets,
    /// Non-current assets.
    NonCurrentAssets,
    /// Total liabilities.
    TotalLiabilities,
    /// Current liabilities.
    CurrentLiabilities,
    /// Non-current liabilities.
    NonCurrentLiabilities,
    /// Total equity.
    TotalEquity,
    /// Operating cash flow.
    OperatingCashFlow,
    /// Investing cash flow.
    InvestingCashFlow,
    /// Financing cash flow.
    FinancingCashFlow,
}

/// Ordered account-name fragments that resolve one summary field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordRule {
    /// Field this rule fills.
    pub field: SummaryField,
    /// Candidate substrings, highest priority first.
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    /// Finds the row selected by this rule.
    #[must_use]
    pub fn find<'a>(&self, items: &'a [LineItem]) -> Option<&'a LineItem> {
        self.keywords.iter().find_map(|keyword| {
            items.iter().find(|item| {
                item.account_name()
                    .is_some_and(|name| name.contains(keyword))
            })
        })
    }

    /// Resolves the rule to an amount.
    ///
    /// Returns `None` when no row matches or the matched row's amount does not parse.
    #[must_use]
    pub fn resolve(&self, items: &[LineItem]) -> Option<i64> {
        self.find(items)
            .and_then(|item| item.value.as_deref())
            .and_then(parse_amount)
    }
}

/// Keyword rules for every summary field.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    // Income Statement
    KeywordRule {
        field: SummaryField::Sales,
        keywords: &["매출액", "수익", "영업수익"],
    },
    KeywordRule {
        field: SummaryField::OperatingProfit,
        keywords: &["영업이익", "영업손익"],
    },
    KeywordRule {
        field: SummaryField::NetIncome,
        keywords: &["당기순이익", "당기순손익"],
    },
    // Balance Sheet
    KeywordRule {
        field: SummaryField::TotalAssets,
        keywords: &["자산총계", "자산 총계"],
    },
    KeywordRule {
        field: SummaryField::CurrentAssets,
        keywords: &["유동자산"],
    },
    KeywordRule {
        field: SummaryField::NonCurrentAssets,
        keywords: &["비유동자산"],
    },
    KeywordRule {
        field: SummaryField::TotalLiabilities,
        keywords: &["부채총계", "부채 총계"],
    },
    KeywordRule {
        field: SummaryField::CurrentLiabilities,
        keywords: &["유동부채"],
    },
    KeywordRule {
        field: SummaryField::NonCurrentLiabilities,
        keywords: &["비유동부채"],
    },
    KeywordRule {
        field: SummaryField::TotalEquity,
        keywords: &["자본총계", "자본 총계"],
    },
    // Cash Flow Statement
    KeywordRule {
        field: SummaryField::OperatingCashFlow,
        keywords: &["영업활동현금흐름", "영업활동으로인한현금흐름"],
    },
    KeywordRule {
        field: SummaryField::InvestingCashFlow,
        keywords: &["투자활동현금흐름", "투자활동으로인한현금흐름"],
    },
    KeywordRule {
        field: SummaryField::FinancingCashFlow,
        keywords: &["재무활동현금흐름", "재무활동으로인한현금흐름"],
    },
];

/// Parses a raw DART amount.
///
/// Thousands separators are stripped before parsing as a signed base-10 integer.
/// Anything else that fails to parse (e.g. `"-"` for an empty cell) yields `None`.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<i64> {
    let digits: String = raw.trim().chars().filter(|c| *c != ',').collect();
    digits.parse().ok()
}

/// Computes `numerator / denominator * 100` rendered with two decimal places.
///
/// Returns `None` if either input is missing or the denominator is zero. A
/// zero numerator always renders as `0.00`, whatever the denominator's sign.
#[must_use]
pub fn percentage(numerator: Option<i64>, denominator: Option<i64>) -> Option<String> {
    let (numerator, denominator) = (numerator?, denominator?);
    if denominator == 0 {
        return None;
    }
    // Adding 0.0 folds -0.0 into 0.0.
    let ratio = numerator as f64 / denominator as f64 * 100.0 + 0.0;
    Some(format!("{ratio:.2}"))
}

/// Reduces a statement's line items to a [`FinancialSummary`].
#[must_use]
pub fn extract_summary(items: &[LineItem]) -> FinancialSummary {
    let mut summary = FinancialSummary::default();

    for rule in KEYWORD_RULES {
        let amount = rule.resolve(items);
        let slot = match rule.field {
            SummaryField::Sales => &mut summary.sales,
            SummaryField::OperatingProfit => &mut summary.operating_profit,
            SummaryField::NetIncome => &mut summary.net_income,
            SummaryField::TotalAssets => &mut summary.total_assets,
            SummaryField::CurrentAssets => &mut summary.current_assets,
            SummaryField::NonCurrentAssets => &mut summary.non_current_assets,
            SummaryField::TotalLiabilities => &mut summary.total_liabilities,
            SummaryField::CurrentLiabilities => &mut summary.current_liabilities,
            SummaryField::NonCurrentLiabilities => &mut summary.non_current_liabilities,
            SummaryField::TotalEquity => &mut summary.total_equity,
            SummaryField::OperatingCashFlow => &mut summary.operating_cash_flow,
            SummaryField::InvestingCashFlow => &mut summary.investing_cash_flow,
            SummaryField::FinancingCashFlow => &mut summary.financing_cash_flow,
        };
        *slot = amount;
    }

    summary.debt_ratio = percentage(summary.total_liabilities, summary.total_assets);
    summary.roe = percentage(summary.net_income, summary.total_equity);

    summary
}
