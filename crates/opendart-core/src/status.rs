//! DART status codes.
//!
//! Every DART response carries a three-digit `status` field. `000` means the
//! query succeeded; anything else is reported to the caller through the
//! message table in [`UpstreamStatus::message`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Message used when an unknown status arrives without a message of its own.
pub const FALLBACK_MESSAGE: &str = "데이터가 없습니다.";

/// Status code reported by the DART API.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UpstreamStatus {
    /// `000`: normal response.
    Success,
    /// `010`: the credential is not registered.
    UnregisteredKey,
    /// `011`: the credential cannot be used.
    UnusableKey,
    /// `012`: the calling IP is not allowed.
    InaccessibleIp,
    /// `013`: no data matched the query.
    NoData,
    /// `020`: request limit exceeded.
    RateLimited,
    /// `021`: too many companies queried.
    CompanyLimitExceeded,
    /// `100`: a required field is missing or invalid.
    InvalidField,
    /// `101`: inappropriate access.
    InvalidAccess,
    /// `800`: DART is under maintenance.
    Maintenance,
    /// `900`: undefined upstream failure.
    Undefined,
    /// `901`: the account's data retention period expired.
    AccountExpired,
    /// Any code not listed above.
    Other(String),
}

impl UpstreamStatus {
    /// Parses a raw status code. Unknown codes are kept verbatim.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "000" => Self::Success,
            "010" => Self::UnregisteredKey,
            "011" => Self::UnusableKey,
            "012" => Self::InaccessibleIp,
            "013" => Self::NoData,
            "020" => Self::RateLimited,
            "021" => Self::CompanyLimitExceeded,
            "100" => Self::InvalidField,
            "101" => Self::InvalidAccess,
            "800" => Self::Maintenance,
            "900" => Self::Undefined,
            "901" => Self::AccountExpired,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the three-digit wire code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Success => "000",
            Self::UnregisteredKey => "010",
            Self::UnusableKey => "011",
            Self::InaccessibleIp => "012",
            Self::NoData => "013",
            Self::RateLimited => "020",
            Self::CompanyLimitExceeded => "021",
            Self::InvalidField => "100",
            Self::InvalidAccess => "101",
            Self::Maintenance => "800",
            Self::Undefined => "900",
            Self::AccountExpired => "901",
            Self::Other(code) => code,
        }
    }

    /// Returns true for `000`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the fixed message for a known code, `None` for unknown ones.
    #[must_use]
    pub fn known_message(&self) -> Option<&'static str> {
        let message = match self {
            Self::Success => "정상 조회",
            Self::UnregisteredKey => "등록되지 않은 인증키입니다.",
            Self::UnusableKey => "사용할 수 없는 인증키입니다.",
            Self::InaccessibleIp => "접근할 수 없는 IP입니다.",
            Self::NoData => "조회된 데이터가 없습니다.",
            Self::RateLimited => "요청 제한을 초과하였습니다.",
            Self::CompanyLimitExceeded => "조회 가능한 회사 개수가 초과하였습니다.",
            Self::InvalidField => "필수 요청 값이 누락되었거나 올바르지 않습니다.",
            Self::InvalidAccess => "부적절한 접근입니다.",
            Self::Maintenance => "시스템 점검 중입니다.",
            Self::Undefined => "정의되지 않은 오류가 발생하였습니다.",
            Self::AccountExpired => "사용자 계정의 개인정보 보유기간이 만료되었습니다.",
            Self::Other(_) => return None,
        };
        Some(message)
    }

    /// Resolves the message reported to the caller.
    ///
    /// Known codes use the fixed table. Unknown codes pass the upstream's own
    /// message through, falling back to [`FALLBACK_MESSAGE`] when it is absent or blank.
    #[must_use]
    pub fn message(&self, upstream_message: Option<&str>) -> String {
        if let Some(known) = self.known_message() {
            return known.to_string();
        }
        upstream_message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string()
    }
}

impl fmt::Display for UpstreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for UpstreamStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for UpstreamStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}
