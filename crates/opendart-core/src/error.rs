//! Error types for proxy operations.
//!
//! This module defines [`DartError`], which covers every way a statement request
//! can fail between the caller and the DART API.

use thiserror::Error;

use crate::status::UpstreamStatus;

/// Errors that can occur while serving a statement request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DartError {
    /// The server is missing required configuration (the API credential).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The caller omitted or malformed a required parameter.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// DART answered with a status other than `000`.
    #[error("Upstream status {}: {message}", status.code())]
    UpstreamStatus {
        /// Status reported by DART.
        status: UpstreamStatus,
        /// Message resolved through the status table.
        message: String,
    },

    /// The request to DART failed or its body could not be read as JSON.
    #[error("Upstream transport error: {0}")]
    UpstreamTransport(String),
}

impl DartError {
    /// Returns true if the failure lies with the server rather than the caller.
    #[must_use]
    pub const fn is_server_side(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::UpstreamTransport(_))
    }
}

/// Result type alias using [`DartError`].
pub type Result<T> = std::result::Result<T, DartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DartError::InvalidRequest("company is required".to_string());
        assert_eq!(err.to_string(), "Invalid request: company is required");

        let err = DartError::UpstreamStatus {
            status: UpstreamStatus::NoData,
            message: "조회된 데이터가 없습니다.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream status 013: 조회된 데이터가 없습니다."
        );
    }

    #[test]
    fn test_server_side_classification() {
        assert!(DartError::Configuration("missing key".into()).is_server_side());
        assert!(DartError::UpstreamTransport("timeout".into()).is_server_side());
        assert!(!DartError::InvalidRequest("year".into()).is_server_side());
    }
}
