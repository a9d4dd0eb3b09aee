//! Statement report pipeline.

use std::fmt;
use std::sync::Arc;

use tracing::{error, info, warn};

use opendart_core::{DartError, DisclosureProvider, Result, StatementParams, StatementQuery};

use crate::report::StatementReport;

/// Validates a request, fetches the statement once and builds the report.
///
/// The API key is read once when the service is built and never changes
/// afterwards. The service is cheap to clone and holds no per-request state.
#[derive(Clone)]
pub struct StatementService {
    provider: Arc<dyn DisclosureProvider>,
    api_key: Option<Arc<str>>,
}

impl fmt::Debug for StatementService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementService")
            .field("provider", &self.provider.name())
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl StatementService {
    /// Create a service over `provider`. A `None` key makes every request fail
    /// with [`DartError::Configuration`].
    #[must_use]
    pub fn new(provider: Arc<dyn DisclosureProvider>, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key: api_key.map(Arc::from),
        }
    }

    /// Returns true if an API key was supplied.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Runs one statement request end to end.
    ///
    /// Validation happens before any upstream call. A non-success DART status
    /// is returned as a report, not an error; configuration, validation and
    /// transport failures are returned as errors.
    pub async fn fetch_report(&self, params: &StatementParams) -> Result<StatementReport> {
        let query = StatementQuery::from_params(self.api_key.as_deref(), params)?;

        let response = self
            .provider
            .fetch_statement(&query)
            .await
            .inspect_err(|e| {
                error!(
                    provider = self.provider.name(),
                    corp_code = %query.corp_code,
                    error = %e,
                    "Statement fetch failed"
                );
            })?;

        match response.into_line_items() {
            Ok(items) => {
                info!(
                    corp_code = %query.corp_code,
                    bsns_year = %query.bsns_year,
                    rows = items.len(),
                    "Statement fetched"
                );
                Ok(StatementReport::success(&query, items))
            }
            Err(DartError::UpstreamStatus { status, message }) => {
                warn!(
                    corp_code = %query.corp_code,
                    bsns_year = %query.bsns_year,
                    %status,
                    %message,
                    "DART returned a non-success status"
                );
                Ok(StatementReport::upstream_failure(&query, status, message))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use opendart_core::{UpstreamResponse, UpstreamStatus};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct CannedProvider {
        response: Result<serde_json::Value>,
        calls: AtomicUsize,
    }

    impl CannedProvider {
        fn new(response: Result<serde_json::Value>) -> Arc<Self> {
            Arc::new(Self {
                response,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl DisclosureProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn fetch_statement(&self, _query: &StatementQuery) -> Result<UpstreamResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let body = self.response.clone()?;
            serde_json::from_value(body).map_err(|e| DartError::UpstreamTransport(e.to_string()))
        }
    }

    fn params() -> StatementParams {
        StatementParams::new("00126380", "2023")
    }

    #[tokio::test]
    async fn test_success_report() {
        let provider = CannedProvider::new(Ok(json!({
            "status": "000",
            "list": [
                {"account_nm": "자산총계", "thstrm_amount": "1,000"},
                {"account_nm": "부채총계", "thstrm_amount": "400"},
                {"account_nm": "자본총계", "thstrm_amount": "600"},
                {"account_nm": "당기순이익", "thstrm_amount": "60"}
            ]
        })));
        let service = StatementService::new(provider.clone(), Some("key".to_string()));

        let report = service.fetch_report(&params()).await.unwrap();

        assert!(report.is_success());
        assert_eq!(report.message, "정상 조회");
        assert_eq!(report.list.len(), 4);
        let summary = report.summary.unwrap();
        assert_eq!(summary.debt_ratio.as_deref(), Some("40.00"));
        assert_eq!(summary.roe.as_deref(), Some("10.00"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_data_status_is_a_report() {
        let provider = CannedProvider::new(Ok(json!({
            "status": "013",
            "message": "조회된 데이타가 없습니다."
        })));
        let service = StatementService::new(provider, Some("key".to_string()));

        let report = service.fetch_report(&params()).await.unwrap();

        assert_eq!(report.status, UpstreamStatus::NoData);
        assert_eq!(report.message, "조회된 데이터가 없습니다.");
        assert!(report.list.is_empty());
        assert!(report.summary.is_none());
    }

    #[tokio::test]
    async fn test_invalid_request_makes_no_call() {
        let provider = CannedProvider::new(Ok(json!({"status": "000"})));
        let service = StatementService::new(provider.clone(), Some("key".to_string()));

        let err = service
            .fetch_report(&StatementParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DartError::InvalidRequest(_)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_call() {
        let provider = CannedProvider::new(Ok(json!({"status": "000"})));
        let service = StatementService::new(provider.clone(), None);

        assert!(!service.has_api_key());
        let err = service.fetch_report(&params()).await.unwrap_err();

        assert!(matches!(err, DartError::Configuration(_)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let provider = CannedProvider::new(Err(DartError::UpstreamTransport(
            "connection reset".to_string(),
        )));
        let service = StatementService::new(provider, Some("key".to_string()));

        let err = service.fetch_report(&params()).await.unwrap_err();
        assert_eq!(err, DartError::UpstreamTransport("connection reset".to_string()));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let provider = CannedProvider::new(Ok(json!({"status": "000"})));
        let service = StatementService::new(provider, Some("secret_key_12345".to_string()));
        let debug_str = format!("{service:?}");
        assert!(!debug_str.contains("secret_key_12345"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
