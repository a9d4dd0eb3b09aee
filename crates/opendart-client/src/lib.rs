#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/opendart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! DART Open API client.
//!
//! # Usage
//!
//! ```rust,ignore
//! use opendart_client::DartClient;
//! use opendart_core::{DisclosureProvider, StatementParams, StatementQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DartClient::new()?;
//!
//!     let params = StatementParams::new("00126380", "2023");
//!     let query = StatementQuery::from_params(Some("your_api_key"), &params)?;
//!
//!     let response = client.fetch_statement(&query).await?;
//!     println!("{} rows", response.into_line_items()?.len());
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use opendart_core::{DartError, DisclosureProvider, Result, StatementQuery, UpstreamResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL for the DART Open API.
pub const DART_API_BASE: &str = "https://opendart.fss.or.kr/api";

/// Single-company full financial statement endpoint.
const STATEMENT_ENDPOINT: &str = "fnlttSinglAcntAll.json";

/// Default bound on a single upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// DART Open API client.
///
/// Holds no credential of its own: the key travels inside each
/// [`StatementQuery`], so one client can serve every request.
#[derive(Debug, Clone)]
pub struct DartClient {
    client: Client,
    api_base: String,
    timeout: Duration,
}

impl DartClient {
    /// Create a client for the public DART endpoint with the default timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| DartError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client))
    }

    /// Create a client around a pre-configured [`reqwest::Client`].
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            api_base: DART_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different API base (a mirror or a test server).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the full statement endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/{STATEMENT_ENDPOINT}", self.api_base)
    }

    /// Returns the configured per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Map a reqwest failure, dropping the URL so the credential never reaches logs or callers.
fn transport_error(e: reqwest::Error) -> DartError {
    if e.is_timeout() {
        return DartError::UpstreamTransport("request to DART timed out".to_string());
    }
    DartError::UpstreamTransport(e.without_url().to_string())
}

#[async_trait]
impl DisclosureProvider for DartClient {
    fn name(&self) -> &str {
        "OpenDART"
    }

    async fn fetch_statement(&self, query: &StatementQuery) -> Result<UpstreamResponse> {
        debug!(
            corp_code = %query.corp_code,
            bsns_year = %query.bsns_year,
            reprt_code = %query.report_code,
            fs_div = %query.fs_div,
            "DART request"
        );

        let response = self
            .client
            .get(self.endpoint())
            .query(&query.to_pairs())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "DART returned a non-success HTTP status");
            return Err(DartError::UpstreamTransport(format!("HTTP {status}")));
        }

        let text = response.text().await.map_err(transport_error)?;

        let body: UpstreamResponse = serde_json::from_str(&text)
            .map_err(|e| DartError::UpstreamTransport(format!("invalid JSON body: {e}")))?;

        debug!(
            status = %body.status,
            rows = body.list.as_ref().map_or(0, Vec::len),
            "DART response"
        );

        Ok(body)
    }
}
