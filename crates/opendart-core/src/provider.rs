//! Provider trait for fetching statements from DART.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::Result, query::StatementQuery, types::UpstreamResponse};

/// Source of single-company financial statements.
///
/// Implementations perform exactly one upstream attempt per call and never
/// cache. Transport and decoding failures are reported as
/// [`DartError::UpstreamTransport`](crate::DartError::UpstreamTransport); a
/// non-success DART status is *not* an error at this layer and comes back
/// inside the [`UpstreamResponse`].
#[async_trait]
pub trait DisclosureProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "OpenDART").
    fn name(&self) -> &str;

    /// Fetches the full financial statement described by `query`.
    async fn fetch_statement(&self, query: &StatementQuery) -> Result<UpstreamResponse>;
}
