#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/opendart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! DART financial statement proxy.
//!
//! This crate re-exports the core types and the upstream client, and adds the
//! [`StatementService`] pipeline plus an axum router that serves it.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use opendart::{DartClient, StatementParams, StatementService};
//!
//! #[tokio::main]
//! async fn main() -> opendart::Result<()> {
//!     let service = StatementService::new(
//!         Arc::new(DartClient::new()?),
//!         std::env::var("DART_API_KEY").ok(),
//!     );
//!
//!     let report = service
//!         .fetch_report(&StatementParams::new("00126380", "2023"))
//!         .await?;
//!     println!("{:?}", report.summary);
//!
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use opendart_core::*;

// Upstream client
pub use opendart_client::{DART_API_BASE, DEFAULT_TIMEOUT, DartClient};

mod report;
pub use report::StatementReport;

mod service;
pub use service::StatementService;

/// HTTP surface.
pub mod server;
pub use server::{ApiError, build_router};
