//! Catalog provider abstraction over the spreadsheet-backed data source.

use crate::domain::SheetRow;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod mock;
pub mod sheets;

pub use mock::MockCatalogSource;
pub use sheets::GoogleSheetsSource;

/// A source of catalog snapshots.
///
/// Each call returns the full catalog as of that call; there is no
/// pagination and no incremental update. Implementations that talk to a
/// remote service are expected to recover their own failures and return
/// an empty snapshot, so an unreachable spreadsheet looks exactly like
/// an empty one downstream.
#[async_trait]
pub trait CatalogSource: Send + Sync + fmt::Debug {
    async fn fetch_catalog(&self) -> Result<Vec<SheetRow>, CatalogSourceError>;
}

/// Error type for catalog source operations.
#[derive(Debug, Clone, Error)]
pub enum CatalogSourceError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Auth error: {0}")]
    Auth(String),
}
