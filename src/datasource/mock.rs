//! Mock catalog source for testing without network calls.

use super::{CatalogSource, CatalogSourceError};
use crate::domain::SheetRow;
use async_trait::async_trait;

/// Mock catalog source that returns predefined rows.
#[derive(Debug, Clone, Default)]
pub struct MockCatalogSource {
    rows: Vec<SheetRow>,
    fail: bool,
}

impl MockCatalogSource {
    /// Create a new mock source with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source whose fetch always fails. Exercises the
    /// endpoint error path that a recovering provider never takes.
    pub fn failing() -> Self {
        Self {
            rows: Vec::new(),
            fail: true,
        }
    }

    /// Add a row to the mock catalog.
    pub fn with_row(mut self, row: SheetRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Add multiple rows to the mock catalog.
    pub fn with_rows(mut self, rows: Vec<SheetRow>) -> Self {
        self.rows.extend(rows);
        self
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<SheetRow>, CatalogSourceError> {
        if self.fail {
            return Err(CatalogSourceError::Network(
                "mock upstream failure".to_string(),
            ));
        }
        Ok(self.rows.clone())
    }
}
