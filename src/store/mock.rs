//! Fixed-response store for tests and offline runs.

use async_trait::async_trait;

use super::{Store, StoreError};
use crate::table::ResultTable;

/// A store that answers every fetch with the same canned response.
pub struct MockStore {
    response: Result<ResultTable, StoreError>,
}

impl MockStore {
    /// Always succeed with the given table.
    pub fn with_table(table: ResultTable) -> Self {
        Self { response: Ok(table) }
    }

    /// Always fail with the given error.
    pub fn failing(error: StoreError) -> Self {
        Self { response: Err(error) }
    }
}

#[async_trait]
impl Store for MockStore {
    async fn fetch(&self, _sql: &str) -> Result<ResultTable, StoreError> {
        self.response.clone()
    }
}
