//! Data fetching against the external store.
//!
//! The store owns all the interesting work (join planning, aggregation,
//! window functions); this module only performs one connect-execute-disconnect
//! cycle per fetch and materializes the rows. No pooling, no retry, no
//! timeout: a hanging store blocks the caller, a known limitation.

mod mock;
mod mysql;

pub use mock::MockStore;
pub use mysql::MySqlStore;

use crate::table::ResultTable;
use async_trait::async_trait;

/// Error type for fetches.
///
/// The split matters to the UI: an unreachable store and a rejected query
/// surface as different messages, and neither is retried.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Store unreachable: {0}")]
    Connection(String),

    #[error("Query rejected by store: {0}")]
    Query(String),
}

/// A source of query results.
///
/// [`MySqlStore`] is the real implementation; [`MockStore`] stands in for
/// tests and offline runs.
#[async_trait]
pub trait Store: Send + Sync {
    /// Execute one query and materialize the full result set.
    async fn fetch(&self, sql: &str) -> Result<ResultTable, StoreError>;
}
