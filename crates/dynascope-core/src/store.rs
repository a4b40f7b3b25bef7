//! The store abstraction: list, describe, and point-read.

use async_trait::async_trait;

use dynascope_model::types::Item;
use dynascope_model::{ItemKey, TableDescription};

use crate::error::DynascopeResult;

/// Read-only view of a key-value store.
///
/// One explicitly constructed store object is passed into each operation and
/// lives for the duration of a run. Connections are stateless per call, so
/// there is no teardown.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// List every table name in the store, in the store's listing order.
    ///
    /// Implementations follow pagination to exhaustion; callers always see
    /// the complete set.
    async fn list_tables(&self) -> DynascopeResult<Vec<String>>;

    /// Fetch the schema descriptor for one table.
    async fn describe_table(&self, table: &str) -> DynascopeResult<TableDescription>;

    /// Point-read the item under `key` in `table`.
    ///
    /// Absence is `Ok(None)`, a normal negative result, never an error.
    async fn get_item(&self, table: &str, key: &ItemKey) -> DynascopeResult<Option<Item>>;
}
