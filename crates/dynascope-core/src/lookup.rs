//! Single-item point lookup.

use dynascope_model::ItemKey;
use dynascope_model::types::Item;

use crate::error::DynascopeResult;
use crate::store::TableStore;

/// Result of a point lookup. These are the only two outcomes; there is no
/// retry or fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The item exists; attributes are returned unchanged from the store.
    Found(Item),
    /// No item lives under the key.
    Missing,
}

impl LookupOutcome {
    /// Returns `true` when the item exists.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Human-readable status line for console reporting.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self {
            Self::Found(item) => {
                let rendered = serde_json::to_string(item)
                    .unwrap_or_else(|_| "<unprintable item>".to_owned());
                format!("Item found: {rendered}")
            }
            Self::Missing => "Item not found.".to_owned(),
        }
    }
}

/// The banner printed before the store call is issued.
#[must_use]
pub fn query_banner(table: &str, key: &ItemKey) -> String {
    format!("Querying {table} for {key}")
}

/// Issues point reads against one store.
#[derive(Debug)]
pub struct ItemLookup<S> {
    store: S,
}

impl<S: TableStore> ItemLookup<S> {
    /// Create a lookup over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the item under `key` in `table`.
    ///
    /// Connectivity and authorization failures propagate; an absent item is
    /// the [`LookupOutcome::Missing`] value, not an error.
    pub async fn find(&self, table: &str, key: &ItemKey) -> DynascopeResult<LookupOutcome> {
        match self.store.get_item(table, key).await? {
            Some(item) => Ok(LookupOutcome::Found(item)),
            None => Ok(LookupOutcome::Missing),
        }
    }
}
