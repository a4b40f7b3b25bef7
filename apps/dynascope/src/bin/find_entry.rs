//! find-entry - point-read one item by composite key.
//!
//! Issues a single lookup against the configured table and prints a
//! human-readable status line for both outcomes. Absence is a normal result,
//! not an error; connectivity and authorization failures are fatal.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DYNAMODB_REGION` | `eu-north-1` | Store region (`AWS_REGION` fallback) |
//! | `DYNAMODB_ENDPOINT_URL` | *(unset)* | Endpoint override for local emulators |
//! | `LOOKUP_TABLE` | `TournamentEntries` | Table to read from |
//! | `LOOKUP_PARTITION_KEY` | `tournamentId` | Partition key attribute name |
//! | `LOOKUP_PARTITION_VALUE` | `2024-12-15` | Partition key value |
//! | `LOOKUP_SORT_KEY` | `userId` | Sort key attribute name |
//! | `LOOKUP_SORT_VALUE` | `12ab9a21-3fc7-478e-b094-ba258a17951e` | Sort key value |
//! | `LOG_LEVEL` | `info` | Log level filter |

use anyhow::{Context, Result};

use dynascope::{env_or, init_tracing, log_level};
use dynascope_core::lookup::{ItemLookup, query_banner};
use dynascope_core::{DynamoTableStore, StoreConfig};
use dynascope_model::ItemKey;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(&log_level())?;

    let config = StoreConfig::from_env();
    let table = env_or("LOOKUP_TABLE", "TournamentEntries");
    let key = ItemKey::new(
        env_or("LOOKUP_PARTITION_KEY", "tournamentId"),
        env_or("LOOKUP_PARTITION_VALUE", "2024-12-15"),
    )
    .with_sort(
        env_or("LOOKUP_SORT_KEY", "userId"),
        env_or("LOOKUP_SORT_VALUE", "12ab9a21-3fc7-478e-b094-ba258a17951e"),
    );

    println!("{}", query_banner(&table, &key));

    let store = DynamoTableStore::connect(&config).await;
    let lookup = ItemLookup::new(store);
    let outcome = lookup
        .find(&table, &key)
        .await
        .with_context(|| format!("looking up {key} in {table}"))?;

    println!("{}", outcome.status_line());

    Ok(())
}
