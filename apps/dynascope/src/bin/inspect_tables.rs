//! inspect-tables - enumerate store tables and record their descriptors.
//!
//! Lists every table in the configured store, fetches each schema descriptor,
//! prints it to the console, and appends a raw JSON block plus a labeled
//! `Table Name` / `Details:` block to the report file, flushing per table.
//! The report is regenerated from scratch on every run.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DYNAMODB_REGION` | `eu-north-1` | Store region (`AWS_REGION` fallback) |
//! | `DYNAMODB_ENDPOINT_URL` | *(unset)* | Endpoint override for local emulators |
//! | `TABLE_DETAILS_OUTPUT` | `table_details.txt` | Report file to write |
//! | `LOG_LEVEL` | `info` | Log level filter |

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use dynascope::{env_or, init_tracing, log_level};
use dynascope_core::inspector::TableInspector;
use dynascope_core::{DynamoTableStore, StoreConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(&log_level())?;

    let config = StoreConfig::from_env();
    let output = env_or("TABLE_DETAILS_OUTPUT", "table_details.txt");
    info!(region = %config.region, output = %output, "starting table inspection");

    let store = DynamoTableStore::connect(&config).await;
    let inspector = TableInspector::new(store);

    let mut console = io::stdout();
    let summary = inspector
        .run(Path::new(&output), &mut console)
        .await
        .with_context(|| format!("inspecting tables into {output}"))?;

    for skipped in &summary.skipped {
        warn!(table = %skipped.table, reason = %skipped.reason, "table was skipped");
    }
    info!(
        described = summary.described.len(),
        skipped = summary.skipped.len(),
        "table inspection complete",
    );

    Ok(())
}
