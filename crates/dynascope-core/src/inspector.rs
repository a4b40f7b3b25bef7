//! Table enumeration and descriptor reporting.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{DynascopeError, DynascopeResult};
use crate::store::TableStore;

/// Outcome of an inspection run.
#[derive(Debug, Default)]
pub struct InspectSummary {
    /// Tables whose descriptors were written to the report.
    pub described: Vec<String>,
    /// Tables skipped because their describe call failed.
    pub skipped: Vec<SkippedTable>,
}

/// A table the inspector could not describe.
#[derive(Debug)]
pub struct SkippedTable {
    /// The table name.
    pub table: String,
    /// The rendered failure reason.
    pub reason: String,
}

/// Enumerates every table in a store and records each schema descriptor.
///
/// The report file receives, per table, a raw indented-JSON block followed by
/// a labeled `Table Name` / `Details:` block; the same descriptor is echoed
/// to the console writer. The file is flushed after each table so progress
/// made before a crash stays on disk.
#[derive(Debug)]
pub struct TableInspector<S> {
    store: S,
}

impl<S: TableStore> TableInspector<S> {
    /// Create an inspector over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run a full inspection, writing the report to the file at `output`.
    ///
    /// The report file is opened before the first store call; an unwritable
    /// destination aborts the run with nothing fetched. An empty store is
    /// success: the file exists and contains zero blocks.
    pub async fn run<C: Write>(
        &self,
        output: &Path,
        console: &mut C,
    ) -> DynascopeResult<InspectSummary> {
        let mut file = File::create(output).map_err(|e| DynascopeError::io(output, e))?;
        self.inspect_into(&mut file, console).await
    }

    /// Inspect into arbitrary writers; `report` receives the durable blocks.
    ///
    /// A table whose describe call fails is skipped with a warning and
    /// recorded in the summary; the remaining tables are still processed.
    pub async fn inspect_into<W: Write, C: Write>(
        &self,
        report: &mut W,
        console: &mut C,
    ) -> DynascopeResult<InspectSummary> {
        let names = self.store.list_tables().await?;
        info!(tables = names.len(), "listed store tables");

        let mut summary = InspectSummary::default();
        for name in names {
            let descriptor = match self.store.describe_table(&name).await {
                Ok(descriptor) => descriptor,
                Err(err) => {
                    warn!(table = %name, error = %err, "skipping table, describe failed");
                    summary.skipped.push(SkippedTable {
                        table: name,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            let json = serde_json::to_string_pretty(&descriptor)?;

            writeln!(console, "Table Name: {name}").map_err(DynascopeError::Output)?;
            writeln!(console, "{json}").map_err(DynascopeError::Output)?;

            writeln!(report, "{json}").map_err(DynascopeError::Output)?;
            writeln!(report, "Table Name: {name}").map_err(DynascopeError::Output)?;
            writeln!(report, "Details:").map_err(DynascopeError::Output)?;
            writeln!(report, "{json}").map_err(DynascopeError::Output)?;
            writeln!(report).map_err(DynascopeError::Output)?;
            report.flush().map_err(DynascopeError::Output)?;

            summary.described.push(name);
        }

        Ok(summary)
    }
}
