//! collect-sources - concatenate matching source files into one text dump.
//!
//! Walks a directory tree and writes, for every file whose name ends with the
//! configured suffix, its relative path, its contents, and a blank line to a
//! single output file. The output is regenerated from scratch on every run.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `COLLECT_ROOT` | `.` | Directory tree to walk |
//! | `COLLECT_SUFFIX` | `.go` | File name suffix to keep |
//! | `COLLECT_OUTPUT` | `go_files.txt` | Dump file to write |
//! | `COLLECT_FOLLOW_SYMLINKS` | `false` | Follow symlinks while walking |
//! | `LOG_LEVEL` | `info` | Log level filter |

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use dynascope::{env_or, init_tracing, log_level};
use dynascope_core::collector::SourceCollector;

fn main() -> Result<()> {
    init_tracing(&log_level())?;

    let root = env_or("COLLECT_ROOT", ".");
    let suffix = env_or("COLLECT_SUFFIX", ".go");
    let output = env_or("COLLECT_OUTPUT", "go_files.txt");
    let follow_symlinks = env_or("COLLECT_FOLLOW_SYMLINKS", "false");
    let follow_symlinks =
        follow_symlinks == "1" || follow_symlinks.eq_ignore_ascii_case("true");

    let collector = SourceCollector::new(&root, &suffix).with_follow_links(follow_symlinks);
    let stats = collector
        .collect_to_path(Path::new(&output))
        .with_context(|| format!("collecting {suffix} files under {root}"))?;

    info!(
        files = stats.files,
        bytes = stats.bytes,
        output = %output,
        "source collection complete",
    );

    Ok(())
}
