//! Recursive source collection into a single text dump.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{DynascopeError, DynascopeResult};

/// Totals reported after a collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    /// Number of files written to the dump.
    pub files: usize,
    /// Total content bytes written.
    pub bytes: u64,
}

/// Walks a directory tree and concatenates matching files into one dump.
///
/// Every regular file whose name ends with the suffix contributes its
/// root-relative path on one line, then its full contents, then a blank line
/// separator, in filesystem traversal order (no ordering guarantee across
/// platforms). Symlinks are not followed unless enabled; when they are, the
/// walker's cycle detection turns symlink loops into errors.
#[derive(Debug, Clone)]
pub struct SourceCollector {
    root: PathBuf,
    suffix: String,
    follow_links: bool,
}

impl SourceCollector {
    /// Create a collector for `root` keeping files whose name ends with `suffix`.
    pub fn new(root: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            suffix: suffix.into(),
            follow_links: false,
        }
    }

    /// Control whether symlinks are followed while walking the root.
    #[must_use]
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Collect into the file at `output`, creating or overwriting it.
    pub fn collect_to_path(&self, output: &Path) -> DynascopeResult<CollectStats> {
        let file = File::create(output).map_err(|e| DynascopeError::io(output, e))?;
        let mut writer = BufWriter::new(file);
        let stats = self.collect_into(&mut writer)?;
        writer.flush().map_err(DynascopeError::Output)?;
        Ok(stats)
    }

    /// Collect into an arbitrary writer.
    ///
    /// An unreadable file or a walk failure aborts the run with an I/O
    /// error; there is no partial-file recovery.
    pub fn collect_into<W: Write>(&self, out: &mut W) -> DynascopeResult<CollectStats> {
        let mut stats = CollectStats::default();

        for entry in WalkDir::new(&self.root).follow_links(self.follow_links) {
            let entry = entry.map_err(walk_error)?;
            if !entry.file_type().is_file() {
                continue;
            }
            if !entry.file_name().to_string_lossy().ends_with(&self.suffix) {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            let contents = fs::read_to_string(path).map_err(|e| DynascopeError::io(path, e))?;

            writeln!(out, "{}", relative.display()).map_err(DynascopeError::Output)?;
            writeln!(out, "{contents}").map_err(DynascopeError::Output)?;

            stats.files += 1;
            stats.bytes += contents.len() as u64;
            debug!(path = %relative.display(), "collected source file");
        }

        Ok(stats)
    }
}

fn walk_error(err: walkdir::Error) -> DynascopeError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
    DynascopeError::io(path, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_file(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_should_emit_path_contents_and_blank_separator() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "main.go", "package main\n");

        let mut out = Vec::new();
        let stats = SourceCollector::new(dir.path(), ".go")
            .collect_into(&mut out)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "main.go\npackage main\n\n");
        assert_eq!(stats.files, 1);
        assert_eq!(stats.bytes, 13);
    }

    #[test]
    fn test_should_collect_only_matching_files() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "a.go", "package a\n");
        write_file(dir.path(), "b.rs", "fn main() {}\n");
        write_file(dir.path(), "nested/deep/c.go", "package c\n");
        write_file(dir.path(), "nested/readme.md", "# nope\n");

        let mut out = Vec::new();
        let stats = SourceCollector::new(dir.path(), ".go")
            .collect_into(&mut out)
            .unwrap();
        let dump = String::from_utf8(out).unwrap();

        assert_eq!(stats.files, 2);
        assert!(dump.contains("a.go\npackage a\n"));
        assert!(dump.contains("package c\n"));
        assert!(!dump.contains("fn main"));
        assert!(!dump.contains("readme"));
    }

    #[test]
    fn test_should_write_root_relative_paths() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "nested/deep/c.go", "package c\n");

        let mut out = Vec::new();
        SourceCollector::new(dir.path(), ".go")
            .collect_into(&mut out)
            .unwrap();
        let dump = String::from_utf8(out).unwrap();

        let expected = Path::new("nested").join("deep").join("c.go");
        assert!(dump.starts_with(&format!("{}\n", expected.display())));
        assert!(!dump.contains(dir.path().to_str().unwrap()));
    }

    #[test]
    fn test_should_be_byte_identical_across_runs() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "one.go", "package one\n");
        write_file(dir.path(), "sub/two.go", "package two\n");

        let collector = SourceCollector::new(dir.path(), ".go");
        let mut first = Vec::new();
        let mut second = Vec::new();
        collector.collect_into(&mut first).unwrap();
        collector.collect_into(&mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_should_handle_tree_with_no_matches() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "notes.txt", "plain\n");

        let mut out = Vec::new();
        let stats = SourceCollector::new(dir.path(), ".go")
            .collect_into(&mut out)
            .unwrap();

        assert_eq!(stats, CollectStats::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_should_propagate_unreadable_file() {
        let dir = tempdir().unwrap();
        // Invalid UTF-8 makes read_to_string fail.
        fs::write(dir.path().join("bad.go"), [0xff_u8, 0xfe, 0x00]).unwrap();

        let mut out = Vec::new();
        let err = SourceCollector::new(dir.path(), ".go")
            .collect_into(&mut out)
            .unwrap_err();

        assert!(matches!(err, DynascopeError::Io { .. }));
    }

    #[test]
    fn test_should_overwrite_output_on_rerun() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "src/a.go", "package a\n");
        let output = dir.path().join("dump.txt");

        let collector = SourceCollector::new(dir.path().join("src"), ".go");
        collector.collect_to_path(&output).unwrap();
        let first = fs::read_to_string(&output).unwrap();
        collector.collect_to_path(&output).unwrap();
        let second = fs::read_to_string(&output).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, "a.go\npackage a\n\n");
    }

    #[test]
    fn test_should_fail_when_output_cannot_be_created() {
        let dir = tempdir().unwrap();
        let collector = SourceCollector::new(dir.path(), ".go");

        // A directory path cannot be created as a file.
        let err = collector.collect_to_path(dir.path()).unwrap_err();
        assert!(matches!(err, DynascopeError::Io { .. }));
    }
}
