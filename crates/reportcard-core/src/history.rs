//! Append-only text history of generated reports.
//!
//! The history file is a sequence of report blocks, each followed by a line
//! containing exactly [`DELIMITER`]. Entries are never rewritten; lookups
//! are a linear scan over the whole file.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::HistoryError;
use crate::model::{Report, NAME_LABEL};

/// Line separating report blocks.
pub const DELIMITER: &str = "---";

/// Default history file name, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// Banner left between delimiters by the older `--- Report ---` header form.
const LEGACY_BANNER: &str = "Report";

/// Handle to a history file on disk.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a report followed by a delimiter line.
    ///
    /// The file is created if missing and closed before returning, whether
    /// or not the write succeeded.
    pub fn append(&self, report: &Report) -> Result<(), HistoryError> {
        let write_err = |error| HistoryError::Write {
            path: self.path.clone(),
            error,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        file.write_all(format!("{}\n{DELIMITER}\n", report.to_text()).as_bytes())
            .map_err(write_err)?;

        tracing::info!(
            student = %report.student_name,
            path = %self.path.display(),
            "appended report to history"
        );
        Ok(())
    }

    /// Read the whole history file.
    ///
    /// A missing file means there is no history yet and yields `Ok(None)`.
    pub fn read_all(&self) -> Result<Option<String>, HistoryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no history file");
                Ok(None)
            }
            Err(error) => Err(HistoryError::Read {
                path: self.path.clone(),
                error,
            }),
        }
    }

    /// Find the first block whose text starts with `Student Name: <name>`.
    ///
    /// Matching is a case-sensitive prefix match, so a query of `Al` also
    /// finds a report for `Alice`. Returns `Ok(None)` when nothing matches
    /// or no history exists.
    pub fn find_by_name(&self, name: &str) -> Result<Option<String>, HistoryError> {
        let Some(content) = self.read_all()? else {
            return Ok(None);
        };
        let needle = format!("{NAME_LABEL}{name}");
        let found = split_blocks(&content)
            .into_iter()
            .find(|block| block.starts_with(&needle))
            .map(str::to_string);
        tracing::debug!(name, found = found.is_some(), "history lookup");
        Ok(found)
    }

    /// All report blocks in append order.
    pub fn blocks(&self) -> Result<Vec<String>, HistoryError> {
        let content = self.read_all()?.unwrap_or_default();
        Ok(split_blocks(&content)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// All parseable reports in append order.
    ///
    /// Blocks that do not parse are logged and skipped.
    pub fn reports(&self) -> Result<Vec<Report>, HistoryError> {
        let blocks = self.blocks()?;
        let mut reports = Vec::with_capacity(blocks.len());
        for (index, block) in blocks.iter().enumerate() {
            match Report::parse_block(block) {
                Ok(report) => reports.push(report),
                Err(e) => tracing::warn!(index, error = %e, "skipping malformed history block"),
            }
        }
        Ok(reports)
    }
}

/// Split history text into trimmed, non-empty blocks.
pub fn split_blocks(content: &str) -> Vec<&str> {
    content
        .split(DELIMITER)
        .map(str::trim)
        .filter(|block| !block.is_empty() && *block != LEGACY_BANNER)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::calculate;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> HistoryStore {
        HistoryStore::new(dir.path().join("history.txt"))
    }

    fn report(name: &str, scores: [&str; 4]) -> Report {
        calculate(name, &scores).unwrap()
    }

    #[test]
    fn missing_file_is_no_history() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.read_all().unwrap().is_none());
        assert!(store.find_by_name("Alice").unwrap().is_none());
        assert!(store.blocks().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn append_writes_block_and_delimiter() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let alice = report("Alice", ["80", "70", "60", "90"]);
        store.append(&alice).unwrap();

        let content = store.read_all().unwrap().unwrap();
        assert_eq!(content, format!("{}\n---\n", alice.to_text()));
    }

    #[test]
    fn blocks_preserve_append_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let names = ["Alice", "Bob", "Cara", "Dan", "Eve"];
        for name in names {
            store.append(&report(name, ["50", "50", "50", "50"])).unwrap();
        }

        let blocks = store.blocks().unwrap();
        assert_eq!(blocks.len(), names.len());
        for (block, name) in blocks.iter().zip(names) {
            assert!(block.starts_with(&format!("Student Name: {name}\n")));
        }
        let content = store.read_all().unwrap().unwrap();
        assert_eq!(content.lines().filter(|l| *l == DELIMITER).count(), 5);
    }

    #[test]
    fn find_returns_exact_block() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let bob = report("Bob", ["50", "40", "30", "20"]);
        let alice = report("Alice", ["80", "70", "60", "90"]);
        store.append(&bob).unwrap();
        store.append(&alice).unwrap();

        let found = store.find_by_name("Alice").unwrap().unwrap();
        assert_eq!(found, alice.to_text().trim());
        assert!(store.find_by_name("Zed").unwrap().is_none());
    }

    #[test]
    fn find_is_case_sensitive_prefix_match() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(&report("Alice", ["80", "70", "60", "90"])).unwrap();

        assert!(store.find_by_name("alice").unwrap().is_none());
        assert!(store.find_by_name("Al").unwrap().is_some());
    }

    #[test]
    fn find_returns_first_of_duplicates() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(&report("Alice", ["10", "10", "10", "10"])).unwrap();
        store.append(&report("Alice", ["90", "90", "90", "90"])).unwrap();

        let found = store.find_by_name("Alice").unwrap().unwrap();
        assert!(found.contains("Total: 40\n"));
    }

    #[test]
    fn reports_skip_legacy_banner_and_garbage() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let alice = report("Alice", ["80", "70", "60", "90"]);
        std::fs::write(
            store.path(),
            format!(
                "--- Report ---\n{}\n---\nnot a report\n---\n",
                alice.to_text()
            ),
        )
        .unwrap();
        store.append(&report("Bob", ["50", "40", "30", "20"])).unwrap();

        let names: Vec<String> = store
            .reports()
            .unwrap()
            .into_iter()
            .map(|r| r.student_name)
            .collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[test]
    fn reports_parse_appended_entries() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let alice = report("Alice", ["80", "70", "60", "90"]);
        let bob = report("Bob", ["50", "40", "30", "20"]);
        store.append(&alice).unwrap();
        store.append(&bob).unwrap();

        assert_eq!(store.reports().unwrap(), vec![alice, bob]);
    }

    #[test]
    fn append_to_unwritable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("missing").join("history.txt"));
        let err = store
            .append(&report("Alice", ["80", "70", "60", "90"]))
            .unwrap_err();
        assert!(matches!(err, HistoryError::Write { .. }));
        assert!(err.to_string().starts_with("Failed to save report history"));
    }
}
