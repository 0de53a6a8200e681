//! Outcome of processing one entry

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of processing one file or directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameResult {
    /// Path of the entry, after the rename if one happened
    pub path: PathBuf,
    pub old_name: String,
    pub new_name: String,
    pub is_dir: bool,
    /// A rename was performed on disk
    pub renamed: bool,
    /// A numeric suffix was added to avoid a conflict
    pub auto_renamed: bool,
    /// The entry was left alone (dotfile)
    pub was_skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenameResult {
    /// Entry whose name stays as is
    pub fn unchanged(path: &Path, name: &str, is_dir: bool) -> Self {
        Self::planned(path, name, name, is_dir)
    }

    /// Entry that would be renamed to `new_name` (dry run or no-op)
    pub fn planned(path: &Path, old_name: &str, new_name: &str, is_dir: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
            is_dir,
            renamed: false,
            auto_renamed: false,
            was_skipped: false,
            error: None,
        }
    }

    pub fn skipped(path: &Path, name: &str, is_dir: bool) -> Self {
        Self {
            was_skipped: true,
            ..Self::unchanged(path, name, is_dir)
        }
    }

    /// Entry that failed; `new_name` is empty unless a target was computed
    pub fn failed(path: &Path, old_name: &str, is_dir: bool, error: impl ToString) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::planned(path, old_name, "", is_dir)
        }
    }

    pub fn with_target(mut self, new_name: &str) -> Self {
        self.new_name = new_name.to_string();
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the entry was renamed or auto-renamed
    pub fn is_changed(&self) -> bool {
        self.renamed || self.auto_renamed
    }
}

/// Counts over a batch of results
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub renamed: usize,
    pub pending: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl Summary {
    pub fn of(results: &[RenameResult]) -> Self {
        let mut summary = Self::default();
        for r in results {
            if r.has_error() {
                summary.errors += 1;
            } else if r.was_skipped {
                summary.skipped += 1;
            } else if r.is_changed() {
                summary.renamed += 1;
            } else if r.new_name != r.old_name {
                summary.pending += 1;
            } else {
                summary.unchanged += 1;
            }
        }
        summary
    }
}
