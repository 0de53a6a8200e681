//! Directory traversal
//!
//! Entries are visited children-first so renaming a directory never
//! invalidates paths still waiting to be processed.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::result::RenameResult;

/// Visit every target under `roots` and collect one result per entry
///
/// A file root is processed itself. A directory root has its children
/// processed (all descendants when `recursive`), but is never renamed itself.
/// Errors reading an entry are recorded and traversal continues.
pub fn walk<F>(roots: &[PathBuf], recursive: bool, mut visit: F) -> Vec<RenameResult>
where
    F: FnMut(&Path, bool) -> RenameResult,
{
    let mut results = Vec::new();

    for root in roots {
        let metadata = match fs::metadata(root) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Cannot access {}: {}", root.display(), e);
                results.push(RenameResult::failed(root, &display_name(root), false, e));
                continue;
            }
        };

        if !metadata.is_dir() {
            results.push(visit(root, false));
            continue;
        }

        debug!("Walking {} (recursive: {})", root.display(), recursive);
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(if recursive { usize::MAX } else { 1 })
            .contents_first(true)
            .sort_by_file_name();

        for entry in walker {
            match entry {
                Ok(entry) => results.push(visit(entry.path(), entry.file_type().is_dir())),
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                    warn!("Cannot read {}: {}", path.display(), e);
                    results.push(RenameResult::failed(&path, &display_name(&path), false, e));
                }
            }
        }
    }

    results
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
