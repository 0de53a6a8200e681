//! Per-entry rename processing
//!
//! Handles dotfile skipping, dry runs, destination conflicts (`--unique`) and
//! the rename itself.

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use super::result::RenameResult;
use crate::clean::unique::{self, ExistenceProbe};
use crate::clean::NameCleaner;

/// Options controlling what happens to a cleaned name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Perform renames instead of only reporting them
    pub apply: bool,
    /// Add a numeric suffix when the destination already exists
    pub unique: bool,
    /// Process names starting with a dot
    pub dotfiles: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            apply: false,
            unique: true,
            dotfiles: false,
        }
    }
}

/// Clean the name of one file or directory and rename it if requested
pub fn process_one<P>(
    path: &Path,
    is_dir: bool,
    options: &RunOptions,
    cleaner: &NameCleaner,
    probe: &P,
) -> RenameResult
where
    P: ExistenceProbe + ?Sized,
{
    let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return RenameResult::failed(path, "", is_dir, "path has no file name");
    };

    if name.starts_with('.') && name.len() > 1 && !options.dotfiles {
        debug!("Skipping dotfile: {}", path.display());
        return RenameResult::skipped(path, &name, is_dir);
    }

    let new_name = match cleaner.clean(path, &name, is_dir) {
        Ok(new_name) => new_name,
        Err(e) => {
            warn!("Failed to clean {}: {}", path.display(), e);
            return RenameResult::failed(path, &name, is_dir, e);
        }
    };

    if new_name == name || !options.apply {
        return RenameResult::planned(path, &name, &new_name, is_dir);
    }

    let dir = path.parent().unwrap_or(Path::new(""));
    let mut target = dir.join(&new_name);
    let mut final_name = new_name.clone();
    let mut auto_renamed = false;

    let taken = match unique::is_taken(probe, &target) {
        Ok(taken) => taken,
        Err(e) => {
            warn!("{}", e);
            return RenameResult::failed(path, &name, is_dir, e).with_target(&new_name);
        }
    };

    if taken && !is_case_change(path, &target, &name, &new_name) {
        if !options.unique {
            warn!("Destination exists: {}", target.display());
            return RenameResult::failed(path, &name, is_dir, "destination exists")
                .with_target(&new_name);
        }

        let resolution = match unique::resolve(probe, dir, &new_name) {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!("Failed to resolve conflict for {}: {}", path.display(), e);
                return RenameResult::failed(path, &name, is_dir, e).with_target(&new_name);
            }
        };
        target = resolution.path;
        final_name = resolution.name;
        auto_renamed = resolution.auto_renamed;
    }

    if let Err(e) = fs::rename(path, &target) {
        warn!("Failed to rename {}: {}", path.display(), e);
        return RenameResult::failed(path, &name, is_dir, e).with_target(&final_name);
    }

    info!("Renamed {} -> {}", path.display(), target.display());
    RenameResult {
        path: target,
        old_name: name,
        new_name: final_name,
        is_dir,
        renamed: true,
        auto_renamed,
        was_skipped: false,
        error: None,
    }
}

/// A case-only rename on a case-insensitive filesystem finds its own source
/// at the destination
fn is_case_change(source: &Path, target: &Path, old_name: &str, new_name: &str) -> bool {
    old_name.to_lowercase() == new_name.to_lowercase() && is_same_entry(source, target)
}

#[cfg(unix)]
fn is_same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_entry(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
