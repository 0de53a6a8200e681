//! Conflict resolution by numeric suffix
//!
//! `file.txt` → `file_2.txt` → `file_3.txt` → ...
//!
//! The result is only correct against the directory state observed while
//! probing. Another process creating the same name between the probe and the
//! rename is not guarded against.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::pipeline::{CleanError, split_name};

/// Answers whether a path is already taken
pub trait ExistenceProbe {
    /// `Ok(false)` only when the path is known to be free
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

/// Probe backed by the real filesystem
///
/// Dangling symlinks count as taken. Errors other than the path being absent
/// (e.g. a name too long for the filesystem) are returned as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl ExistenceProbe for FsProbe {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// In-memory probe over a fixed set of paths
impl ExistenceProbe for HashSet<PathBuf> {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.contains(path))
    }
}

/// Run `probe` on `path`, tagging failures with the path
pub fn is_taken<P>(probe: &P, path: &Path) -> Result<bool, CleanError>
where
    P: ExistenceProbe + ?Sized,
{
    probe.exists(path).map_err(|source| CleanError::Probe {
        path: path.to_path_buf(),
        source,
    })
}

/// Outcome of resolving a desired name inside a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// `dir` joined with `name`
    pub path: PathBuf,
    pub name: String,
    /// Whether a numeric suffix was added
    pub auto_renamed: bool,
}

/// Find a name in `dir` that doesn't collide with an existing entry
///
/// If `desired` is free it is returned as is. Otherwise `_2`, `_3`, ... is
/// inserted before the extension and the first free candidate wins. A probe
/// error ends the search, so a candidate the filesystem rejects outright
/// can't keep it looping.
pub fn resolve<P>(probe: &P, dir: &Path, desired: &str) -> Result<Resolution, CleanError>
where
    P: ExistenceProbe + ?Sized,
{
    let path = dir.join(desired);
    if !is_taken(probe, &path)? {
        return Ok(Resolution {
            path,
            name: desired.to_string(),
            auto_renamed: false,
        });
    }

    let (base, ext) = split_name(desired, false);
    let ext = if ext.is_empty() {
        String::new()
    } else {
        format!(".{}", ext)
    };

    let mut n: u64 = 2;
    loop {
        let candidate = format!("{}_{}{}", base, n, ext);
        let path = dir.join(&candidate);
        if !is_taken(probe, &path)? {
            debug!("Resolved conflict for {} as {}", desired, candidate);
            return Ok(Resolution {
                path,
                name: candidate,
                auto_renamed: true,
            });
        }
        n += 1;
    }
}
