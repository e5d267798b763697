//! Decides whether an existing lockfile can be trusted.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use tracing::debug;

use super::{LOCKFILE_NAME, MANIFEST_NAME};
use crate::error::{LockfileError, Result};

/// Modification times observed for one project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    /// `None` when there is no lockfile.
    pub lockfile: Option<SystemTime>,
    /// `None` only when the lockfile is missing and the manifest was never looked at.
    pub manifest: Option<SystemTime>,
}

impl Freshness {
    /// A lockfile is outdated when it is missing or strictly older than the
    /// manifest. Equal times count as fresh.
    pub fn is_outdated(&self) -> bool {
        match (self.lockfile, self.manifest) {
            (None, _) => true,
            (Some(lock), Some(manifest)) => lock < manifest,
            (Some(_), None) => true,
        }
    }
}

/// Reads both modification times.
///
/// A missing lockfile short-circuits: it is outdated whatever the manifest
/// says. Otherwise the manifest must exist.
pub fn check(project_dir: &Path) -> Result<Freshness> {
    let lockfile = match modified(&project_dir.join(LOCKFILE_NAME))? {
        Some(time) => time,
        None => {
            debug!(dir = %project_dir.display(), "no lockfile");
            return Ok(Freshness {
                lockfile: None,
                manifest: None,
            });
        }
    };

    let manifest_path = project_dir.join(MANIFEST_NAME);
    let manifest = match modified(&manifest_path)? {
        Some(time) => time,
        None => return Err(LockfileError::ManifestNotFound(manifest_path)),
    };

    Ok(Freshness {
        lockfile: Some(lockfile),
        manifest: Some(manifest),
    })
}

pub fn is_outdated(project_dir: &Path) -> Result<bool> {
    let freshness = check(project_dir)?;
    let outdated = freshness.is_outdated();
    debug!(dir = %project_dir.display(), outdated, "checked lockfile freshness");
    Ok(outdated)
}

fn modified(path: &Path) -> Result<Option<SystemTime>> {
    match fs::metadata(path) {
        Ok(metadata) => metadata
            .modified()
            .map(Some)
            .map_err(|e| LockfileError::io("stat", path, e)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LockfileError::io("stat", path, e)),
    }
}
