//! Persisted document -> resolved graph.

use super::Lockfile;
use crate::error::{LockfileError, Result};
use crate::resolve::{PackageId, ResolvedDeps};

/// Rebuilds a resolved graph from a parsed lockfile.
///
/// Dependency edges get the placeholder version (`""`) since versions are not
/// persisted. An empty dependency list decodes to `None`. A package identity
/// listed twice is rejected instead of letting the later entry win.
pub fn decode(lock: &Lockfile) -> Result<ResolvedDeps> {
    let mut deps = ResolvedDeps::new();

    for package in &lock.package {
        let inner = if package.dependencies.is_empty() {
            None
        } else {
            Some(
                package
                    .dependencies
                    .iter()
                    .map(PackageId::unversioned)
                    .collect(),
            )
        };

        let id = PackageId::new(&package.name, &package.version);
        if deps.contains_key(&id) {
            return Err(LockfileError::FailedToReadLockfile(format!(
                "duplicate package `{}` version `{}`",
                id.name, id.version
            )));
        }
        deps.insert(id, inner);
    }

    Ok(deps)
}
