//! Resolved graph -> persisted document.

use super::{LockedPackage, Lockfile};
use crate::resolve::ResolvedDeps;

/// Builds the persisted document for `deps`.
///
/// Packages come out in the graph's key order. Edge versions are dropped and
/// only names are kept; a package whose dependencies were never computed is
/// written the same way as one with no dependencies.
pub fn encode(deps: &ResolvedDeps) -> Lockfile {
    let package = deps
        .iter()
        .map(|(id, inner)| LockedPackage {
            name: id.name.clone(),
            version: id.version.clone(),
            dependencies: inner
                .iter()
                .flatten()
                .map(|dep| dep.name.clone())
                .collect(),
        })
        .collect();

    Lockfile::new(package)
}
