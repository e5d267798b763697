//! Lockfile comparison.
//!
//! Compares two resolved graphs and reports per-package changes:
//! - Matches packages by name (versions are what changes)
//! - Added, removed, version changed, dependency set changed
//!
//! A name locked at several versions on one side is compared as the sorted
//! list of its versions.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::resolve::{dependency_names, ResolvedDeps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffType {
    Added,
    Removed,
    VersionChanged,
    DependenciesChanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    pub name: String,
    pub old_versions: Vec<String>,
    pub new_versions: Vec<String>,
    /// Dependency names only present on the new side.
    pub added_dependencies: Vec<String>,
    /// Dependency names only present on the old side.
    pub removed_dependencies: Vec<String>,
    pub diff_type: DiffType,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DiffResult {
    pub entries: Vec<DiffEntry>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, diff_type: DiffType) -> usize {
        self.entries.iter().filter(|e| e.diff_type == diff_type).count()
    }
}

#[derive(Default)]
struct Side<'a> {
    versions: BTreeSet<&'a str>,
    dependencies: BTreeSet<&'a str>,
}

fn group_by_name(deps: &ResolvedDeps) -> BTreeMap<&str, Side<'_>> {
    let mut by_name: BTreeMap<&str, Side<'_>> = BTreeMap::new();
    for (id, inner) in deps {
        let side = by_name.entry(id.name.as_str()).or_default();
        side.versions.insert(id.version.as_str());
        side.dependencies.extend(dependency_names(inner));
    }
    by_name
}

fn owned(set: &BTreeSet<&str>) -> Vec<String> {
    set.iter().map(|s| s.to_string()).collect()
}

/// Compares `from` (old) against `to` (new). Entries are sorted by name.
pub fn compare(from: &ResolvedDeps, to: &ResolvedDeps) -> DiffResult {
    let from_map = group_by_name(from);
    let to_map = group_by_name(to);

    let names: BTreeSet<&str> = from_map.keys().chain(to_map.keys()).copied().collect();
    let mut entries = Vec::new();

    for name in names {
        let entry = match (from_map.get(name), to_map.get(name)) {
            (None, Some(new)) => DiffEntry {
                name: name.to_string(),
                old_versions: Vec::new(),
                new_versions: owned(&new.versions),
                added_dependencies: owned(&new.dependencies),
                removed_dependencies: Vec::new(),
                diff_type: DiffType::Added,
            },
            (Some(old), None) => DiffEntry {
                name: name.to_string(),
                old_versions: owned(&old.versions),
                new_versions: Vec::new(),
                added_dependencies: Vec::new(),
                removed_dependencies: owned(&old.dependencies),
                diff_type: DiffType::Removed,
            },
            (Some(old), Some(new)) => {
                let added: Vec<String> = new
                    .dependencies
                    .difference(&old.dependencies)
                    .map(|s| s.to_string())
                    .collect();
                let removed: Vec<String> = old
                    .dependencies
                    .difference(&new.dependencies)
                    .map(|s| s.to_string())
                    .collect();

                let diff_type = if old.versions != new.versions {
                    DiffType::VersionChanged
                } else if !added.is_empty() || !removed.is_empty() {
                    DiffType::DependenciesChanged
                } else {
                    continue;
                };

                DiffEntry {
                    name: name.to_string(),
                    old_versions: owned(&old.versions),
                    new_versions: owned(&new.versions),
                    added_dependencies: added,
                    removed_dependencies: removed,
                    diff_type,
                }
            }
            (None, None) => continue,
        };
        entries.push(entry);
    }

    DiffResult { entries }
}
