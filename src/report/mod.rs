//! Output for the diagnostic commands.
//!
//! Each command renders either a plain text table or JSON.

pub mod json;
pub mod table;

use std::time::SystemTime;

use serde::Serialize;

use crate::lockfile::Freshness;
use crate::resolve::{PackageId, ResolvedDeps};

/// One locked package, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRow {
    pub name: String,
    pub version: String,
    /// `None` when the lockfile records no dependencies.
    pub dependencies: Option<Vec<String>>,
}

pub fn package_rows(deps: &ResolvedDeps) -> Vec<PackageRow> {
    deps.iter()
        .map(|(id, inner)| PackageRow {
            name: id.name.clone(),
            version: id.version.clone(),
            dependencies: inner
                .as_ref()
                .map(|edges| edges.iter().map(PackageId::to_string).collect()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub project_dir: String,
    pub outdated: bool,
    pub lockfile_modified: Option<String>,
    pub manifest_modified: Option<String>,
}

impl StatusReport {
    pub fn new(project_dir: &std::path::Path, freshness: &Freshness) -> Self {
        StatusReport {
            project_dir: project_dir.display().to_string(),
            outdated: freshness.is_outdated(),
            lockfile_modified: freshness.lockfile.map(format_time),
            manifest_modified: freshness.manifest.map(format_time),
        }
    }
}

pub fn format_time(time: SystemTime) -> String {
    chrono::DateTime::<chrono::Utc>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
