//! Plain text tables for terminal output.

use super::{PackageRow, StatusReport};
use crate::lockfile::diff::{DiffResult, DiffType};

pub fn render_packages(rows: &[PackageRow]) -> String {
    if rows.is_empty() {
        return String::from("No packages locked.\n");
    }

    let mut output = String::new();
    output.push_str(&format!("{:30} {:>12}  {}\n", "PACKAGE", "VERSION", "DEPENDENCIES"));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for row in rows {
        let deps = match &row.dependencies {
            Some(deps) => deps.join(", "),
            None => String::from("-"),
        };
        output.push_str(&format!(
            "{:30} {:>12}  {}\n",
            truncate(&row.name, 30),
            truncate(&row.version, 12),
            deps
        ));
    }

    output.push_str(&format!("\n{} packages\n", rows.len()));
    output
}

pub fn render_status(report: &StatusReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("project:  {}\n", report.project_dir));
    output.push_str(&format!(
        "lockfile: {}\n",
        report.lockfile_modified.as_deref().unwrap_or("missing")
    ));
    if let Some(manifest) = &report.manifest_modified {
        output.push_str(&format!("manifest: {manifest}\n"));
    }
    output.push_str(if report.outdated {
        "status:   outdated, re-resolve before trusting the lockfile\n"
    } else {
        "status:   up to date\n"
    });
    output
}

pub fn render_diff(result: &DiffResult) -> String {
    if result.is_empty() {
        return String::from("No changes detected.\n");
    }

    let mut output = String::new();
    for entry in &result.entries {
        let line = match entry.diff_type {
            DiffType::Added => format!("  [new] {} {}", entry.name, entry.new_versions.join(", ")),
            DiffType::Removed => format!(
                "  [gone] {} {}",
                entry.name,
                entry.old_versions.join(", ")
            ),
            DiffType::VersionChanged => format!(
                "  [~] {} {} -> {}",
                entry.name,
                entry.old_versions.join(", "),
                entry.new_versions.join(", ")
            ),
            DiffType::DependenciesChanged => {
                let mut parts = Vec::new();
                if !entry.added_dependencies.is_empty() {
                    parts.push(format!("+{}", entry.added_dependencies.join(" +")));
                }
                if !entry.removed_dependencies.is_empty() {
                    parts.push(format!("-{}", entry.removed_dependencies.join(" -")));
                }
                format!("  [deps] {} {}", entry.name, parts.join(" "))
            }
        };
        output.push_str(&line);
        output.push('\n');
    }

    output.push_str(&format!(
        "\n{} added, {} removed, {} changed\n",
        result.count(DiffType::Added),
        result.count(DiffType::Removed),
        result.count(DiffType::VersionChanged) + result.count(DiffType::DependenciesChanged)
    ));
    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}
