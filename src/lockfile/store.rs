//! Lockfile persistence.
//!
//! Owns every filesystem touch of `pkglock.lock`. The project directory is
//! always passed in; nothing here reads the process working directory.
//!
//! Writes truncate in place and are not atomic. Callers running several
//! processes against one project must hold their own lock around these calls.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use super::{decode, encode, freshness, Lockfile, LOCKFILE_HEADER, LOCKFILE_NAME, LOCKFILE_VERSION};
use crate::error::{LockfileError, Result};
use crate::resolve::ResolvedDeps;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    Written,
    UpToDate,
}

/// Writes the lockfile only when it is missing or older than the manifest.
/// Meant to run right after the resolver.
pub fn generate(project_dir: &Path, deps: &ResolvedDeps) -> Result<GenerateOutcome> {
    if freshness::is_outdated(project_dir)? {
        overwrite(project_dir, deps)?;
        Ok(GenerateOutcome::Written)
    } else {
        debug!(dir = %project_dir.display(), "lockfile up to date, not rewriting");
        Ok(GenerateOutcome::UpToDate)
    }
}

/// Encodes `deps` and replaces whatever lockfile is there.
pub fn overwrite(project_dir: &Path, deps: &ResolvedDeps) -> Result<()> {
    let path = project_dir.join(LOCKFILE_NAME);
    let text = render(&encode(deps))?;

    fs::write(&path, text).map_err(|e| LockfileError::io("write", &path, e))?;

    info!(path = %path.display(), packages = deps.len(), "wrote lockfile");
    Ok(())
}

/// Loads the lockfile of `project_dir`.
///
/// `Ok(None)` when there is no lockfile; that is a cache miss, not an error.
pub fn read(project_dir: &Path) -> Result<Option<ResolvedDeps>> {
    read_path(&project_dir.join(LOCKFILE_NAME))
}

pub(crate) fn read_path(path: &Path) -> Result<Option<ResolvedDeps>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no lockfile to read");
            return Ok(None);
        }
        Err(e) => return Err(LockfileError::io("read", path, e)),
    };

    let deps = match parse(&text).and_then(|lock| decode(&lock)) {
        Ok(deps) => deps,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "rejected lockfile");
            return Err(e);
        }
    };

    debug!(path = %path.display(), packages = deps.len(), "read lockfile");
    Ok(Some(deps))
}

/// Serializes a document to lockfile text, header first.
pub fn render(lock: &Lockfile) -> Result<String> {
    let body = toml::to_string(lock)?;

    let mut out = String::with_capacity(LOCKFILE_HEADER.len() + 1 + body.len());
    out.push_str(LOCKFILE_HEADER);
    out.push('\n');
    out.push_str(&body);
    Ok(out)
}

/// Parses lockfile text.
///
/// The version is checked before the rest of the document so that a file
/// written by a newer format reports the mismatch, not a shape error.
pub fn parse(text: &str) -> Result<Lockfile> {
    let table: toml::Table = text
        .parse()
        .map_err(|e: toml::de::Error| LockfileError::FailedToReadLockfile(e.to_string()))?;

    let version = match table.get("version") {
        Some(toml::Value::Integer(v)) => *v,
        Some(other) => {
            return Err(LockfileError::FailedToReadLockfile(format!(
                "`version` must be an integer, found {}",
                other.type_str()
            )))
        }
        None => {
            return Err(LockfileError::FailedToReadLockfile(
                "missing field `version`".to_string(),
            ))
        }
    };

    if version != LOCKFILE_VERSION {
        return Err(LockfileError::InvalidLockfileVersion(version));
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| LockfileError::FailedToReadLockfile(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lockfile::LockedPackage;

    fn sample() -> Lockfile {
        Lockfile::new(vec![
            LockedPackage {
                name: "P1".to_string(),
                version: "1.0.0".to_string(),
                dependencies: vec![],
            },
            LockedPackage {
                name: "P2".to_string(),
                version: "2.0.0".to_string(),
                dependencies: vec!["P1".to_string()],
            },
        ])
    }

    #[test]
    fn render_starts_with_header() {
        let text = render(&sample()).unwrap();
        assert!(text.starts_with("# This file is automatically generated by pkglock.\n"));
        assert!(text.contains("version = 1"));
        assert!(text.contains("[[package]]"));
    }

    #[test]
    fn rendered_text_parses_back() {
        let text = render(&sample()).unwrap();
        assert_eq!(parse(&text).unwrap(), sample());
    }

    #[test]
    fn parse_accepts_handwritten_document() {
        let text = r#"
version = 1

[[package]]
name = "fmt"
version = "10.0.0"
dependencies = []

[[package]]
name = "spdlog"
version = "1.12.0"
dependencies = ["fmt"]
"#;
        let lock = parse(text).unwrap();
        assert_eq!(lock.package.len(), 2);
        assert_eq!(lock.package[1].dependencies, vec!["fmt"]);
    }

    #[test]
    fn missing_package_field_is_read_error() {
        match parse("version = 1\n") {
            Err(LockfileError::FailedToReadLockfile(msg)) => assert!(msg.contains("package")),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn empty_package_list_parses() {
        let lock = parse("version = 1\npackage = []\n").unwrap();
        assert_eq!(lock, Lockfile::new(Vec::new()));
    }

    #[test]
    fn empty_document_renders_package_key() {
        let text = render(&Lockfile::new(Vec::new())).unwrap();
        assert!(text.contains("package = []"));
        assert_eq!(parse(&text).unwrap(), Lockfile::new(Vec::new()));
    }

    #[test]
    fn version_mismatch_wins_over_shape_errors() {
        let text = "version = 2\n\n[[package]]\nname = 3\n";
        match parse(text) {
            Err(LockfileError::InvalidLockfileVersion(2)) => {}
            other => panic!("expected version error, got {other:?}"),
        }
    }

    #[test]
    fn missing_version_is_read_error() {
        let text = "[[package]]\nname = \"a\"\nversion = \"1\"\ndependencies = []\n";
        assert!(matches!(parse(text), Err(LockfileError::FailedToReadLockfile(_))));
    }

    #[test]
    fn string_version_is_read_error() {
        match parse("version = \"1\"\n") {
            Err(LockfileError::FailedToReadLockfile(msg)) => assert!(msg.contains("integer")),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn missing_dependencies_field_is_read_error() {
        let text = "version = 1\n\n[[package]]\nname = \"a\"\nversion = \"1\"\n";
        match parse(text) {
            Err(LockfileError::FailedToReadLockfile(msg)) => assert!(msg.contains("dependencies")),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn syntax_error_has_diagnostic() {
        match parse("version = = 1") {
            Err(LockfileError::FailedToReadLockfile(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
