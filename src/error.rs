//! Error taxonomy for the lockfile layer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LockfileError {
    /// The persisted schema version is not the one this build understands.
    /// There is no migration; the caller re-resolves from scratch.
    #[error("invalid lockfile version found: {0}")]
    InvalidLockfileVersion(i64),

    /// Malformed syntax, wrong field types, missing fields or duplicate packages.
    #[error("failed to read lockfile:\n{0}")]
    FailedToReadLockfile(String),

    #[error("manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("failed to serialize lockfile: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LockfileError>;

impl LockfileError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        LockfileError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_error_names_found_version() {
        let err = LockfileError::InvalidLockfileVersion(2);
        assert_eq!(err.to_string(), "invalid lockfile version found: 2");
    }

    #[test]
    fn read_error_carries_diagnostic() {
        let err = LockfileError::FailedToReadLockfile("expected `=`".to_string());
        assert_eq!(err.to_string(), "failed to read lockfile:\nexpected `=`");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = LockfileError::io(
            "write",
            "/tmp/pkglock.lock",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write /tmp/pkglock.lock: denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
