//! Lockfile snapshots of a resolved dependency graph.
//!
//! Persists the resolver's output to `pkglock.lock` in the project directory:
//! - freshness: is the lockfile at least as new as the manifest
//! - encode / decode: graph <-> persisted document (lossy, see below)
//! - store: file I/O, toml text, schema version gate
//!
//! Dependency versions are never written. Decoding restores them as the
//! empty-string placeholder, and an empty dependency list always comes back
//! as `None`.

pub mod decode;
pub mod diff;
pub mod encode;
pub mod freshness;
pub mod store;

use serde::{Deserialize, Serialize};

pub use decode::decode;
pub use encode::encode;
pub use freshness::{is_outdated, Freshness};
pub use store::{generate, overwrite, read, GenerateOutcome};

pub const LOCKFILE_NAME: &str = "pkglock.lock";
pub const MANIFEST_NAME: &str = "pkglock.toml";

/// The only schema version this build reads or writes.
pub const LOCKFILE_VERSION: i64 = 1;

pub const LOCKFILE_HEADER: &str = "\
# This file is automatically generated by pkglock.
# It is not intended for manual editing.
";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedPackage {
    pub name: String,
    pub version: String,
    pub dependencies: Vec<String>,
}

/// Persisted document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lockfile {
    pub version: i64,
    pub package: Vec<LockedPackage>,
}

impl Lockfile {
    pub fn new(package: Vec<LockedPackage>) -> Self {
        Lockfile {
            version: LOCKFILE_VERSION,
            package,
        }
    }
}
