//! Resolved dependency graph shared with the resolver.
//!
//! The resolver owns this graph for the duration of one run and hands it to
//! the lockfile layer for encoding. Names and versions are opaque strings,
//! stored and compared verbatim.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(name, version)` pair identifying one resolved package.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PackageId {
    pub name: String,
    pub version: String,
}

impl PackageId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        PackageId {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Edge restored from a lockfile, whose version was never persisted.
    pub fn unversioned(name: impl Into<String>) -> Self {
        PackageId {
            name: name.into(),
            version: String::new(),
        }
    }

    /// True when the version is the empty placeholder written back by the
    /// decoder rather than a version the resolver actually picked.
    pub fn has_placeholder_version(&self) -> bool {
        self.version.is_empty()
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_placeholder_version() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.name, self.version)
        }
    }
}

/// Outgoing edges of one package. `None` means the dependencies were never
/// computed; after a lockfile round trip it also stands for "none recorded".
pub type Dependencies = Option<Vec<PackageId>>;

/// Package identity to its dependency edges, iterated in key order so that
/// repeated encodes are byte-identical.
pub type ResolvedDeps = BTreeMap<PackageId, Dependencies>;

/// Names of the edges, in their original order.
pub fn dependency_names(deps: &Dependencies) -> Vec<&str> {
    deps.as_deref()
        .unwrap_or_default()
        .iter()
        .map(|dep| dep.name.as_str())
        .collect()
}
