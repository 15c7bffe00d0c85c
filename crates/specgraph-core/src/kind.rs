//! # Spec Kinds
//!
//! The four namespaces of the spec tree. Names are unique within a kind
//! but an app, a lib and a service may share a name.

use serde::{Deserialize, Serialize};

/// The type of a named spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecKind {
    /// A deployable application.
    App,
    /// A group of apps deployed together.
    Bundle,
    /// A shared library mounted into apps.
    Lib,
    /// A third-party service apps link against.
    Service,
}

impl SpecKind {
    /// All kinds, in the order they are laid out in a spec tree.
    pub const ALL: [SpecKind; 4] = [
        SpecKind::App,
        SpecKind::Bundle,
        SpecKind::Lib,
        SpecKind::Service,
    ];

    /// Plural key used in the collection and as the on-disk directory name.
    pub fn plural(self) -> &'static str {
        match self {
            SpecKind::App => "apps",
            SpecKind::Bundle => "bundles",
            SpecKind::Lib => "libs",
            SpecKind::Service => "services",
        }
    }

    /// Singular name, used in diagnostics about a single entity.
    pub fn singular(self) -> &'static str {
        match self {
            SpecKind::App => "app",
            SpecKind::Bundle => "bundle",
            SpecKind::Lib => "lib",
            SpecKind::Service => "service",
        }
    }

    /// Parse a plural key (`apps`, `libs`, ...).
    pub fn from_plural(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.plural() == key)
    }
}

impl std::fmt::Display for SpecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.plural())
    }
}
