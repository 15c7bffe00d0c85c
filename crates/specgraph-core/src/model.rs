//! # Typed Spec Model
//!
//! Strongly-typed apps, libs, bundles and services. Values of these types
//! only exist for documents that passed schema validation; the conversion
//! lives in `specgraph-schema`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::SpecKind;

/// Where an app's container image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// A pre-built image reference, e.g. `mongo:3.0`.
    Image(String),
    /// A build descriptor, e.g. the directory holding a Dockerfile.
    Build(String),
}

impl Source {
    /// The image reference, if this is an image source.
    pub fn image(&self) -> Option<&str> {
        match self {
            Source::Image(image) => Some(image),
            Source::Build(_) => None,
        }
    }

    /// The build descriptor, if this is a build source.
    pub fn build(&self) -> Option<&str> {
        match self {
            Source::Build(build) => Some(build),
            Source::Image(_) => None,
        }
    }
}

/// Names an entity depends on, per related kind, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependencies {
    pub apps: Vec<String>,
    pub libs: Vec<String>,
    pub services: Vec<String>,
}

impl Dependencies {
    /// The names listed for one related kind. Bundles are never a
    /// dependency target, so that kind is always empty.
    pub fn names(&self, kind: SpecKind) -> &[String] {
        match kind {
            SpecKind::App => &self.apps,
            SpecKind::Lib => &self.libs,
            SpecKind::Service => &self.services,
            SpecKind::Bundle => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty() && self.libs.is_empty() && self.services.is_empty()
    }
}

/// A deployable application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub name: String,
    pub repo: Option<String>,
    pub source: Source,
    /// Build and ordering dependencies. `depends.apps` forms the app graph.
    pub depends: Dependencies,
    /// Optional runtime wiring. Checked for dangling names only.
    pub conditional_links: Dependencies,
}

/// A shared library. Libs may only depend on other libs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lib {
    pub name: String,
    pub repo: Option<String>,
    pub depends: Vec<String>,
}

/// A named group of apps deployed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub name: String,
    pub description: Option<String>,
    pub apps: Vec<String>,
}

/// A service definition. Its body is free-form and not schema checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub name: String,
    pub document: Value,
}

/// The typed view of a spec collection after schema validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecGraph {
    pub apps: BTreeMap<String, App>,
    pub bundles: BTreeMap<String, Bundle>,
    pub libs: BTreeMap<String, Lib>,
    pub services: BTreeMap<String, Service>,
}

impl SpecGraph {
    /// Whether a spec of the given kind and name is defined.
    pub fn contains(&self, kind: SpecKind, name: &str) -> bool {
        match kind {
            SpecKind::App => self.apps.contains_key(name),
            SpecKind::Bundle => self.bundles.contains_key(name),
            SpecKind::Lib => self.libs.contains_key(name),
            SpecKind::Service => self.services.contains_key(name),
        }
    }

    /// Names of every spec of one kind, in sorted order.
    pub fn names(&self, kind: SpecKind) -> Vec<&str> {
        match kind {
            SpecKind::App => self.apps.keys().map(String::as_str).collect(),
            SpecKind::Bundle => self.bundles.keys().map(String::as_str).collect(),
            SpecKind::Lib => self.libs.keys().map(String::as_str).collect(),
            SpecKind::Service => self.services.keys().map(String::as_str).collect(),
        }
    }

    /// Same-kind `depends` edges leaving `name`: `depends.apps` for an app,
    /// `depends.libs` for a lib. Conditional links are not edges.
    ///
    /// Returns `None` for kinds that do not form a dependency graph and for
    /// names that are not defined.
    pub fn depends_edges(&self, kind: SpecKind, name: &str) -> Option<&[String]> {
        match kind {
            SpecKind::App => self.apps.get(name).map(|app| app.depends.apps.as_slice()),
            SpecKind::Lib => self.libs.get(name).map(|lib| lib.depends.as_slice()),
            SpecKind::Bundle | SpecKind::Service => None,
        }
    }
}
