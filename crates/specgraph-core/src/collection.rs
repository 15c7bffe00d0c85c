//! # Spec Collection
//!
//! The raw, merged spec tree as handed over by a spec source: one mapping
//! from name to document per [`SpecKind`]. Documents are kept as
//! `serde_json::Value` because nothing about them has been checked yet.
//!
//! A collection is built once per validation run and only read afterwards.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::LoadError;
use crate::kind::SpecKind;

/// Raw spec documents grouped by kind and keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecCollection {
    apps: BTreeMap<String, Value>,
    bundles: BTreeMap<String, Value>,
    libs: BTreeMap<String, Value>,
    services: BTreeMap<String, Value>,
}

impl SpecCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a single nested mapping of the form
    /// `{"apps": {...}, "bundles": {...}, "libs": {...}, "services": {...}}`.
    ///
    /// Absent kinds are empty. Keys other than the four plural kind names
    /// are rejected, as is any kind whose value is not a mapping.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        let Value::Object(top) = value else {
            return Err(LoadError::Malformed(
                "spec collection must be a mapping of kinds".to_string(),
            ));
        };

        let mut collection = Self::new();
        for (key, specs) in top {
            let kind = SpecKind::from_plural(&key)
                .ok_or_else(|| LoadError::Malformed(format!("unknown spec kind '{key}'")))?;
            match specs {
                Value::Object(entries) => {
                    for (name, document) in entries {
                        collection.insert(kind, name, document);
                    }
                }
                Value::Null => {}
                _ => {
                    return Err(LoadError::Malformed(format!(
                        "'{key}' must be a mapping from name to spec"
                    )))
                }
            }
        }
        Ok(collection)
    }

    /// All documents of one kind.
    pub fn specs(&self, kind: SpecKind) -> &BTreeMap<String, Value> {
        match kind {
            SpecKind::App => &self.apps,
            SpecKind::Bundle => &self.bundles,
            SpecKind::Lib => &self.libs,
            SpecKind::Service => &self.services,
        }
    }

    fn specs_mut(&mut self, kind: SpecKind) -> &mut BTreeMap<String, Value> {
        match kind {
            SpecKind::App => &mut self.apps,
            SpecKind::Bundle => &mut self.bundles,
            SpecKind::Lib => &mut self.libs,
            SpecKind::Service => &mut self.services,
        }
    }

    /// Insert a document, returning the one it replaced, if any.
    pub fn insert(
        &mut self,
        kind: SpecKind,
        name: impl Into<String>,
        document: Value,
    ) -> Option<Value> {
        self.specs_mut(kind).insert(name.into(), document)
    }

    /// Look up one document.
    pub fn get(&self, kind: SpecKind, name: &str) -> Option<&Value> {
        self.specs(kind).get(name)
    }

    /// Whether a spec of the given kind and name exists.
    pub fn contains(&self, kind: SpecKind, name: &str) -> bool {
        self.specs(kind).contains_key(name)
    }

    /// Total number of documents across all kinds.
    pub fn len(&self) -> usize {
        SpecKind::ALL.iter().map(|k| self.specs(*k).len()).sum()
    }

    /// Returns true if the collection holds no documents at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
