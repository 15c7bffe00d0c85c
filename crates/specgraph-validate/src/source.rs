//! # Spec Sources
//!
//! A [`SpecSource`] turns a path into a merged [`SpecCollection`]. The
//! validation pipeline does not care how; it only needs a default path and
//! a loader.
//!
//! [`FsSpecSource`] reads the layout operators keep their specs in:
//!
//! ```text
//! specs/
//!   apps/web.yml
//!   bundles/core.yml
//!   libs/common.yml
//!   services/mongo.yml
//! ```
//!
//! The file stem is the spec name. A path that points at a single YAML
//! file is read as one nested mapping keyed by kind instead.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use specgraph_core::{LoadError, SpecCollection, SpecKind};

/// Supplies spec collections to the validation pipeline.
pub trait SpecSource {
    /// The operator-configured spec location.
    fn resolve_default_path(&self) -> Result<PathBuf, LoadError>;

    /// Parse and merge every spec found under `path`.
    fn load(&self, path: &Path) -> Result<SpecCollection, LoadError>;
}

/// Loads specs from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsSpecSource {
    default_path: Option<PathBuf>,
}

impl FsSpecSource {
    /// A source whose default path is `default_path`, if any.
    pub fn new(default_path: Option<PathBuf>) -> Self {
        Self { default_path }
    }
}

impl SpecSource for FsSpecSource {
    fn resolve_default_path(&self) -> Result<PathBuf, LoadError> {
        self.default_path.clone().ok_or(LoadError::NoDefaultPath)
    }

    fn load(&self, path: &Path) -> Result<SpecCollection, LoadError> {
        if path.is_file() {
            let value = read_yaml(path)?;
            return SpecCollection::from_value(value);
        }

        let mut collection = SpecCollection::new();
        for kind in SpecKind::ALL {
            let dir = path.join(kind.plural());
            if !dir.is_dir() {
                tracing::debug!(dir = %dir.display(), "no spec directory for kind");
                continue;
            }
            for file in spec_files(&dir)? {
                let Some(name) = file.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let document = read_yaml(&file)?;
                if collection.insert(kind, name, document).is_some() {
                    return Err(LoadError::DuplicateSpec {
                        kind,
                        name: name.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            path = %path.display(),
            specs = collection.len(),
            "loaded spec collection"
        );
        Ok(collection)
    }
}

/// YAML files directly under `dir`, sorted, skipping hidden entries.
fn spec_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let io_err = |source: std::io::Error| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(true, |n| n.starts_with('.'));
        let yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml") | Some("yaml")
        );
        if path.is_file() && yaml && !hidden {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read one YAML document. An empty document is an empty mapping.
fn read_yaml(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    let value: Value = serde_yaml::from_str(&content).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(match value {
        Value::Null => Value::Object(Map::new()),
        other => other,
    })
}
