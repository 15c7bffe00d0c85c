//! # Validation Pipeline
//!
//! Drives a full validation run:
//!
//! 1. The spec path must exist.
//! 2. The spec source loads the collection.
//! 3. Minimum content, schema conformance, reference integrity and cycle
//!    freedom are checked, in that order.
//!
//! The first failure is returned unchanged. There is no partial success:
//! a run either returns the validated [`SpecGraph`] after notifying
//! completion, or fails with one [`SpecError`].

use std::path::Path;

use specgraph_core::{SpecCollection, SpecError, SpecGraph};
use specgraph_schema::SchemaValidator;

use crate::cycles::check_cycle_free;
use crate::fields::validate_fields;
use crate::minimum::check_bare_minimum;
use crate::notify::Notifier;
use crate::references::check_references;
use crate::source::SpecSource;

/// Runs the validation stages with a compiled set of schemas.
#[derive(Debug)]
pub struct SpecValidator {
    schemas: SchemaValidator,
}

impl SpecValidator {
    /// Compile the built-in schemas.
    pub fn new() -> Result<Self, SpecError> {
        Ok(Self {
            schemas: SchemaValidator::new()?,
        })
    }

    /// Run every in-memory stage over an already loaded collection.
    pub fn validate_collection(&self, specs: &SpecCollection) -> Result<SpecGraph, SpecError> {
        check_bare_minimum(specs)?;
        let graph = validate_fields(&self.schemas, specs)?;
        check_references(&graph)?;
        check_cycle_free(&graph)?;
        Ok(graph)
    }

    /// Validate the specs at `path`, loading them through `source`.
    pub fn validate_path<S, N>(
        &self,
        source: &S,
        path: &Path,
        notifier: &N,
    ) -> Result<SpecGraph, SpecError>
    where
        S: SpecSource + ?Sized,
        N: Notifier + ?Sized,
    {
        notifier.notify(&format!("Validating specs at path {}", path.display()));
        if !path.exists() {
            return Err(SpecError::NotFound(path.to_path_buf()));
        }

        let specs = source.load(path)?;
        tracing::debug!(specs = specs.len(), "running validation stages");
        let graph = self.validate_collection(&specs)?;

        notifier.notify("Validation complete");
        Ok(graph)
    }
}

/// Validate the specs at `path` with a fresh [`SpecValidator`].
pub fn validate_specs_from_path<S, N>(
    source: &S,
    path: &Path,
    notifier: &N,
) -> Result<SpecGraph, SpecError>
where
    S: SpecSource + ?Sized,
    N: Notifier + ?Sized,
{
    SpecValidator::new()?.validate_path(source, path, notifier)
}

/// Validate the specs at the source's configured default path.
pub fn validate_specs<S, N>(source: &S, notifier: &N) -> Result<SpecGraph, SpecError>
where
    S: SpecSource + ?Sized,
    N: Notifier + ?Sized,
{
    let path = source.resolve_default_path()?;
    validate_specs_from_path(source, &path, notifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    use serde_json::json;
    use specgraph_core::{LoadError, SpecKind, StructuralError};

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Notifier for Recorder {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    /// Serves one in-memory collection for any existing path.
    struct Fixed {
        specs: SpecCollection,
        default_path: Option<PathBuf>,
    }

    impl SpecSource for Fixed {
        fn resolve_default_path(&self) -> Result<PathBuf, LoadError> {
            self.default_path.clone().ok_or(LoadError::NoDefaultPath)
        }

        fn load(&self, _path: &Path) -> Result<SpecCollection, LoadError> {
            Ok(self.specs.clone())
        }
    }

    fn fixed(value: serde_json::Value) -> Fixed {
        Fixed {
            specs: SpecCollection::from_value(value).unwrap(),
            default_path: Some(std::env::temp_dir()),
        }
    }

    #[test]
    fn success_notifies_start_and_completion() {
        let source = fixed(json!({
            "bundles": {"b1": {"apps": ["app-a"]}},
            "apps": {"app-a": {"image": "x", "depends": {"apps": [], "libs": []}}}
        }));
        let recorder = Recorder::default();
        let graph = validate_specs(&source, &recorder).unwrap();

        assert!(graph.contains(SpecKind::App, "app-a"));
        let messages = recorder.0.borrow();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("Validating specs at path"));
        assert_eq!(messages[1], "Validation complete");
    }

    #[test]
    fn missing_path_is_not_found() {
        let source = fixed(json!({"bundles": {"b1": {"apps": []}}}));
        let recorder = Recorder::default();
        let missing = std::env::temp_dir().join("specgraph-no-such-dir-4f1c");
        let err = validate_specs_from_path(&source, &missing, &recorder).unwrap_err();

        assert!(matches!(err, SpecError::NotFound(ref p) if *p == missing));
        assert_eq!(recorder.0.borrow().len(), 1, "no completion on failure");
    }

    #[test]
    fn no_default_path_is_a_load_error() {
        let mut source = fixed(json!({}));
        source.default_path = None;
        let err = validate_specs(&source, &Recorder::default()).unwrap_err();
        assert!(matches!(err, SpecError::Load(LoadError::NoDefaultPath)));
    }

    #[test]
    fn structural_check_runs_before_schema_check() {
        // The app is invalid, but the missing bundle is reported first.
        let specs = SpecCollection::from_value(json!({
            "apps": {"app-a": {"image": "x", "build": "."}}
        }))
        .unwrap();
        let err = SpecValidator::new()
            .unwrap()
            .validate_collection(&specs)
            .unwrap_err();
        assert!(matches!(err, SpecError::Structural(StructuralError::NoBundles)));
    }

    #[test]
    fn schema_check_runs_before_reference_check() {
        let specs = SpecCollection::from_value(json!({
            "bundles": {"b1": {"apps": ["ghost"]}},
            "apps": {"app-a": {"repo": "r"}}
        }))
        .unwrap();
        let err = SpecValidator::new()
            .unwrap()
            .validate_collection(&specs)
            .unwrap_err();
        assert!(matches!(err, SpecError::Schema(_)));
    }

    #[test]
    fn reference_check_runs_before_cycle_check() {
        let specs = SpecCollection::from_value(json!({
            "bundles": {"b1": {"apps": []}},
            "libs": {
                "lib-a": {"depends": {"libs": ["lib-a"]}},
                "lib-b": {"depends": {"libs": ["lib-z"]}}
            }
        }))
        .unwrap();
        let err = SpecValidator::new()
            .unwrap()
            .validate_collection(&specs)
            .unwrap_err();
        assert!(matches!(err, SpecError::Reference(_)));
    }
}
