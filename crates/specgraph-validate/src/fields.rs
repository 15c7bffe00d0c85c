//! # Field Validation
//!
//! Applies the per-kind schemas to every app, bundle and lib and builds the
//! typed [`SpecGraph`] the later stages work on.
//!
//! All apps are checked first, then all bundles, then all libs; the first
//! failing entity stops the pass. Services are carried over unchecked.

use specgraph_core::{Service, SchemaError, SpecCollection, SpecGraph, SpecKind};
use specgraph_schema::SchemaValidator;

/// Validate every schema-checked document and convert the collection.
pub fn validate_fields(
    schemas: &SchemaValidator,
    specs: &SpecCollection,
) -> Result<SpecGraph, SchemaError> {
    let mut graph = SpecGraph::default();

    for (name, document) in specs.specs(SpecKind::App) {
        let app = schemas.app(name, document)?;
        graph.apps.insert(name.clone(), app);
    }
    for (name, document) in specs.specs(SpecKind::Bundle) {
        let bundle = schemas.bundle(name, document)?;
        graph.bundles.insert(name.clone(), bundle);
    }
    for (name, document) in specs.specs(SpecKind::Lib) {
        let lib = schemas.lib(name, document)?;
        graph.libs.insert(name.clone(), lib);
    }
    for (name, document) in specs.specs(SpecKind::Service) {
        graph.services.insert(
            name.clone(),
            Service {
                name: name.clone(),
                document: document.clone(),
            },
        );
    }

    tracing::debug!(
        apps = graph.apps.len(),
        bundles = graph.bundles.len(),
        libs = graph.libs.len(),
        services = graph.services.len(),
        "spec fields conform to schemas"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use specgraph_core::Source;

    fn schemas() -> SchemaValidator {
        SchemaValidator::new().unwrap()
    }

    #[test]
    fn conformant_collection_converts() {
        let specs = SpecCollection::from_value(json!({
            "bundles": {"b1": {"apps": ["app-a"]}},
            "apps": {"app-a": {"image": "x", "depends": {"apps": [], "libs": []}}},
            "libs": {"lib-a": {"repo": "github.com/acme/lib-a"}},
            "services": {"mongo": {"image": "mongo:3", "anything": true}}
        }))
        .unwrap();

        let graph = validate_fields(&schemas(), &specs).unwrap();
        assert_eq!(graph.apps["app-a"].source, Source::Image("x".to_string()));
        assert_eq!(graph.bundles["b1"].apps, vec!["app-a"]);
        assert!(graph.libs.contains_key("lib-a"));
        assert_eq!(graph.services["mongo"].document["anything"], json!(true));
    }

    #[test]
    fn apps_are_checked_before_bundles() {
        let specs = SpecCollection::from_value(json!({
            "bundles": {"b1": {"description": "missing apps list"}},
            "apps": {"app-a": {"image": "x", "build": "."}}
        }))
        .unwrap();

        let err = validate_fields(&schemas(), &specs).unwrap_err();
        assert_eq!(
            err,
            SchemaError::ConflictingSource {
                name: "app-a".to_string()
            }
        );
    }

    #[test]
    fn bundles_are_checked_before_libs() {
        let specs = SpecCollection::from_value(json!({
            "bundles": {"b1": {"description": "missing apps list"}},
            "libs": {"lib-a": {"unknown": 1}}
        }))
        .unwrap();

        let err = validate_fields(&schemas(), &specs).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Violation { kind: SpecKind::Bundle, ref name, .. } if name == "b1"
        ));
    }

    #[test]
    fn first_failing_app_in_name_order_is_reported() {
        let specs = SpecCollection::from_value(json!({
            "bundles": {"b1": {"apps": []}},
            "apps": {
                "zeta": {"repo": "r"},
                "alpha": {"image": "a", "build": "b"}
            }
        }))
        .unwrap();

        let err = validate_fields(&schemas(), &specs).unwrap_err();
        assert_eq!(
            err,
            SchemaError::ConflictingSource {
                name: "alpha".to_string()
            }
        );
    }
}
