//! # Document Conversion
//!
//! Turns schema-conformant documents into typed entities. Fields that the
//! validation pipeline does not read (mounts, commands, assets, ...) are
//! left in the raw document.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use specgraph_core::{App, Bundle, Dependencies, Lib, SchemaError, SpecKind, Source};

#[derive(Deserialize)]
struct AppDocument {
    repo: Option<String>,
    image: Option<String>,
    build: Option<String>,
    #[serde(default)]
    depends: Dependencies,
    #[serde(default)]
    conditional_links: Dependencies,
}

#[derive(Deserialize)]
struct LibDocument {
    repo: Option<String>,
    #[serde(default)]
    depends: LibDepends,
}

#[derive(Deserialize, Default)]
struct LibDepends {
    #[serde(default)]
    libs: Vec<String>,
}

#[derive(Deserialize)]
struct BundleDocument {
    description: Option<String>,
    apps: Vec<String>,
}

fn decode<T: DeserializeOwned>(
    kind: SpecKind,
    name: &str,
    document: &Value,
) -> Result<T, SchemaError> {
    T::deserialize(document).map_err(|e| SchemaError::Violation {
        kind,
        name: name.to_string(),
        field: "(root)".to_string(),
        message: e.to_string(),
    })
}

/// Convert an app document, enforcing that exactly one of `image` and
/// `build` is present.
pub fn app(name: &str, document: &Value) -> Result<App, SchemaError> {
    let doc: AppDocument = decode(SpecKind::App, name, document)?;
    let source = match (doc.image, doc.build) {
        (Some(image), None) => Source::Image(image),
        (None, Some(build)) => Source::Build(build),
        (Some(_), Some(_)) => {
            return Err(SchemaError::ConflictingSource {
                name: name.to_string(),
            })
        }
        (None, None) => {
            return Err(SchemaError::MissingSource {
                name: name.to_string(),
            })
        }
    };
    Ok(App {
        name: name.to_string(),
        repo: doc.repo,
        source,
        depends: doc.depends,
        conditional_links: doc.conditional_links,
    })
}

pub fn lib(name: &str, document: &Value) -> Result<Lib, SchemaError> {
    let doc: LibDocument = decode(SpecKind::Lib, name, document)?;
    Ok(Lib {
        name: name.to_string(),
        repo: doc.repo,
        depends: doc.depends.libs,
    })
}

pub fn bundle(name: &str, document: &Value) -> Result<Bundle, SchemaError> {
    let doc: BundleDocument = decode(SpecKind::Bundle, name, document)?;
    Ok(Bundle {
        name: name.to_string(),
        description: doc.description,
        apps: doc.apps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_app_converts_to_image_source() {
        let converted = app(
            "app-a",
            &json!({"image": "x", "depends": {"apps": [], "libs": []}}),
        )
        .unwrap();
        assert_eq!(converted.source, Source::Image("x".to_string()));
        assert!(converted.depends.is_empty());
        assert!(converted.conditional_links.is_empty());
    }

    #[test]
    fn build_app_keeps_dependency_order() {
        let converted = app(
            "app-a",
            &json!({
                "build": "./docker",
                "repo": "github.com/acme/a",
                "depends": {"apps": ["z", "b", "m"], "services": ["redis"]},
                "conditional_links": {"apps": ["q"]}
            }),
        )
        .unwrap();
        assert_eq!(converted.source, Source::Build("./docker".to_string()));
        assert_eq!(converted.repo.as_deref(), Some("github.com/acme/a"));
        assert_eq!(converted.depends.apps, vec!["z", "b", "m"]);
        assert_eq!(converted.depends.services, vec!["redis"]);
        assert_eq!(converted.conditional_links.apps, vec!["q"]);
    }

    #[test]
    fn lib_without_depends_has_no_edges() {
        let converted = lib("lib-a", &json!({"repo": "github.com/acme/lib"})).unwrap();
        assert!(converted.depends.is_empty());
        let converted = lib("lib-a", &json!({"depends": {}})).unwrap();
        assert!(converted.depends.is_empty());
    }

    #[test]
    fn bundle_converts() {
        let converted = bundle("b1", &json!({"description": "core", "apps": ["a", "b"]})).unwrap();
        assert_eq!(converted.apps, vec!["a", "b"]);
        assert_eq!(converted.description.as_deref(), Some("core"));
    }

    #[test]
    fn undecodable_document_is_a_root_violation() {
        let err = bundle("b1", &json!({"apps": 7})).unwrap_err();
        assert!(matches!(err, SchemaError::Violation { ref field, .. } if field == "(root)"));
    }
}
