//! # Runtime Schema Validation
//!
//! Validates raw spec documents against the built-in JSON Schema
//! definitions for apps, bundles and libs.
//!
//! ## Design
//!
//! The [`SchemaValidator`] compiles the three embedded schemas once at
//! construction time. [`SchemaValidator::validate`] reports the first
//! violation as a [`SchemaError::Violation`] carrying the entity name and
//! the JSON Pointer of the offending field; [`SchemaValidator::violations`]
//! returns every violation for diagnostics.
//!
//! Services have no schema and always conform.

use jsonschema::Validator;
use serde_json::Value;

use specgraph_core::{App, Bundle, Lib, SchemaError, SpecKind};

use crate::convert;

const APP_SCHEMA: &str = include_str!("../schemas/app.schema.json");
const BUNDLE_SCHEMA: &str = include_str!("../schemas/bundle.schema.json");
const LIB_SCHEMA: &str = include_str!("../schemas/lib.schema.json");

/// Field label used when the document itself is at fault.
const ROOT_FIELD: &str = "(root)";

/// A single schema violation with diagnostic context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationDetail {
    /// JSON Pointer to the violating field, `(root)` for the whole document.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for ViolationDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Compiled validators for every schema-checked spec kind.
pub struct SchemaValidator {
    app: Validator,
    bundle: Validator,
    lib: Validator,
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("kinds", &[SpecKind::App, SpecKind::Bundle, SpecKind::Lib])
            .finish()
    }
}

impl SchemaValidator {
    /// Compile the built-in app, bundle and lib schemas.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if an embedded schema is not valid
    /// JSON or not a valid Draft 2020-12 schema.
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            app: compile(SpecKind::App, APP_SCHEMA)?,
            bundle: compile(SpecKind::Bundle, BUNDLE_SCHEMA)?,
            lib: compile(SpecKind::Lib, LIB_SCHEMA)?,
        })
    }

    fn validator(&self, kind: SpecKind) -> Option<&Validator> {
        match kind {
            SpecKind::App => Some(&self.app),
            SpecKind::Bundle => Some(&self.bundle),
            SpecKind::Lib => Some(&self.lib),
            SpecKind::Service => None,
        }
    }

    /// Whether documents of this kind are schema checked.
    pub fn has_schema(&self, kind: SpecKind) -> bool {
        self.validator(kind).is_some()
    }

    /// Every violation of `document` against the schema for `kind`.
    pub fn violations(&self, kind: SpecKind, document: &Value) -> Vec<ViolationDetail> {
        let Some(validator) = self.validator(kind) else {
            return Vec::new();
        };
        validator
            .iter_errors(document)
            .map(|err| {
                let field = err.instance_path.to_string();
                ViolationDetail {
                    field: if field.is_empty() {
                        ROOT_FIELD.to_string()
                    } else {
                        field
                    },
                    message: err.to_string(),
                }
            })
            .collect()
    }

    /// Check one named document, failing on its first violation.
    pub fn validate(&self, kind: SpecKind, name: &str, document: &Value) -> Result<(), SchemaError> {
        let mut violations = self.violations(kind, document);
        if violations.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            kind = %kind,
            name,
            count = violations.len(),
            "schema violations found"
        );
        let first = violations.swap_remove(0);
        Err(SchemaError::Violation {
            kind,
            name: name.to_string(),
            field: first.field,
            message: first.message,
        })
    }

    /// Validate an app document and convert it into an [`App`].
    ///
    /// Schema conformance is checked first; the image/build rule second.
    pub fn app(&self, name: &str, document: &Value) -> Result<App, SchemaError> {
        self.validate(SpecKind::App, name, document)?;
        convert::app(name, document)
    }

    /// Validate a bundle document and convert it into a [`Bundle`].
    pub fn bundle(&self, name: &str, document: &Value) -> Result<Bundle, SchemaError> {
        self.validate(SpecKind::Bundle, name, document)?;
        convert::bundle(name, document)
    }

    /// Validate a lib document and convert it into a [`Lib`].
    pub fn lib(&self, name: &str, document: &Value) -> Result<Lib, SchemaError> {
        self.validate(SpecKind::Lib, name, document)?;
        convert::lib(name, document)
    }
}

fn compile(kind: SpecKind, source: &str) -> Result<Validator, SchemaError> {
    let schema: Value = serde_json::from_str(source).map_err(|e| SchemaError::Compile {
        kind,
        reason: e.to_string(),
    })?;
    jsonschema::options()
        .with_draft(jsonschema::Draft::Draft202012)
        .build(&schema)
        .map_err(|e| SchemaError::Compile {
            kind,
            reason: e.to_string(),
        })
}
