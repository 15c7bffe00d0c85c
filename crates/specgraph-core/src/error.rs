//! # Error Hierarchy
//!
//! Structured error types for spec validation, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every rejection names what caused it: the entity, the field or rule,
//! the missing reference, or the exact cycle. A validation run fails with
//! exactly one of these; errors are never aggregated.

use std::path::PathBuf;

use thiserror::Error;

use crate::kind::SpecKind;

/// Top-level error for a validation run.
#[derive(Error, Debug)]
pub enum SpecError {
    /// The spec path does not exist.
    #[error("specs path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The spec source could not produce a collection.
    #[error("failed to load specs: {0}")]
    Load(#[from] LoadError),

    /// The collection lacks content every deployment needs.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// An entity does not conform to its schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A dependency name does not resolve.
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// A circular dependency exists.
    #[error(transparent)]
    Cycle(#[from] CycleError),
}

/// Errors raised while loading a spec collection.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No path was given and the source has no configured default.
    #[error("no specs path configured")]
    NoDefaultPath,

    /// A file or directory could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A spec file is not valid YAML.
    #[error("failed to parse {}: {reason}", .path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// Two files define the same name within one kind.
    #[error("duplicate {} spec '{name}'", .kind.singular())]
    DuplicateSpec {
        /// Kind of the duplicated spec.
        kind: SpecKind,
        /// The duplicated name.
        name: String,
    },

    /// The merged collection does not have the expected shape.
    #[error("malformed spec collection: {0}")]
    Malformed(String),
}

/// Errors about the overall content of a collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// No bundles are defined, so nothing could ever be deployed.
    #[error("no bundles found")]
    NoBundles,
}

/// Schema conformance failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field of an entity violates the entity's schema.
    #[error("{} '{name}' failed schema validation at {field}: {message}", .kind.singular())]
    Violation {
        /// Kind of the entity.
        kind: SpecKind,
        /// Name of the entity.
        name: String,
        /// JSON Pointer to the offending field, `(root)` for the document itself.
        field: String,
        /// Human-readable description of the violation.
        message: String,
    },

    /// An app declares both `image` and `build`.
    #[error("app '{name}': keys `image` and `build` are mutually exclusive")]
    ConflictingSource {
        /// Name of the app.
        name: String,
    },

    /// An app declares neither `image` nor `build`.
    #[error("app '{name}': each app must contain either an `image` or a `build` field")]
    MissingSource {
        /// Name of the app.
        name: String,
    },

    /// A built-in schema could not be compiled.
    #[error("failed to compile {} schema: {reason}", .kind.singular())]
    Compile {
        /// Kind whose schema failed to compile.
        kind: SpecKind,
        /// Compiler diagnostic.
        reason: String,
    },
}

/// A dependency that names an undefined spec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} '{referrer}' references undefined {relation} '{missing}'", .referrer_kind.singular())]
pub struct ReferenceError {
    /// Kind of the entity holding the reference.
    pub referrer_kind: SpecKind,
    /// Name of the entity holding the reference.
    pub referrer: String,
    /// Kind the reference must resolve in.
    pub relation: SpecKind,
    /// The name that does not resolve.
    pub missing: String,
}

/// A circular dependency among apps or among libs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cycle found in {kind} starting at '{entry}': {}", .chain.join(" -> "))]
pub struct CycleError {
    /// The dependency graph the cycle was found in.
    pub kind: SpecKind,
    /// The name the search started from.
    pub entry: String,
    /// Upstream chain in traversal order, ending with the repeated name.
    pub chain: Vec<String>,
}
