//! # specgraph-schema: Schema Validation
//!
//! Applies the per-kind structural schemas to raw spec documents and
//! converts conformant documents into the typed model of `specgraph-core`.
//!
//! ## Responsibilities
//!
//! - **Conformance:** the app, bundle and lib schemas live in `schemas/`
//!   as JSON Schema (Draft 2020-12) documents, embedded at compile time and
//!   compiled once per [`SchemaValidator`]. Services are free-form.
//! - **Conversion:** a conformant app document becomes an [`App`] whose
//!   build source is a single [`Source`] variant. The image/build rule is
//!   not expressible in the schema, so it is enforced at this step.
//!
//! [`App`]: specgraph_core::App
//! [`Source`]: specgraph_core::Source

pub mod convert;
pub mod validate;

pub use validate::{SchemaValidator, ViolationDetail};
