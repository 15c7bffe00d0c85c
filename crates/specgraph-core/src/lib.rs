//! # specgraph-core: Foundational Types for specgraph
//!
//! Defines the in-memory model of a spec tree and the error hierarchy
//! shared by every other crate in the workspace. It depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Raw and typed views are distinct types.** A [`SpecCollection`] is
//!    what a loader produced: nested mappings, unchecked. A [`SpecGraph`] is
//!    only ever built from documents that passed schema validation.
//!
//! 2. **Build source is a variant.** An app carries a [`Source`] that is
//!    either an image or a build descriptor. Having both or neither cannot
//!    be represented once a document has been converted.
//!
//! 3. **Deterministic iteration.** All name-keyed maps are `BTreeMap`s, so
//!    every pass visits entities in the same order and reports the same
//!    first failure on repeated runs.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `specgraph-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod collection;
pub mod error;
pub mod kind;
pub mod model;

pub use collection::SpecCollection;
pub use error::{CycleError, LoadError, ReferenceError, SchemaError, SpecError, StructuralError};
pub use kind::SpecKind;
pub use model::{App, Bundle, Dependencies, Lib, Service, Source, SpecGraph};
