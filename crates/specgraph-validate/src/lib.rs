//! # specgraph-validate: Spec Validation Pipeline
//!
//! Decides whether a spec tree is safe to hand to the orchestration layer.
//! A run either accepts the tree or rejects it with exactly one error.
//!
//! ## Stages
//!
//! The [`pipeline`] runs these in order and stops at the first failure:
//!
//! 1. [`minimum`]: at least one bundle exists.
//! 2. [`fields`]: every app, bundle and lib conforms to its schema, and
//!    every app has exactly one build source.
//! 3. [`references`]: every dependency name resolves in its kind.
//! 4. [`cycles`]: the app graph and the lib graph are acyclic.
//!
//! ## Collaborators
//!
//! - [`source::SpecSource`] supplies the raw collection. [`source::FsSpecSource`]
//!   reads the on-disk layout.
//! - [`notify::Notifier`] receives the start and completion messages.

pub mod cycles;
pub mod fields;
pub mod minimum;
pub mod notify;
pub mod pipeline;
pub mod references;
pub mod source;

pub use notify::{Notifier, TracingNotifier};
pub use pipeline::{validate_specs, validate_specs_from_path, SpecValidator};
pub use source::{FsSpecSource, SpecSource};
