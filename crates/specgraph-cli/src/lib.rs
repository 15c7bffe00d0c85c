//! # specgraph-cli
//!
//! Provides the `specgraph` command-line interface over the validation
//! pipeline in `specgraph-validate`.
//!
//! ```bash
//! specgraph validate                  # spec path from env or config file
//! specgraph validate ./specs          # explicit path
//! specgraph -vv --config ci.yml validate
//! ```
//!
//! ## Exit codes
//!
//! - `0`: the specs are valid.
//! - `1`: loading or validation failed.
//! - `2`: no spec path could be resolved.

pub mod config;
pub mod validate;
