//! # Validate Subcommand
//!
//! Runs the full validation pipeline over one spec tree and maps the
//! outcome onto an exit code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use specgraph_validate::{FsSpecSource, Notifier, SpecValidator};

use crate::config::CliConfig;

/// Arguments for the `specgraph validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Spec directory (or single YAML file). Falls back to
    /// SPECGRAPH_SPECS_PATH, then `specs_path` in the config file.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Prints progress messages for the operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure, 2 when no spec
/// path is configured.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let path = config.specs_path(args.path.as_deref());
    validate_at(path.as_deref(), &StdoutNotifier)
}

/// Validate the specs at `path`, reporting progress through `notifier`.
pub fn validate_at<N: Notifier + ?Sized>(path: Option<&Path>, notifier: &N) -> Result<u8> {
    let Some(path) = path else {
        println!(
            "No spec path given. Pass PATH, set SPECGRAPH_SPECS_PATH, or set specs_path in the config file."
        );
        return Ok(2);
    };

    let source = FsSpecSource::new(Some(path.to_path_buf()));
    let validator = SpecValidator::new().context("failed to compile spec schemas")?;

    match validator.validate_path(&source, path, notifier) {
        Ok(graph) => {
            tracing::info!(
                apps = graph.apps.len(),
                bundles = graph.bundles.len(),
                libs = graph.libs.len(),
                services = graph.services.len(),
                "specs are valid"
            );
            Ok(0)
        }
        Err(err) => {
            println!("FAIL: {err}");
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Notifier for Recorder {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn no_path_exits_two() {
        let recorder = Recorder::default();
        assert_eq!(validate_at(None, &recorder).unwrap(), 2);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn valid_tree_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bundles/b1.yml", "apps: [web]\n");
        write(dir.path(), "apps/web.yml", "image: acme/web\n");

        let recorder = Recorder::default();
        assert_eq!(validate_at(Some(dir.path()), &recorder).unwrap(), 0);
        let messages = recorder.0.borrow();
        assert_eq!(
            messages[0],
            format!("Validating specs at path {}", dir.path().display())
        );
        assert_eq!(messages[1], "Validation complete");
    }

    #[test]
    fn invalid_tree_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "apps/web.yml", "image: acme/web\n");
        let recorder = Recorder::default();
        assert_eq!(validate_at(Some(dir.path()), &recorder).unwrap(), 1);
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn missing_tree_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(validate_at(Some(&missing), &Recorder::default()).unwrap(), 1);
    }

    #[test]
    fn positional_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bundles/b1.yml", "apps: []\n");
        let args = ValidateArgs {
            path: Some(dir.path().to_path_buf()),
        };
        let config = CliConfig {
            specs_path: Some(dir.path().join("elsewhere")),
        };
        assert_eq!(run_validate(&args, &config).unwrap(), 0);
    }
}
