//! Integration test: the spec path is resolved from a config file on disk
//! and the resulting tree is validated through the `validate` subcommand.

use std::path::Path;

use specgraph_cli::config::{CliConfig, ConfigLocation};
use specgraph_cli::validate::{run_validate, ValidateArgs};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn config_pointing_at(dir: &Path, specs: &Path) -> CliConfig {
    let config_path = dir.join("config.yml");
    std::fs::write(
        &config_path,
        format!("specs_path: {}\n", specs.display()),
    )
    .unwrap();
    CliConfig::load_from(&ConfigLocation {
        path: config_path,
        explicit: true,
    })
    .unwrap()
}

#[test]
fn explicit_config_file_supplies_the_spec_path() {
    let dir = tempfile::tempdir().unwrap();
    let specs = dir.path().join("specs");
    write(&specs, "bundles/site.yml", "apps: [web]\n");
    write(&specs, "apps/web.yml", "build: .\ndepends:\n  libs: [common]\n");
    write(&specs, "libs/common.yml", "repo: github.com/acme/common\n");

    let config = CliConfig::load(Some(&dir.path().join("config.yml")));
    assert!(config.is_err(), "explicit config must exist");

    let config = config_pointing_at(dir.path(), &specs);
    assert_eq!(config.specs_path.as_deref(), Some(specs.as_path()));
    assert_eq!(run_validate(&ValidateArgs { path: None }, &config).unwrap(), 0);
}

#[test]
fn invalid_tree_from_config_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let specs = dir.path().join("specs");
    write(&specs, "bundles/site.yml", "apps: [web]\n");
    write(&specs, "apps/web.yml", "image: x\ndepends:\n  apps: [web]\n");

    let config = config_pointing_at(dir.path(), &specs);
    assert_eq!(run_validate(&ValidateArgs { path: None }, &config).unwrap(), 1);
}

#[test]
fn positional_path_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good");
    let bad = dir.path().join("bad");
    write(&good, "bundles/site.yml", "apps: []\n");
    write(&bad, "apps/orphan.yml", "image: x\n");

    let config = config_pointing_at(dir.path(), &bad);
    let args = ValidateArgs {
        path: Some(good.clone()),
    };
    assert_eq!(run_validate(&args, &config).unwrap(), 0);
}
