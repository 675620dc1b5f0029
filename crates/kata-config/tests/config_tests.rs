//! Configuration discovery tests

use kata_config::{ConfigError, ConfigLoader};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_config_file(dir: &Path, content: &str) -> PathBuf {
    let config_path = dir.join("kata.toml");
    fs::write(&config_path, content).unwrap();
    config_path
}

fn loader(root: &TempDir) -> ConfigLoader {
    ConfigLoader::new().with_ceiling(root.path())
}

#[test]
fn test_load_project_config_basic() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(
        temp_dir.path(),
        r#"
[scaffold]
dir = "problems"
author = "Grace"
"#,
    );

    let config = loader(&temp_dir)
        .load_from_directory(temp_dir.path())
        .unwrap();

    assert!(config.is_project());
    assert_eq!(config.project.author(), Some("Grace"));
    assert_eq!(
        config.scaffold_dir(Path::new("/elsewhere")),
        temp_dir.path().join("problems")
    );
}

#[test]
fn test_load_when_no_config_exists() {
    let temp_dir = TempDir::new().unwrap();

    let config = loader(&temp_dir)
        .load_from_directory(temp_dir.path())
        .unwrap();

    assert!(!config.is_project());
    assert_eq!(
        config.scaffold_dir(temp_dir.path()),
        temp_dir.path().join("src/bin")
    );
}

#[test]
fn test_load_from_subdirectory_finds_parent() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[scaffold]\ndir = \"solutions\"\n");

    let nested = temp_dir.path().join("sub1").join("sub2");
    fs::create_dir_all(&nested).unwrap();

    let config = loader(&temp_dir).load_from_directory(&nested).unwrap();

    assert_eq!(config.project_root.as_deref(), Some(temp_dir.path()));
    assert_eq!(
        config.scaffold_dir(&nested),
        temp_dir.path().join("solutions")
    );
}

#[test]
fn test_nearest_config_wins() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[scaffold]\nauthor = \"outer\"\n");
    let inner = temp_dir.path().join("inner");
    fs::create_dir_all(&inner).unwrap();
    create_config_file(&inner, "[scaffold]\nauthor = \"inner\"\n");

    let config = loader(&temp_dir).load_from_directory(&inner).unwrap();
    assert_eq!(config.project.author(), Some("inner"));
}

#[test]
fn test_ceiling_stops_search() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[scaffold]\nauthor = \"above\"\n");
    let project = temp_dir.path().join("project");
    fs::create_dir_all(&project).unwrap();

    let config = ConfigLoader::new()
        .with_ceiling(&project)
        .load_from_directory(&project)
        .unwrap();
    assert!(!config.is_project());
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[scaffold\n");

    let err = loader(&temp_dir)
        .load_from_directory(temp_dir.path())
        .unwrap_err();
    assert!(matches!(err, ConfigError::TomlParseError { .. }));
}
