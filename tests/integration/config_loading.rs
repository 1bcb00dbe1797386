use filmkatalog::config::{ConfigLoader, DEFAULT_CATALOG_FILE};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn explicit_file_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[catalog]
file = "meine_filme.json"

[menu]
max_attempts = 2
color = false

[logging]
level = "debug"
output = "stderr"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();

    assert_eq!(config.catalog.file, PathBuf::from("meine_filme.json"));
    assert_eq!(config.menu.max_attempts, 2);
    assert!(!config.menu.color);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.output, "stderr");
    assert_eq!(config.logging.format, "text");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("partial.toml");
    fs::write(&path, "[menu]\nmax_attempts = 7\n").unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();

    assert_eq!(config.catalog.file, PathBuf::from(DEFAULT_CATALOG_FILE));
    assert_eq!(config.menu.max_attempts, 7);
    assert!(config.menu.color);
}

#[test]
fn zero_attempts_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, "[menu]\nmax_attempts = 0\n").unwrap();

    assert!(ConfigLoader::load_from_file(&path).is_err());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp.path().join("nope.toml")).is_err());
}

#[test]
fn working_directory_file_is_picked_up() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("filmkatalog.toml"),
        "[catalog]\nfile = \"lokal.json\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(temp.path()).unwrap();

    assert_eq!(config.catalog.file, PathBuf::from("lokal.json"));
}
