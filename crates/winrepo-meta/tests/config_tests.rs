//! Integration tests for admin configuration loading

use std::fs;

use winrepo_meta::{AdminConfig, Error};
use tempfile::TempDir;

#[test]
fn test_load_full_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("admin.toml");
    fs::write(
        &path,
        r#"
[server]
url = "https://pulp.example.com/pulp/api"
verify_ssl = false
timeout_secs = 5
"#,
    )
    .unwrap();

    let config = AdminConfig::load(&path).unwrap();

    assert_eq!(config.server.url, "https://pulp.example.com/pulp/api");
    assert!(!config.server.verify_ssl);
    assert_eq!(config.server.timeout_secs, 5);
}

#[test]
fn test_load_empty_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("admin.toml");
    fs::write(&path, "").unwrap();

    let config = AdminConfig::load(&path).unwrap();
    assert_eq!(config, AdminConfig::default());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let result = AdminConfig::load_or_default(Some(&path));
    assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("admin.toml");
    fs::write(&path, "[server]\ntimeout_secs = \"soon\"\n").unwrap();

    let result = AdminConfig::load(&path);
    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}
