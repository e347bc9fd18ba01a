// tests/config_test.rs
use std::io::Write;
use tempfile::NamedTempFile;
use version_gate::config::{load_config, Config};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.trunk_branch, "main");
    assert_eq!(config.ref_env_var, "GITHUB_REF_NAME");
    assert_eq!(config.channels.production, "releases");
    assert_eq!(config.channels.snapshot, "snapshots");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
trunk_branch = "master"
ref_env_var = "CI_COMMIT_REF_NAME"

[channels]
production = "maven-central"
snapshot = "staging"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.trunk_branch, "master");
    assert_eq!(config.ref_env_var, "CI_COMMIT_REF_NAME");
    assert_eq!(config.channels.production, "maven-central");
    assert_eq!(config.channels.snapshot, "staging");
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(br#"ref_env_var = "BUILD_TAG""#)
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.ref_env_var, "BUILD_TAG");
    assert_eq!(config.trunk_branch, "main");
    assert_eq!(config.channels.snapshot, "snapshots");
}

#[test]
fn test_load_missing_file_is_an_error() {
    let result = load_config(Some("/nonexistent/versiongate.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"trunk_branch = [not toml").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}
