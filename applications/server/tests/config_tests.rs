/// Configuration loading tests
use std::io::Write;
use tempfile::NamedTempFile;
use tunedex_server::{ServerConfig, ServerError};

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_file_values_are_loaded() {
    let file = toml_file(
        r#"
        [server]
        host = "0.0.0.0"
        port = 9000
        cors = false
        "#,
    );

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert!(!config.server.cors);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_keys_fall_back_to_defaults() {
    let file = toml_file(
        r#"
        [server]
        port = 7070
        "#,
    );

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 7070);
    assert!(config.server.cors);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = ServerConfig::load_from(Some(&path)).unwrap_err();

    assert!(matches!(err, ServerError::Config(_)));
}

#[test]
fn test_port_zero_fails_validation() {
    let file = toml_file(
        r#"
        [server]
        port = 0
        "#,
    );

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert!(matches!(config.validate(), Err(ServerError::Config(_))));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = ServerConfig::default();

    let rendered = toml::to_string_pretty(&config).unwrap();
    let file = toml_file(&rendered);

    assert_eq!(ServerConfig::load_from(Some(file.path())).unwrap(), config);
}
