//! Configuration loading tests

use std::fs;

use semdiff_infrastructure::config::{AppConfig, ConfigLoader};

#[test]
fn defaults_are_sane() {
    let config = AppConfig::default();

    assert_eq!(config.server.address, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert_eq!(config.embedding.provider, "inference-server");
    assert_eq!(config.embedding.timeout, 30);
    assert!((config.comparison.threshold - 0.65).abs() < f32::EPSILON);
    assert_eq!(config.comparison.model, "sentence-transformers/LaBSE");
}

#[test]
fn loads_defaults_without_a_config_file() {
    let config = ConfigLoader::new()
        .with_config_path("/nonexistent/semdiff.toml")
        .load()
        .unwrap();
    assert_eq!(config.server.port, 8000);
}

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("semdiff.toml");
    fs::write(
        &path,
        r#"
[server]
port = 9100

[comparison]
threshold = 0.8

[embedding]
provider = "null"
"#,
    )
    .unwrap();

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.server.port, 9100);
    assert!((config.comparison.threshold - 0.8).abs() < f32::EPSILON);
    assert_eq!(config.embedding.provider, "null");
    // Untouched sections keep their defaults
    assert_eq!(config.server.address, "127.0.0.1");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn out_of_range_threshold_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("semdiff.toml");
    fs::write(&path, "[comparison]\nthreshold = 1.5\n").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("threshold"));
}

#[test]
fn unknown_log_level_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("semdiff.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("log level"));
}

#[test]
fn environment_variables_override_the_file() {
    figment::Jail::expects(|jail| {
        jail.create_file(
            "semdiff.toml",
            r#"
[server]
port = 9100
"#,
        )?;
        jail.set_env("SEMDIFF_SERVER_PORT", "9200");

        let config = ConfigLoader::new()
            .with_config_path("semdiff.toml")
            .load()
            .expect("config should load");
        assert_eq!(config.server.port, 9200);
        Ok(())
    });
}
