use std::fs;
use tomekeeper_core::config::{apply_overrides_from, load_config, AppConfig, ConfigError};
use tomekeeper_core::StoreMode;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap();

    assert_eq!(config.store.base_url, "http://localhost:5000");
    assert_eq!(config.store.timeout_ms, 5_000);
    assert_eq!(config.assistant.model, "gpt-3.5-turbo");
    assert_eq!(config.assistant.max_tokens, 300);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tomekeeper.toml");
    fs::write(
        &path,
        r#"
[store]
mode = "remote"
base_url = "http://catalog.internal:8080"

[assistant]
api_key = "sk-file"
temperature = 0.2
"#,
    )
    .unwrap();

    let config = AppConfig::from_toml_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(config.store.mode, StoreMode::Remote);
    assert_eq!(config.store.base_url, "http://catalog.internal:8080");
    assert_eq!(config.store.timeout_ms, 5_000);
    assert_eq!(config.assistant.temperature, 0.2);
    assert_eq!(
        config.assistant.api_key.as_ref().map(|key| key.expose()),
        Some("sk-file")
    );
    assert!(!format!("{config:?}").contains("sk-file"));
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[store\nmode = ").unwrap();

    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn validation_rejects_zero_timeouts_and_unknown_levels() {
    let mut config = AppConfig::default();
    config.store.timeout_ms = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = AppConfig::default();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.store.mode = StoreMode::Remote;
    config.store.base_url = " ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn overrides_replace_file_values() {
    let mut config = AppConfig::default();
    apply_overrides_from(&mut config, |name| match name {
        "TOMEKEEPER_STORE_MODE" => Some("http".to_string()),
        "TOMEKEEPER_API_URL" => Some(" http://10.0.0.5:5000 ".to_string()),
        "TOMEKEEPER_ASSISTANT_KEY" => Some("sk-primary".to_string()),
        "OPENAI_API_KEY" => Some("sk-secondary".to_string()),
        _ => None,
    });

    assert_eq!(config.store.mode, StoreMode::Remote);
    assert_eq!(config.store.base_url, "http://10.0.0.5:5000");
    assert_eq!(
        config.assistant.api_key.as_ref().map(|key| key.expose()),
        Some("sk-primary")
    );
    config.validate().unwrap();
}
