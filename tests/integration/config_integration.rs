//! Integration tests for Configuration System

use super::test_utils::{with_env_vars, with_isolated_env};
use prompt_playground::config::ConfigLoader;
use prompt_playground::provider::ProviderKind;
use prompt_playground::RunMode;
use tempfile::TempDir;

#[test]
fn test_workspace_profile_file_overrides_base_file() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    let config_dir = workspace.join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        r#"
[generation]
product_name = "Base Product"
temperature = 0.3

[run]
batched = true
"#,
    )
    .unwrap();
    std::fs::write(
        config_dir.join("staging.toml"),
        r#"
[generation]
temperature = 1.2
"#,
    )
    .unwrap();

    let config = with_isolated_env(&temp_dir, &[("PLAYGROUND_ENV", "staging")], || {
        ConfigLoader::load(&workspace).unwrap()
    });

    assert_eq!(config.generation.product_name, "Base Product");
    assert_eq!(config.generation.temperature, 1.2);
    assert_eq!(config.run.mode(), RunMode::Batched { sample_count: 6 });
    assert_eq!(config.provider.kind, ProviderKind::Gemini);
}

#[test]
fn test_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("playground.toml");
    std::fs::write(
        &config_file,
        r#"
[generation]
max_tokens = 100

[run]
sample_count = 3
"#,
    )
    .unwrap();

    let config = with_env_vars(
        &[
            ("PLAYGROUND_GENERATION__MAX_TOKENS", "300"),
            ("PLAYGROUND_RUN__SAMPLE_COUNT", "8"),
        ],
        || ConfigLoader::load_from_file(&config_file).unwrap(),
    );

    assert_eq!(config.generation.max_tokens, 300);
    assert_eq!(config.run.sample_count, 8);
}

#[test]
fn test_invalid_values_load_but_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("playground.toml");
    std::fs::write(
        &config_file,
        r#"
[generation]
temperature = 2.5
stop_sequences = ["", "END"]

[run]
sample_count = 1
"#,
    )
    .unwrap();

    let config = with_env_vars(&[], || ConfigLoader::load_from_file(&config_file).unwrap());
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_malformed_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("playground.toml");
    std::fs::write(&config_file, "[generation\nmodel = ").unwrap();

    let err: prompt_playground::PlaygroundError =
        with_env_vars(&[], || ConfigLoader::load_from_file(&config_file).unwrap_err()).into();
    assert!(err.is_fatal());
}

#[test]
fn test_api_key_resolved_from_configured_env_var() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("playground.toml");
    std::fs::write(
        &config_file,
        r#"
[provider]
api_key_env = "PLAYGROUND_IT_GEMINI_KEY"
"#,
    )
    .unwrap();

    let (config, status) = with_env_vars(&[("PLAYGROUND_IT_GEMINI_KEY", "abcd")], || {
        let config = ConfigLoader::load_from_file(&config_file).unwrap();
        let status = config.provider.api_key_status();
        (config, status)
    });
    assert_eq!(status, "set (4 chars)");
    assert!(config.provider.resolve_api_key().is_none());
}
