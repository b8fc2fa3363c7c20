//! Integration tests for the CLI route table

use super::test_utils::ScriptedProvider;
use clap::Parser;
use prompt_playground::cli::{Cli, RunContext};
use prompt_playground::config::PlaygroundConfig;
use prompt_playground::PlaygroundError;
use std::path::PathBuf;
use std::sync::Arc;

fn context(provider: Arc<ScriptedProvider>) -> RunContext {
    RunContext::from_config(PlaygroundConfig::default(), PathBuf::from(".")).with_provider(provider)
}

async fn run(ctx: &RunContext, args: &[&str]) -> Result<String, PlaygroundError> {
    let cli = Cli::try_parse_from(args).unwrap();
    ctx.execute(&cli.command).await
}

#[tokio::test]
async fn test_run_applies_overrides_before_generation() {
    let provider = Arc::new(ScriptedProvider::new(vec![Ok(
        "Fast car. END extra".to_string()
    )]));
    let ctx = context(provider.clone());

    let out = run(
        &ctx,
        &[
            "playground",
            "run",
            "--product",
            "Tesla Model S",
            "--system-prompt",
            "SYS",
            "--user-prompt",
            "About {product_name}",
            "--max-tokens",
            "42",
            "--stop",
            "END",
            "--format",
            "json",
        ],
    )
    .await
    .unwrap();

    let (prompt, params) = provider.calls().remove(0);
    assert_eq!(prompt, "SYS\n\nAbout Tesla Model S");
    assert_eq!(params.max_output_tokens, 42);

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["mode"]["mode"], "single");
    assert_eq!(value["results"][0]["output"], "Fast car. ");
    assert_eq!(value["results"][0]["token_count"], 3);
}

#[tokio::test]
async fn test_batched_run_clamps_sample_count() {
    let provider = Arc::new(ScriptedProvider::new(Vec::new()));
    let ctx = context(provider.clone());

    let out = run(
        &ctx,
        &["playground", "run", "--samples", "30", "--seed", "1", "--format", "json"],
    )
    .await
    .unwrap();

    assert_eq!(provider.calls().len(), 12);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["mode"]["sample_count"], 12);
    assert_eq!(value["analysis"]["count"], 12);
}

#[tokio::test]
async fn test_compare_then_restore_prints_samples() {
    let provider = Arc::new(ScriptedProvider::new(Vec::new()));
    let ctx = context(provider.clone());

    let out = run(
        &ctx,
        &[
            "playground",
            "run",
            "--batched",
            "--samples",
            "3",
            "--compare",
            "--restore",
            "--format",
            "json",
        ],
    )
    .await
    .unwrap();

    assert_eq!(provider.calls().len(), 4);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_missing_credential_surfaces_as_error() {
    let ctx = context(Arc::new(ScriptedProvider::without_credential()));
    let err = run(&ctx, &["playground", "run"]).await.unwrap_err();
    assert!(matches!(err, PlaygroundError::MissingCredential(_)));
    assert!(prompt_playground::cli::map_error(&err).contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_config_show_text_lists_sections() {
    let ctx = context(Arc::new(ScriptedProvider::new(Vec::new())));
    let out = run(&ctx, &["playground", "config", "show"]).await.unwrap();
    assert!(out.contains("gemini-1.5-flash"));
    assert!(out.contains("sample_count: 6"));
}
