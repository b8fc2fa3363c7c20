//! Integration tests for response comparison and snapshot/restore

use super::test_utils::ScriptedProvider;
use prompt_playground::comparison::{SUMMARY_ERROR_OUTPUT, SUMMARY_RESULT_ID};
use prompt_playground::{
    GenerationConfig, PlaygroundEngine, PlaygroundError, PlaygroundSession, RunMode,
};
use std::sync::Arc;

#[tokio::test]
async fn test_compare_with_single_history_entry_is_noop() {
    let provider = Arc::new(ScriptedProvider::new(vec![Ok("only".to_string())]));
    let engine = PlaygroundEngine::new(provider.clone());
    let mut session = PlaygroundSession::default();

    engine.run(&mut session).await.unwrap();
    engine.compare(&mut session).await.unwrap();

    assert_eq!(provider.calls().len(), 1);
    assert_eq!(session.results()[0].output(), "only");
    assert!(session.saved_snapshot().is_none());
    assert!(!session.is_busy());
}

#[tokio::test]
async fn test_compare_on_empty_session_is_noop_even_without_credential() {
    let provider = Arc::new(ScriptedProvider::without_credential());
    let engine = PlaygroundEngine::new(provider);
    let mut session = PlaygroundSession::default();

    engine.compare(&mut session).await.unwrap();
    assert!(session.results().is_empty());
}

#[tokio::test]
async fn test_single_mode_compare_reads_history() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok("alpha".to_string()),
        Ok("beta".to_string()),
        Ok("gamma".to_string()),
        Ok("best of all".to_string()),
    ]));
    let engine = PlaygroundEngine::new(provider.clone());
    let mut session = PlaygroundSession::new(GenerationConfig {
        stop_sequences: vec!["###".to_string()],
        ..Default::default()
    });

    for _ in 0..3 {
        engine.run(&mut session).await.unwrap();
    }
    engine.compare(&mut session).await.unwrap();

    let (prompt, params) = provider.calls().pop().unwrap();
    assert!(prompt.contains("Response 1:\nalpha"));
    assert!(prompt.contains("Response 2:\nbeta"));
    assert!(prompt.contains("Response 3:\ngamma"));
    assert_eq!(params.temperature, 0.5);
    assert_eq!(params.max_output_tokens, 200);
    assert_eq!(params.stop_sequences, vec!["###"]);

    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].id(), SUMMARY_RESULT_ID);
    assert_eq!(session.results()[0].output(), "best of all");
    assert_eq!(session.history().len(), 3);

    assert!(session.restore());
    assert_eq!(session.results()[0].output(), "gamma");
}

#[tokio::test]
async fn test_batched_compare_snapshot_restores_all_samples() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok("s1".to_string()),
        Ok("s2".to_string()),
        Ok("s3".to_string()),
        Ok("summary text".to_string()),
    ]));
    let engine = PlaygroundEngine::new(provider);
    let mut session = PlaygroundSession::default().with_mode(RunMode::Batched { sample_count: 3 });

    engine.run(&mut session).await.unwrap();
    let before = session.results().clone();
    engine.compare(&mut session).await.unwrap();

    assert_eq!(session.results()[0].output(), "summary text");
    assert_eq!(session.saved_snapshot(), Some(&before));
    assert!(session.restore());
    assert_eq!(session.results(), &before);
}

#[tokio::test]
async fn test_failed_comparison_yields_summary_sentinel() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok("a".to_string()),
        Ok("b".to_string()),
        Err(PlaygroundError::ProviderAuthFailed("403".to_string())),
    ]));
    let engine = PlaygroundEngine::new(provider);
    let mut session = PlaygroundSession::default().with_mode(RunMode::Batched { sample_count: 2 });

    engine.run(&mut session).await.unwrap();
    engine.compare(&mut session).await.unwrap();

    let summary = &session.results()[0];
    assert_eq!(summary.output(), SUMMARY_ERROR_OUTPUT);
    assert_eq!(summary.token_count(), 0);
    assert_eq!(summary.id(), SUMMARY_RESULT_ID);
}

#[tokio::test]
async fn test_busy_flag_is_raised_during_comparison_call() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok("alpha".to_string()),
        Ok("beta".to_string()),
        Ok("combined".to_string()),
    ]));
    let engine = PlaygroundEngine::new(provider.clone());
    let mut session = PlaygroundSession::default();

    engine.run(&mut session).await.unwrap();
    engine.run(&mut session).await.unwrap();
    provider.watch_busy(session.busy_flag());
    engine.compare(&mut session).await.unwrap();

    assert_eq!(provider.calls().len(), 3);
    assert_eq!(provider.busy_observations(), vec![true]);
    assert_eq!(session.results()[0].output(), "combined");
    assert!(!session.is_busy());
}
