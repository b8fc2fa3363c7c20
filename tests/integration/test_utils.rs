//! Shared test utilities for integration tests
//!
//! Scripted providers for driving the engine without a network, plus
//! serialized environment isolation for configuration tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use prompt_playground::provider::{GenerationParams, GenerationProvider};
use prompt_playground::session::BusyFlag;
use prompt_playground::PlaygroundError;
use std::collections::VecDeque;
use std::sync::Mutex as StdMutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: StdMutex<()> = StdMutex::new(());

/// Behavior of a scripted provider once its queue is drained
#[derive(Clone, Copy)]
pub enum WhenDrained {
    Echo,
    Fail,
}

/// Provider that returns queued responses in order and records every call.
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<String, PlaygroundError>>>,
    calls: Mutex<Vec<(String, GenerationParams)>>,
    when_drained: WhenDrained,
    credential: bool,
    busy_flag: Mutex<Option<BusyFlag>>,
    busy_seen: Mutex<Vec<bool>>,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<Result<String, PlaygroundError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
            when_drained: WhenDrained::Echo,
            credential: true,
            busy_flag: Mutex::new(None),
            busy_seen: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with a recoverable transport error.
    pub fn always_failing() -> Self {
        Self {
            when_drained: WhenDrained::Fail,
            ..Self::new(Vec::new())
        }
    }

    pub fn without_credential() -> Self {
        Self {
            credential: false,
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> Vec<(String, GenerationParams)> {
        self.calls.lock().clone()
    }

    /// Record the state of `flag` at every subsequent generate call.
    pub fn watch_busy(&self, flag: BusyFlag) {
        *self.busy_flag.lock() = Some(flag);
    }

    pub fn busy_observations(&self) -> Vec<bool> {
        self.busy_seen.lock().clone()
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    fn check_credentials(&self) -> Result<(), PlaygroundError> {
        if self.credential {
            Ok(())
        } else {
            Err(PlaygroundError::MissingCredential(
                "GEMINI_API_KEY is not set".to_string(),
            ))
        }
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, PlaygroundError> {
        self.calls.lock().push((prompt.to_string(), params.clone()));
        if let Some(flag) = self.busy_flag.lock().as_ref() {
            self.busy_seen.lock().push(flag.is_busy());
        }
        if let Some(next) = self.responses.lock().pop_front() {
            return next;
        }
        match self.when_drained {
            WhenDrained::Echo => Ok(format!("response at temperature {:.1}", params.temperature)),
            WhenDrained::Fail => Err(PlaygroundError::ProviderRequestFailed(
                "connection refused".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

/// Run `f` with XDG_CONFIG_HOME and HOME pointed into `test_dir` plus any extra `vars`,
/// restoring everything afterwards.
pub fn with_isolated_env<F, R>(test_dir: &TempDir, vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let test_config_home = test_dir.path().join("xdg");
    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_config_home).unwrap();
    std::fs::create_dir_all(&test_home).unwrap();

    let test_config_home = test_config_home.to_string_lossy().into_owned();
    let test_home = test_home.to_string_lossy().into_owned();
    let mut all_vars = vec![
        ("HOME", test_home.as_str()),
        ("XDG_CONFIG_HOME", test_config_home.as_str()),
    ];
    all_vars.extend_from_slice(vars);
    with_env_vars(&all_vars, f)
}

/// Hold the environment lock while `f` runs with `vars` set.
pub fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
        .collect();
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let result = f();

    for (key, value) in saved {
        restore_var(&key, value);
    }
    result
}

fn restore_var(key: &str, value: Option<String>) {
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
}
