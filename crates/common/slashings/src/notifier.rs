use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use slashwatch_consensus_beacon::ValidatorIndex;
use slashwatch_metrics::MetricsSink;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::{
    errors::ScriptError,
    event::{SlashingEvent, SlashingKind},
};

/// External executables to run when a validator is found slashed. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptConfig {
    pub attester_slashed_script: Option<PathBuf>,
    pub proposer_slashed_script: Option<PathBuf>,
}

impl ScriptConfig {
    pub fn script_for(&self, kind: SlashingKind) -> Option<&Path> {
        match kind {
            SlashingKind::Attester => self.attester_slashed_script.as_deref(),
            SlashingKind::Proposer => self.proposer_slashed_script.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    pub script: PathBuf,
    /// stdout followed by stderr.
    pub output: String,
}

#[derive(Debug)]
pub enum ScriptOutcome {
    NotConfigured,
    Succeeded(ScriptOutput),
    Failed(ScriptError),
}

#[derive(Debug)]
pub struct NotifyOutcome {
    pub event: SlashingEvent,
    pub script: ScriptOutcome,
    pub metrics_recorded: bool,
}

/// Drives the side effects of a slashing: the configured script and the slashings counter.
///
/// The two reactions are independent, a failing script never suppresses the counter.
pub struct Notifier {
    scripts: ScriptConfig,
    metrics: Option<Arc<dyn MetricsSink>>,
}

impl Notifier {
    pub fn new(scripts: ScriptConfig, metrics: Option<Arc<dyn MetricsSink>>) -> Self {
        Self { scripts, metrics }
    }

    pub fn scripts(&self) -> &ScriptConfig {
        &self.scripts
    }

    /// Runs the script configured for `kind` with `validator_index` as its only argument.
    ///
    /// Returns `None` when no script is configured for `kind`.
    pub async fn run_script(
        &self,
        kind: SlashingKind,
        validator_index: ValidatorIndex,
    ) -> Option<Result<ScriptOutput, ScriptError>> {
        let script = self.scripts.script_for(kind)?;
        Some(run_script(script, validator_index).await)
    }

    pub async fn notify(&self, event: &SlashingEvent) -> NotifyOutcome {
        let script = match self.run_script(event.kind, event.validator_index).await {
            None => ScriptOutcome::NotConfigured,
            Some(Ok(output)) => {
                debug!(
                    validator_index = event.validator_index,
                    kind = %event.kind,
                    output = %output.output,
                    "Slashing script succeeded"
                );
                ScriptOutcome::Succeeded(output)
            }
            Some(Err(err)) => {
                warn!(
                    validator_index = event.validator_index,
                    kind = %event.kind,
                    output = err.output().unwrap_or_default(),
                    "Slashing script failed: {err}"
                );
                ScriptOutcome::Failed(err)
            }
        };

        let metrics_recorded = match &self.metrics {
            Some(metrics) => {
                metrics.slashing_found(event.validator_index);
                true
            }
            None => false,
        };

        NotifyOutcome {
            event: *event,
            script,
            metrics_recorded,
        }
    }
}

async fn run_script(
    script: &Path,
    validator_index: ValidatorIndex,
) -> Result<ScriptOutput, ScriptError> {
    info!(script = ?script, validator_index, "Calling script");
    let output = Command::new(script)
        .arg(validator_index.to_string())
        .output()
        .await
        .map_err(|source| ScriptError::Spawn {
            script: script.to_path_buf(),
            source,
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(ScriptError::Failed {
            script: script.to_path_buf(),
            status: output.status,
            output: combined,
        });
    }

    Ok(ScriptOutput {
        script: script.to_path_buf(),
        output: combined,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use std::sync::Mutex;

    use tracing_test::traced_test;

    use super::*;

    #[derive(Default)]
    struct RecordingMetrics {
        slashings: Mutex<Vec<u64>>,
    }

    impl MetricsSink for RecordingMetrics {
        fn slashing_found(&self, validator_index: u64) {
            self.slashings
                .lock()
                .expect("lock poisoned")
                .push(validator_index);
        }

        fn block_processed(&self) {}
    }

    fn notifier(scripts: ScriptConfig) -> (Notifier, Arc<RecordingMetrics>) {
        let metrics = Arc::new(RecordingMetrics::default());
        (Notifier::new(scripts, Some(metrics.clone())), metrics)
    }

    #[tokio::test]
    async fn test_script_receives_validator_index() {
        let (notifier, metrics) = notifier(ScriptConfig {
            attester_slashed_script: Some(PathBuf::from("/bin/echo")),
            proposer_slashed_script: None,
        });

        let outcome = notifier.notify(&SlashingEvent::attester(12345)).await;
        let ScriptOutcome::Succeeded(output) = outcome.script else {
            panic!("expected the script to succeed, got {:?}", outcome.script);
        };
        assert_eq!(output.output.trim(), "12345");
        assert!(outcome.metrics_recorded);
        assert_eq!(*metrics.slashings.lock().expect("lock poisoned"), vec![12345]);
    }

    #[tokio::test]
    async fn test_script_selected_by_kind() {
        let (notifier, _) = notifier(ScriptConfig {
            attester_slashed_script: Some(PathBuf::from("/bin/false")),
            proposer_slashed_script: Some(PathBuf::from("/bin/true")),
        });

        let outcome = notifier.notify(&SlashingEvent::proposer(1)).await;
        assert!(matches!(outcome.script, ScriptOutcome::Succeeded(_)));

        let outcome = notifier.notify(&SlashingEvent::attester(1)).await;
        assert!(matches!(outcome.script, ScriptOutcome::Failed(_)));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_failing_script_still_records_metrics() {
        let (notifier, metrics) = notifier(ScriptConfig {
            attester_slashed_script: Some(PathBuf::from("/bin/false")),
            proposer_slashed_script: None,
        });

        let outcome = notifier.notify(&SlashingEvent::attester(77)).await;
        assert!(matches!(
            outcome.script,
            ScriptOutcome::Failed(ScriptError::Failed { .. })
        ));
        assert!(outcome.metrics_recorded);
        assert_eq!(*metrics.slashings.lock().expect("lock poisoned"), vec![77]);
        assert!(logs_contain("Slashing script failed"));
    }

    #[tokio::test]
    async fn test_missing_executable_is_a_spawn_error() {
        let (notifier, metrics) = notifier(ScriptConfig {
            attester_slashed_script: None,
            proposer_slashed_script: Some(PathBuf::from("/nonexistent/slashed.sh")),
        });

        let outcome = notifier.notify(&SlashingEvent::proposer(5)).await;
        let ScriptOutcome::Failed(err) = outcome.script else {
            panic!("expected a spawn failure");
        };
        assert!(matches!(err, ScriptError::Spawn { .. }));
        assert_eq!(err.output(), None);
        assert_eq!(*metrics.slashings.lock().expect("lock poisoned"), vec![5]);
    }

    #[tokio::test]
    async fn test_unconfigured_script_is_a_no_op() {
        let notifier = Notifier::new(ScriptConfig::default(), None);

        assert!(
            notifier
                .run_script(SlashingKind::Attester, 1)
                .await
                .is_none()
        );
        let outcome = notifier.notify(&SlashingEvent::attester(1)).await;
        assert!(matches!(outcome.script, ScriptOutcome::NotConfigured));
        assert!(!outcome.metrics_recorded);
    }
}
