use std::{env, fmt, path::Path, sync::Arc};

use slashwatch_beacon_api_client::{BlockProvider, EventsProvider, block_id::BlockId};
use slashwatch_metrics::MetricsSink;
use slashwatch_slashings::{event::SlashingKind, notifier::ScriptConfig};

use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Follow the chain head until the event feed ends.
    #[default]
    Live,
    /// Process a single block and stop. The events provider is never used.
    ReplayOnce(BlockId),
}

/// Everything the slashings service needs, assembled by the caller and validated once by
/// [`crate::SlashingsService::new`].
#[derive(Clone, Default)]
pub struct SlashingsConfig {
    pub block_provider: Option<Arc<dyn BlockProvider>>,
    pub events_provider: Option<Arc<dyn EventsProvider>>,
    pub metrics: Option<Arc<dyn MetricsSink>>,
    pub scripts: ScriptConfig,
    pub mode: RunMode,
}

impl SlashingsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_provider.is_none() {
            return Err(ConfigError::MissingBlockProvider);
        }
        if self.mode == RunMode::Live && self.events_provider.is_none() {
            return Err(ConfigError::MissingEventsProvider);
        }

        for kind in [SlashingKind::Attester, SlashingKind::Proposer] {
            if let Some(path) = self.scripts.script_for(kind)
                && !script_exists(path)
            {
                return Err(ConfigError::ScriptNotFound {
                    kind,
                    path: path.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}

/// A bare command name is looked up on `PATH`, the same way the notifier spawns it. Anything
/// with a directory component is checked as a file path.
fn script_exists(path: &Path) -> bool {
    if path.components().count() > 1 {
        return path.is_file();
    }

    env::var_os("PATH").is_some_and(|paths| {
        env::split_paths(&paths).any(|directory| directory.join(path).is_file())
    })
}

impl fmt::Debug for SlashingsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlashingsConfig")
            .field("block_provider", &self.block_provider.is_some())
            .field("events_provider", &self.events_provider.is_some())
            .field("metrics", &self.metrics.is_some())
            .field("scripts", &self.scripts)
            .field("mode", &self.mode)
            .finish()
    }
}
