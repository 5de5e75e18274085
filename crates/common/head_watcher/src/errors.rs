use std::path::PathBuf;

use slashwatch_beacon_api_client::errors::{FetchError, SubscriptionError};
use slashwatch_slashings::event::SlashingKind;
use thiserror::Error;

/// Problems with a [`crate::SlashingsConfig`], reported before anything runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No block provider configured")]
    MissingBlockProvider,

    #[error("Watching the chain head requires an events provider")]
    MissingEventsProvider,

    #[error("The {kind} slashed script {path:?} is not a file or a command on PATH")]
    ScriptNotFound { kind: SlashingKind, path: PathBuf },
}

#[derive(Debug, Error)]
pub enum SlashingsError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to subscribe to head events: {0}")]
    Subscription(#[from] SubscriptionError),

    #[error("Failed to fetch block: {0}")]
    Fetch(#[from] FetchError),
}
