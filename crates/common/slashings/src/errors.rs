use std::{io, path::PathBuf, process::ExitStatus};

use slashwatch_consensus_beacon::ValidatorIndex;
use thiserror::Error;

/// A slashing record, or a whole slashing list, that could not be turned into events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedSlashingError {
    #[error("Block body has no readable attester slashings")]
    MissingAttesterSlashings,

    #[error("Block body has no readable proposer slashings")]
    MissingProposerSlashings,

    #[error(
        "Proposer slashing {position} names two proposers: {first} in header 1, {second} in header 2"
    )]
    ProposerIndexMismatch {
        position: usize,
        first: ValidatorIndex,
        second: ValidatorIndex,
    },
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to run script {script:?}: {source}")]
    Spawn {
        script: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Script {script:?} exited with {status}")]
    Failed {
        script: PathBuf,
        status: ExitStatus,
        output: String,
    },
}

impl ScriptError {
    /// Combined output captured from the script, if it got far enough to produce any.
    pub fn output(&self) -> Option<&str> {
        match self {
            ScriptError::Spawn { .. } => None,
            ScriptError::Failed { output, .. } => Some(output),
        }
    }
}
