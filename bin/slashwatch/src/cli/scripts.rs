use std::path::PathBuf;

use clap::Args;
use slashwatch_slashings::notifier::ScriptConfig;

#[derive(Debug, Clone, Args)]
pub struct ScriptArgs {
    /// Script to run when an attester is slashed. Receives the validator index as its argument
    #[arg(long, env = "SLASHWATCH_ATTESTER_SLASHED_SCRIPT")]
    pub attester_slashed_script: Option<PathBuf>,

    /// Script to run when a proposer is slashed. Receives the validator index as its argument
    #[arg(long, env = "SLASHWATCH_PROPOSER_SLASHED_SCRIPT")]
    pub proposer_slashed_script: Option<PathBuf>,
}

impl From<ScriptArgs> for ScriptConfig {
    fn from(args: ScriptArgs) -> Self {
        ScriptConfig {
            attester_slashed_script: args.attester_slashed_script,
            proposer_slashed_script: args.proposer_slashed_script,
        }
    }
}
