use std::fmt;

use slashwatch_consensus_beacon::ValidatorIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlashingKind {
    Attester,
    Proposer,
}

impl fmt::Display for SlashingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlashingKind::Attester => write!(f, "attester"),
            SlashingKind::Proposer => write!(f, "proposer"),
        }
    }
}

/// One validator found slashable by one slashing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlashingEvent {
    pub kind: SlashingKind,
    pub validator_index: ValidatorIndex,
}

impl SlashingEvent {
    pub fn attester(validator_index: ValidatorIndex) -> Self {
        Self {
            kind: SlashingKind::Attester,
            validator_index,
        }
    }

    pub fn proposer(validator_index: ValidatorIndex) -> Self {
        Self {
            kind: SlashingKind::Proposer,
            validator_index,
        }
    }
}
