use alloy_primitives::{B256, Bytes};
use serde::{Deserialize, Serialize};

use crate::{
    Slot, ValidatorIndex, attester_slashing::AttesterSlashing,
    proposer_slashing::ProposerSlashing,
};

/// The parts of a block body this crate reads. Every other field of the fork-specific body is
/// ignored on deserialization.
///
/// The slashing lists are optional so a body that lacks them (or carries them under an
/// unexpected shape upstream) is still representable; callers decide how to report that.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BeaconBlockBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposer_slashings: Option<Vec<ProposerSlashing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attester_slashings: Option<Vec<AttesterSlashing>>,
}

impl Default for BeaconBlockBody {
    fn default() -> Self {
        Self {
            proposer_slashings: Some(vec![]),
            attester_slashings: Some(vec![]),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct BeaconBlock {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: ValidatorIndex,
    pub parent_root: B256,
    pub state_root: B256,
    pub body: BeaconBlockBody,
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct SignedBeaconBlock {
    pub message: BeaconBlock,
    pub signature: Bytes,
}

impl SignedBeaconBlock {
    pub fn new(
        slot: Slot,
        attester_slashings: Vec<AttesterSlashing>,
        proposer_slashings: Vec<ProposerSlashing>,
    ) -> Self {
        Self {
            message: BeaconBlock {
                slot,
                body: BeaconBlockBody {
                    proposer_slashings: Some(proposer_slashings),
                    attester_slashings: Some(attester_slashings),
                },
                ..Default::default()
            },
            signature: Bytes::default(),
        }
    }
}
