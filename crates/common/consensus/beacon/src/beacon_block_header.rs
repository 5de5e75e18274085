use alloy_primitives::{B256, Bytes};
use serde::{Deserialize, Serialize};

use crate::{Slot, ValidatorIndex};

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct BeaconBlockHeader {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: ValidatorIndex,
    pub parent_root: B256,
    pub state_root: B256,
    pub body_root: B256,
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct SignedBeaconBlockHeader {
    pub message: BeaconBlockHeader,
    pub signature: Bytes,
}

impl SignedBeaconBlockHeader {
    pub fn for_proposer(slot: Slot, proposer_index: ValidatorIndex) -> Self {
        Self {
            message: BeaconBlockHeader {
                slot,
                proposer_index,
                ..Default::default()
            },
            signature: Bytes::default(),
        }
    }
}
