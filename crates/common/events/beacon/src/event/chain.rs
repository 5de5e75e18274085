use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Sent by the node whenever fork choice settles on a new head block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadEvent {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    /// Root of the new head block.
    pub block: B256,
    pub state: B256,
    pub epoch_transition: bool,
    pub previous_duty_dependent_root: B256,
    pub current_duty_dependent_root: B256,
    pub execution_optimistic: bool,
}

impl HeadEvent {
    pub fn new(slot: u64, block: B256) -> Self {
        Self {
            slot,
            block,
            state: B256::ZERO,
            epoch_transition: false,
            previous_duty_dependent_root: B256::ZERO,
            current_duty_dependent_root: B256::ZERO,
            execution_optimistic: false,
        }
    }
}

/// Sent for every imported block, whether or not it became the head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEvent {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    pub block: B256,
    pub execution_optimistic: bool,
}
