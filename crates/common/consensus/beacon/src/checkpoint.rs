use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::Epoch;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Checkpoint {
    #[serde(with = "serde_utils::quoted_u64")]
    pub epoch: Epoch,
    pub root: B256,
}
