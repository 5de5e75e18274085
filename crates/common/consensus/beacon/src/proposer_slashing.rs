use serde::{Deserialize, Serialize};

use crate::{ValidatorIndex, beacon_block_header::SignedBeaconBlockHeader};

/// Two conflicting headers signed by the same proposer for the same slot.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct ProposerSlashing {
    pub signed_header_1: SignedBeaconBlockHeader,
    pub signed_header_2: SignedBeaconBlockHeader,
}

impl ProposerSlashing {
    /// Returns the proposer index named by both headers, or `None` when they disagree.
    pub fn proposer_index(&self) -> Option<ValidatorIndex> {
        let first = self.signed_header_1.message.proposer_index;
        (first == self.signed_header_2.message.proposer_index).then_some(first)
    }
}
