use alloy_primitives::B256;
use slashwatch_consensus_beacon::{
    Slot, ValidatorIndex, attester_slashing::AttesterSlashing, beacon_block::SignedBeaconBlock,
    beacon_block_header::SignedBeaconBlockHeader, indexed_attestation::IndexedAttestation,
    proposer_slashing::ProposerSlashing,
};
use slashwatch_events_beacon::{BeaconEvent, event::chain::HeadEvent};

pub fn attester_slashing(
    first: Vec<ValidatorIndex>,
    second: Vec<ValidatorIndex>,
) -> AttesterSlashing {
    AttesterSlashing {
        attestation_1: IndexedAttestation::with_indices(first),
        attestation_2: IndexedAttestation::with_indices(second),
    }
}

/// Two conflicting headers for the same slot. Passing different indices builds a record whose
/// headers disagree on the proposer.
pub fn proposer_slashing(first: ValidatorIndex, second: ValidatorIndex) -> ProposerSlashing {
    ProposerSlashing {
        signed_header_1: SignedBeaconBlockHeader::for_proposer(1, first),
        signed_header_2: SignedBeaconBlockHeader::for_proposer(1, second),
    }
}

pub fn empty_block(slot: Slot) -> SignedBeaconBlock {
    SignedBeaconBlock::new(slot, vec![], vec![])
}

/// A deterministic block root for tests that only care about identity.
pub fn root(seed: u8) -> B256 {
    B256::repeat_byte(seed)
}

pub fn head_event(slot: Slot, block: B256) -> BeaconEvent {
    BeaconEvent::Head(HeadEvent::new(slot, block))
}
