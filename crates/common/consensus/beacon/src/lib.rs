#![warn(clippy::unwrap_used)]

pub mod attestation_data;
pub mod attester_slashing;
pub mod beacon_block;
pub mod beacon_block_header;
pub mod checkpoint;
pub mod indexed_attestation;
pub mod proposer_slashing;

pub type Slot = u64;
pub type Epoch = u64;
pub type ValidatorIndex = u64;
