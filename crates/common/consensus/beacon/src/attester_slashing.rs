use serde::{Deserialize, Serialize};

use crate::indexed_attestation::IndexedAttestation;

/// Two conflicting attestations. Every validator present in both is slashable.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct AttesterSlashing {
    pub attestation_1: IndexedAttestation,
    pub attestation_2: IndexedAttestation,
}
