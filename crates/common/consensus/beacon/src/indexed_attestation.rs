use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

use crate::{ValidatorIndex, attestation_data::AttestationData};

/// An attestation with its aggregation bits already resolved to validator indices.
///
/// Indices are ascending on a valid attestation, but nothing here relies on that: a block handed
/// to us by the beacon node is treated as untrusted input.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct IndexedAttestation {
    #[serde(with = "serde_utils::quoted_u64_vec")]
    pub attesting_indices: Vec<ValidatorIndex>,
    pub data: AttestationData,
    pub signature: Bytes,
}

impl IndexedAttestation {
    pub fn with_indices(attesting_indices: Vec<ValidatorIndex>) -> Self {
        Self {
            attesting_indices,
            ..Default::default()
        }
    }
}
