use slashwatch_consensus_beacon::{
    attester_slashing::AttesterSlashing, beacon_block::BeaconBlock,
    proposer_slashing::ProposerSlashing,
};

use crate::{errors::MalformedSlashingError, event::SlashingEvent, intersection::intersection};

/// Everything a single block says about slashed validators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Attester events first (record order, ascending index), then proposer events.
    pub events: Vec<SlashingEvent>,
    /// Records or lists that were skipped because they could not be interpreted.
    pub rejected: Vec<MalformedSlashingError>,
}

/// Finds every validator slashed by the evidence included in `block`.
///
/// This is a pure function of the block contents: no logging, no metrics, and the same block
/// always yields the same [`Detection`].
pub fn detect(block: &BeaconBlock) -> Detection {
    let mut detection = Detection::default();

    match &block.body.attester_slashings {
        Some(slashings) => detection
            .events
            .extend(attester_slashing_events(slashings)),
        None => detection
            .rejected
            .push(MalformedSlashingError::MissingAttesterSlashings),
    }

    match &block.body.proposer_slashings {
        Some(slashings) => {
            for (position, slashing) in slashings.iter().enumerate() {
                match proposer_slashing_event(position, slashing) {
                    Ok(event) => detection.events.push(event),
                    Err(err) => detection.rejected.push(err),
                }
            }
        }
        None => detection
            .rejected
            .push(MalformedSlashingError::MissingProposerSlashings),
    }

    detection
}

fn attester_slashing_events(
    slashings: &[AttesterSlashing],
) -> impl Iterator<Item = SlashingEvent> + '_ {
    slashings.iter().flat_map(|slashing| {
        intersection(
            &slashing.attestation_1.attesting_indices,
            &slashing.attestation_2.attesting_indices,
        )
        .into_iter()
        .map(SlashingEvent::attester)
    })
}

fn proposer_slashing_event(
    position: usize,
    slashing: &ProposerSlashing,
) -> Result<SlashingEvent, MalformedSlashingError> {
    slashing
        .proposer_index()
        .map(SlashingEvent::proposer)
        .ok_or(MalformedSlashingError::ProposerIndexMismatch {
            position,
            first: slashing.signed_header_1.message.proposer_index,
            second: slashing.signed_header_2.message.proposer_index,
        })
}

#[cfg(test)]
mod tests {
    use slashwatch_consensus_beacon::{
        beacon_block::{BeaconBlockBody, SignedBeaconBlock},
        beacon_block_header::SignedBeaconBlockHeader,
        indexed_attestation::IndexedAttestation,
    };

    use super::*;

    fn attester_slashing(first: Vec<u64>, second: Vec<u64>) -> AttesterSlashing {
        AttesterSlashing {
            attestation_1: IndexedAttestation::with_indices(first),
            attestation_2: IndexedAttestation::with_indices(second),
        }
    }

    fn proposer_slashing(first: u64, second: u64) -> ProposerSlashing {
        ProposerSlashing {
            signed_header_1: SignedBeaconBlockHeader::for_proposer(100, first),
            signed_header_2: SignedBeaconBlockHeader::for_proposer(100, second),
        }
    }

    #[test]
    fn test_empty_block_yields_nothing() {
        let block = SignedBeaconBlock::new(1, vec![], vec![]);
        assert_eq!(detect(&block.message), Detection::default());
    }

    #[test]
    fn test_proposer_slashing_yields_one_event() {
        let block = SignedBeaconBlock::new(
            1,
            vec![attester_slashing(vec![1, 2], vec![3, 4])],
            vec![proposer_slashing(42, 42)],
        );
        let detection = detect(&block.message);
        assert_eq!(detection.events, vec![SlashingEvent::proposer(42)]);
        assert!(detection.rejected.is_empty());
    }

    #[test]
    fn test_attester_events_precede_proposer_events() {
        let block = SignedBeaconBlock::new(
            1,
            vec![
                attester_slashing(vec![9, 3, 5], vec![5, 3]),
                attester_slashing(vec![1], vec![1, 2]),
            ],
            vec![proposer_slashing(7, 7), proposer_slashing(2, 2)],
        );

        let detection = detect(&block.message);
        assert_eq!(
            detection.events,
            vec![
                SlashingEvent::attester(3),
                SlashingEvent::attester(5),
                SlashingEvent::attester(1),
                SlashingEvent::proposer(7),
                SlashingEvent::proposer(2),
            ]
        );
        assert_eq!(detect(&block.message), detection);
    }

    #[test]
    fn test_duplicate_attesting_indices_reported_once() {
        let block = SignedBeaconBlock::new(
            1,
            vec![attester_slashing(vec![7, 7, 9], vec![7, 9, 9])],
            vec![],
        );
        assert_eq!(
            detect(&block.message).events,
            vec![SlashingEvent::attester(7), SlashingEvent::attester(9)]
        );
    }

    #[test]
    fn test_mismatched_proposer_headers_are_skipped() {
        let block = SignedBeaconBlock::new(
            1,
            vec![],
            vec![proposer_slashing(10, 11), proposer_slashing(12, 12)],
        );

        let detection = detect(&block.message);
        assert_eq!(detection.events, vec![SlashingEvent::proposer(12)]);
        assert_eq!(
            detection.rejected,
            vec![MalformedSlashingError::ProposerIndexMismatch {
                position: 0,
                first: 10,
                second: 11,
            }]
        );
    }

    #[test]
    fn test_missing_slashing_lists_are_reported() {
        let mut block = SignedBeaconBlock::new(1, vec![], vec![proposer_slashing(4, 4)]).message;
        block.body = BeaconBlockBody {
            attester_slashings: None,
            ..block.body
        };

        let detection = detect(&block);
        assert_eq!(detection.events, vec![SlashingEvent::proposer(4)]);
        assert_eq!(
            detection.rejected,
            vec![MalformedSlashingError::MissingAttesterSlashings]
        );

        block.body.proposer_slashings = None;
        assert_eq!(
            detect(&block).rejected,
            vec![
                MalformedSlashingError::MissingAttesterSlashings,
                MalformedSlashingError::MissingProposerSlashings,
            ]
        );
    }
}
