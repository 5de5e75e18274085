use slashwatch_beacon_api_client::block_id::BlockId;
use slashwatch_consensus_beacon::Slot;
use slashwatch_slashings::{
    errors::MalformedSlashingError, event::SlashingEvent, notifier::NotifyOutcome,
};

/// What happened while processing a single block.
#[derive(Debug)]
pub struct BlockReport {
    pub block_id: BlockId,
    pub slot: Slot,
    pub events: Vec<SlashingEvent>,
    pub rejected: Vec<MalformedSlashingError>,
    /// One entry per event, in the same order.
    pub outcomes: Vec<NotifyOutcome>,
}

impl BlockReport {
    pub fn has_slashings(&self) -> bool {
        !self.events.is_empty()
    }
}
