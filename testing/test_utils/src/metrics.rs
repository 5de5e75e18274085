use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use slashwatch_consensus_beacon::ValidatorIndex;
use slashwatch_metrics::MetricsSink;
use tokio::sync::Notify;

/// [`MetricsSink`] that remembers every call it receives.
#[derive(Debug, Default)]
pub struct RecordingMetrics {
    slashings: Mutex<Vec<ValidatorIndex>>,
    blocks_processed: AtomicU64,
    block_processed_signal: Arc<Notify>,
}

impl RecordingMetrics {
    pub fn slashings(&self) -> Vec<ValidatorIndex> {
        self.slashings.lock().expect("lock poisoned").clone()
    }

    pub fn blocks_processed(&self) -> u64 {
        self.blocks_processed.load(Ordering::SeqCst)
    }

    /// Notified once for every processed block.
    pub fn block_processed_signal(&self) -> Arc<Notify> {
        self.block_processed_signal.clone()
    }
}

impl MetricsSink for RecordingMetrics {
    fn slashing_found(&self, validator_index: ValidatorIndex) {
        self.slashings
            .lock()
            .expect("lock poisoned")
            .push(validator_index);
    }

    fn block_processed(&self) {
        self.blocks_processed.fetch_add(1, Ordering::SeqCst);
        self.block_processed_signal.notify_one();
    }
}
