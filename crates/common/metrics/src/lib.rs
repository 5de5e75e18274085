pub mod helpers;

use helpers::{create_int_counter, create_int_counter_vec, create_int_gauge, create_int_gauge_vec};
use prometheus_exporter::prometheus::{IntCounter, IntCounterVec, IntGauge, IntGaugeVec};

lazy_static::lazy_static! {
    pub static ref BLOCKS_PROCESSED_TOTAL: IntCounter = create_int_counter(
        "slashwatch_blocks_processed_total",
        "Total number of blocks processed"
    );

    pub static ref SLASHINGS_TOTAL: IntCounterVec = create_int_counter_vec(
        "slashwatch_slashings_total",
        "Register of slashings found",
        &["index"]
    );

    pub static ref RELEASE: IntGaugeVec = create_int_gauge_vec(
        "slashwatch_release",
        "The release of this instance",
        &["version"]
    );

    pub static ref READY: IntGauge = create_int_gauge(
        "slashwatch_ready",
        "1 if all services are operational"
    );
}

/// Destination for the counters the slashing pipeline maintains.
///
/// Implementations are called from concurrently running block handlers and must not assume
/// exclusive access.
pub trait MetricsSink: Send + Sync {
    fn slashing_found(&self, validator_index: u64);

    fn block_processed(&self);
}

/// [`MetricsSink`] backed by the process-wide prometheus registry served by the exporter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusMetrics;

impl MetricsSink for PrometheusMetrics {
    fn slashing_found(&self, validator_index: u64) {
        helpers::inc_int_counter_vec(&SLASHINGS_TOTAL, &[&validator_index.to_string()]);
    }

    fn block_processed(&self) {
        BLOCKS_PROCESSED_TOTAL.inc();
    }
}

pub fn set_release(version: &str) {
    helpers::set_int_gauge_vec(&RELEASE, 1, &[version]);
}

pub fn set_ready(ready: bool) {
    READY.set(i64::from(ready));
}
